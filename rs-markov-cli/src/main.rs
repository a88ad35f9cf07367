use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::config::DEFAULT_ORDER;
use rs_markov_core::text::DEFAULT_TERMINATORS;
use rs_markov_core::tokenizer::TokenizerKind;
use rs_markov_core::{ChainConfig, ChainError, MarkovModel};

/// Command-line arguments.
///
/// Validation is left to `ChainConfig`, so a missing `--text` or an order
/// below 1 surfaces as a configuration error rather than a usage error.
#[derive(Parser, Debug)]
#[command(name = "rs-markov", about = "Generate sentences with an n-th order Markov chain")]
struct Cli {
    /// Corpus text file (required)
    #[arg(short, long)]
    text: Option<PathBuf>,

    /// Chain order: number of tokens per window
    #[arg(short, long = "n_order", default_value_t = DEFAULT_ORDER as i64, allow_negative_numbers = true)]
    n_order: i64,

    /// First word of the generated sentence
    #[arg(short, long)]
    word: Option<String>,

    /// Tokenizer: "whitespace" (words) or "char" (characters)
    #[arg(short = 'k', long, default_value_t = TokenizerKind::Whitespace)]
    tokenizer: TokenizerKind,

    /// Characters ending a sentence
    #[arg(long, default_value = DEFAULT_TERMINATORS)]
    terminators: String,

    /// Number of sentences to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Cli {
    /// Converts the arguments into a validated configuration.
    fn into_config(self) -> Result<ChainConfig, ChainError> {
        let mut config = ChainConfig::default();
        // Negative orders map to 0 and are rejected by the setter
        config.set_order(usize::try_from(self.n_order).unwrap_or(0))?;
        config.set_terminators(&self.terminators)?;
        config.set_count(self.count)?;
        config.text = self.text;
        config.begin_word = self.word;
        config.tokenizer = self.tokenizer;
        config.seed = self.seed;
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Cli::parse().into_config()?;
    let model = MarkovModel::from_config(&config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for i in 0..config.count() {
        let sentence = model.generate_with_rng(config.begin_word.as_deref(), &mut rng)?;
        info!("generated sentence {}", i + 1);
        println!("{sentence}");
    }

    Ok(())
}
