use log::info;
use rand::Rng;

use super::generator::Generator;
use super::sequence::{END, START, build_sequence};
use super::window_index::WindowIndex;
use crate::config::ChainConfig;
use crate::error::Result;
use crate::io::read_text;
use crate::text::SentenceSplitter;
use crate::tokenizer::{Token, Tokenizer};

/// An n-th order Markov chain over tokenized sentences.
///
/// This struct manages:
/// - `tokenizer`: turns sentences into tokens and generated tokens back into text.
/// - `splitter`: cuts raw documents into sentences.
/// - `index`: the frequency table, position index and begin/end sets.
///
/// Training rebuilds the index from scratch; generation only reads it, so a
/// trained model can serve any number of generations (including from several
/// threads through `&MarkovModel`).
#[derive(Debug)]
pub struct MarkovModel {
	tokenizer: Box<dyn Tokenizer>,
	splitter: SentenceSplitter,
	index: WindowIndex,
}

impl MarkovModel {
	/// Creates an untrained model of order `order`.
	///
	/// # Errors
	/// Returns a configuration error if `order < 1`.
	pub fn new(order: usize, tokenizer: Box<dyn Tokenizer>) -> Result<Self> {
		Ok(Self {
			tokenizer,
			splitter: SentenceSplitter::default(),
			index: WindowIndex::new(order)?,
		})
	}

	/// Replaces the sentence splitter used by `train_text`.
	pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
		self.splitter = splitter;
		self
	}

	/// Builds and trains a model from a configuration.
	///
	/// # Behavior
	/// - Validates the configuration (a corpus file is required).
	/// - Reads the corpus, splits it with the configured terminators and trains.
	///
	/// # Errors
	/// Configuration errors, or I/O errors while reading the corpus.
	pub fn from_config(config: &ChainConfig) -> Result<Self> {
		let path = config.validate()?;
		let mut model = Self::new(config.order(), config.tokenizer.build())?
			.with_splitter(SentenceSplitter::new(config.terminators()));

		let text = read_text(path)?;
		info!("training order {} chain on {}", config.order(), path.display());
		model.train_text(&text);
		Ok(model)
	}

	pub fn order(&self) -> usize {
		self.index.order()
	}

	/// Read-only access to the training tables.
	pub fn index(&self) -> &WindowIndex {
		&self.index
	}

	/// Trains on already tokenized sentences.
	///
	/// Each token list is padded with start/end markers before indexing.
	pub fn train<I>(&mut self, sentences: I)
	where
		I: IntoIterator<Item = Vec<Token>>,
	{
		let order = self.order();
		self.index.train(sentences.into_iter().map(|tokens| build_sequence(order, tokens)));
	}

	/// Tokenizes and trains on raw sentences (one sentence per item).
	pub fn train_sentences<I, S>(&mut self, sentences: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let tokenized: Vec<Vec<Token>> = sentences
			.into_iter()
			.map(|sentence| self.tokenizer.tokenize(sentence.as_ref()))
			.collect();
		self.train(tokenized);
	}

	/// Splits a raw document into sentences and trains on them.
	pub fn train_text(&mut self, text: &str) {
		let sentences = self.splitter.split(text);
		self.train_sentences(sentences);
	}

	/// Generates one sentence using the thread-local random source.
	///
	/// See `generate_with_rng`.
	pub fn generate(&self, begin_word: Option<&str>) -> Result<String> {
		self.generate_with_rng(begin_word, &mut rand::rng())
	}

	/// Generates one sentence.
	///
	/// # Parameters
	/// - `begin_word`: first word of the sentence; it must open a training sentence.
	///   `None` starts from a random begin window.
	/// - `rng`: random source for the begin window and tie-breaks.
	///
	/// # Returns
	/// The rendered sentence, markers removed and whitespace trimmed.
	///
	/// # Errors
	/// `InvalidStartWord`, `EmptyModel` or `NoContinuation`.
	pub fn generate_with_rng<R: Rng + ?Sized>(&self, begin_word: Option<&str>, rng: &mut R) -> Result<String> {
		let tokens = Generator::new(&self.index).walk(begin_word, rng)?;
		Ok(self.render(&tokens))
	}

	/// Joins generated tokens into text, dropping the markers.
	fn render(&self, tokens: &[Token]) -> String {
		let words: Vec<Token> = tokens
			.iter()
			.filter(|t| *t != END && *t != START)
			.cloned()
			.collect();
		self.tokenizer.detokenize(&words).trim().to_owned()
	}
}
