use std::path::{Path, PathBuf};

use crate::error::{ChainError, Result};
use crate::text::DEFAULT_TERMINATORS;
use crate::tokenizer::TokenizerKind;

/// Default chain order.
pub const DEFAULT_ORDER: usize = 3;

/// Parameters for training a chain from a corpus file and generating from it.
///
/// # Responsibilities
/// - Hold the corpus location, tokenizer choice and sentence terminators
/// - Hold generation parameters (`begin_word`, `count`, `seed`)
/// - Reject invalid values as configuration errors
///
/// # Invariants
/// - `order >= 1`, `count >= 1`, `terminators` is never empty
#[derive(Debug, Clone)]
pub struct ChainConfig {
	/// Corpus file. Required by `validate`.
	pub text: Option<PathBuf>,

	/// Chain order (tokens per window).
	order: usize,

	/// Optional start word.
	pub begin_word: Option<String>,

	/// Tokenizer used for training and rendering.
	pub tokenizer: TokenizerKind,

	/// Characters ending a sentence.
	terminators: String,

	/// Number of sentences to generate.
	count: usize,

	/// Seed of the random source, `None` for the thread-local generator.
	pub seed: Option<u64>,
}

impl Default for ChainConfig {
	fn default() -> Self {
		Self {
			text: None,
			order: DEFAULT_ORDER,
			begin_word: None,
			tokenizer: TokenizerKind::default(),
			terminators: DEFAULT_TERMINATORS.to_owned(),
			count: 1,
			seed: None,
		}
	}
}

impl ChainConfig {
	pub fn order(&self) -> usize {
		self.order
	}

	pub fn terminators(&self) -> &str {
		&self.terminators
	}

	pub fn count(&self) -> usize {
		self.count
	}

	/// Sets the chain order.
	///
	/// # Errors
	/// Returns a configuration error if `order < 1`.
	pub fn set_order(&mut self, order: usize) -> Result<()> {
		if order < 1 {
			return Err(ChainError::Configuration("n_order must be >= 1".to_owned()));
		}
		self.order = order;
		Ok(())
	}

	/// Sets the sentence terminators.
	///
	/// # Errors
	/// Returns a configuration error if `terminators` is empty.
	pub fn set_terminators(&mut self, terminators: &str) -> Result<()> {
		if terminators.is_empty() {
			return Err(ChainError::Configuration("at least one sentence terminator is required".to_owned()));
		}
		self.terminators = terminators.to_owned();
		Ok(())
	}

	/// Sets the number of sentences to generate.
	///
	/// # Errors
	/// Returns a configuration error if `count` is 0.
	pub fn set_count(&mut self, count: usize) -> Result<()> {
		if count == 0 {
			return Err(ChainError::Configuration("count must be >= 1".to_owned()));
		}
		self.count = count;
		Ok(())
	}

	/// Checks the configuration is complete and returns the corpus path.
	///
	/// # Errors
	/// Returns a configuration error if no corpus file was given.
	pub fn validate(&self) -> Result<&Path> {
		self.text
			.as_deref()
			.ok_or_else(|| ChainError::Configuration("a text file is required (--text)".to_owned()))
	}
}
