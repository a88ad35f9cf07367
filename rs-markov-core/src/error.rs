//! Error type shared by every stage of the chain (configuration, training, generation).

use std::io;

/// Errors raised while configuring, training or walking a Markov chain.
///
/// Every variant aborts the current call; none of them is transient.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
	/// Invalid or missing configuration (no corpus, order < 1, ...).
	#[error("configuration error: {0}")]
	Configuration(String),

	/// The requested start word does not open any training sentence.
	#[error("start word {0:?} does not begin any training sentence, choose another word")]
	InvalidStartWord(String),

	/// No recorded window continues the current one at this position.
	#[error("no continuation for window {window} at position {position}")]
	NoContinuation { position: usize, window: String },

	/// The model holds no begin windows to start a walk from.
	#[error("the model has no begin windows, train it on a non-empty corpus first")]
	EmptyModel,

	/// Reading the corpus failed.
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ChainError>;
