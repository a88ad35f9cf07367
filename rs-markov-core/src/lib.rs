//! Markov-chain sentence generation library.
//!
//! This crate provides an n-th order, token-level Markov chain including:
//! - Pluggable tokenizers (words or characters)
//! - Sentence splitting of raw documents
//! - Training tables over n-token windows
//! - Generation that follows the most frequent continuation, with random tie-breaks
//!
//! Typical use goes through `model::markov_model::MarkovModel`.

/// Chain tables, generation walk and the high-level model.
pub mod model;

/// Tokenizer trait and built-in adapters.
pub mod tokenizer;

/// Raw text cleanup and sentence splitting.
pub mod text;

/// Configuration of a training/generation run.
pub mod config;

/// Error type of the crate.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;

pub use config::ChainConfig;
pub use error::{ChainError, Result};
pub use model::markov_model::MarkovModel;
