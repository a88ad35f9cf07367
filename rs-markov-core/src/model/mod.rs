//! Top-level module for the Markov chain.
//!
//! Provides an n-th order, token-level chain including:
//! - Padding of tokenized sentences with start/end markers (`sequence`)
//! - Windows of `n` tokens (`Window`)
//! - Frequency, position and begin/end tables (`WindowIndex`)
//! - The greedy walk producing new sentences (`Generator`)
//! - A high-level facade tying tokenizer, tables and walk together (`MarkovModel`)

/// Sentence padding and the reserved marker tokens.
pub mod sequence;

/// Fixed-size token tuples, the unit counted by the chain.
pub mod window;

/// Training tables built from padded sequences.
///
/// Counts windows, catalogues them by offset and collects begin/end windows.
pub mod window_index;

/// Walk over a trained index.
///
/// Prefers the most frequent continuation, breaks ties at random.
pub mod generator;

/// High-level model: training from text or tokens, sentence generation.
pub mod markov_model;
