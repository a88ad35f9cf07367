use std::fmt;

use super::sequence::START;
use crate::tokenizer::Token;

/// An ordered tuple of `n` consecutive tokens taken from a padded sequence.
///
/// Conceptually a node of the chain: its leading `n-1` tokens (`head`) are the
/// context it was reached from and its trailing `n-1` tokens (`tail`) are the
/// context the next window must continue.
///
/// ## Invariants
/// - Holds at least one token (the chain order is always >= 1)
/// - Identity is by value; ordering is lexicographic so sets iterate deterministically
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Window(Vec<Token>);

impl Window {
	/// Creates a window from its tokens.
	pub fn new(tokens: Vec<Token>) -> Self {
		debug_assert!(!tokens.is_empty(), "a window holds at least one token");
		Self(tokens)
	}

	/// Builds a window from borrowed tokens.
	pub fn from_strs(tokens: &[&str]) -> Self {
		Self::new(tokens.iter().map(|t| (*t).to_owned()).collect())
	}

	/// Window order (number of tokens).
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn tokens(&self) -> &[Token] {
		&self.0
	}

	/// Leading `n-1` tokens.
	pub fn head(&self) -> &[Token] {
		&self.0[..self.0.len().saturating_sub(1)]
	}

	/// Trailing `n-1` tokens.
	pub fn tail(&self) -> &[Token] {
		self.0.get(1..).unwrap_or_default()
	}

	/// Last token, the one a walk emits when it moves onto this window.
	pub fn last(&self) -> &str {
		self.0.last().map_or("", String::as_str)
	}

	/// Returns `true` if this window can follow `previous` in a walk.
	///
	/// With order 1 the context is empty, so every window continues every other.
	pub fn continues(&self, previous: &Window) -> bool {
		self.head() == previous.tail()
	}

	/// Returns `true` if all leading `n-1` tokens are start markers.
	pub fn starts_sequence(&self) -> bool {
		self.head().iter().all(|t| t == START)
	}
}

impl fmt::Display for Window {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({})", self.0.join(", "))
	}
}
