//! Tokenizer adapters.
//!
//! The chain only depends on the `Tokenizer` trait: any word or morpheme
//! segmenter can be plugged in, as long as it turns one sentence into an
//! ordered list of tokens and knows how to glue tokens back into text.

use std::fmt;
use std::str::FromStr;

/// A single token. Opaque to the chain, compared by value.
pub type Token = String;

/// Splits a sentence into tokens and renders tokens back into text.
pub trait Tokenizer: Send + Sync + fmt::Debug {
	/// Returns the ordered tokens of one sentence (may be empty).
	fn tokenize(&self, sentence: &str) -> Vec<Token>;

	/// Joins generated tokens into a sentence.
	///
	/// Defaults to single-space separators.
	fn detokenize(&self, tokens: &[Token]) -> String {
		tokens.join(" ")
	}
}

/// Word tokenizer splitting on Unicode whitespace.
///
/// Punctuation stays attached to its word (`"cats."` is one token).
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
	fn tokenize(&self, sentence: &str) -> Vec<Token> {
		sentence.split_whitespace().map(str::to_owned).collect()
	}
}

/// Character tokenizer for scripts written without spaces (Japanese, Chinese, ...).
///
/// Whitespace characters are dropped; rendering concatenates tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharTokenizer;

impl Tokenizer for CharTokenizer {
	fn tokenize(&self, sentence: &str) -> Vec<Token> {
		sentence
			.chars()
			.filter(|c| !c.is_whitespace())
			.map(String::from)
			.collect()
	}

	fn detokenize(&self, tokens: &[Token]) -> String {
		tokens.concat()
	}
}

/// Built-in tokenizer selection, parsed from configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerKind {
	#[default]
	Whitespace,
	Char,
}

impl TokenizerKind {
	/// Instantiates the selected adapter.
	pub fn build(self) -> Box<dyn Tokenizer> {
		match self {
			Self::Whitespace => Box::new(WhitespaceTokenizer),
			Self::Char => Box::new(CharTokenizer),
		}
	}
}

impl FromStr for TokenizerKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"whitespace" | "word" => Ok(Self::Whitespace),
			"char" | "character" => Ok(Self::Char),
			_ => Err(format!(
				"unknown tokenizer: {s:?} (expected \"whitespace\" or \"char\")"
			)),
		}
	}
}

impl fmt::Display for TokenizerKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Whitespace => write!(f, "whitespace"),
			Self::Char => write!(f, "char"),
		}
	}
}
