//! Raw text preprocessing: cleanup and sentence splitting.

/// Quotation brackets removed before splitting.
const STRIPPED_CHARS: &[char] = &['「', '」', '『', '』', '“', '”', '"'];

/// Default sentence terminators (Japanese and Latin punctuation).
pub const DEFAULT_TERMINATORS: &str = "。．.！!？?";

/// Splits a raw document into sentences.
///
/// Quotation brackets are dropped and line breaks become spaces, then the
/// text is cut after every run of terminator characters. The terminator
/// stays attached to its sentence.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
	terminators: Vec<char>,
}

impl Default for SentenceSplitter {
	fn default() -> Self {
		Self::new(DEFAULT_TERMINATORS)
	}
}

impl SentenceSplitter {
	/// Creates a splitter cutting on any character of `terminators`.
	pub fn new(terminators: &str) -> Self {
		Self { terminators: terminators.chars().collect() }
	}

	fn is_terminator(&self, c: char) -> bool {
		self.terminators.contains(&c)
	}

	/// Cleans the text and puts one sentence per line.
	///
	/// Line breaks become spaces instead of being removed, so words wrapped
	/// across lines stay separate for word tokenizers. The character
	/// tokenizer drops the extra spaces anyway.
	///
	/// Example: `「こんにちは。」\nさようなら。` → `こんにちは。\n さようなら。\n`
	pub fn format(&self, text: &str) -> String {
		let mut chars = text
			.chars()
			.filter(|c| !STRIPPED_CHARS.contains(c))
			.map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
			.peekable();

		let mut formatted = String::with_capacity(text.len());
		while let Some(c) = chars.next() {
			formatted.push(c);
			if self.is_terminator(c) && !chars.peek().is_some_and(|&next| self.is_terminator(next)) {
				formatted.push('\n');
			}
		}
		formatted
	}

	/// Returns the trimmed, non-empty sentences of `text`.
	pub fn split(&self, text: &str) -> Vec<String> {
		self.format(text)
			.lines()
			.map(str::trim)
			.filter(|s| !s.is_empty())
			.map(str::to_owned)
			.collect()
	}
}
