use std::collections::HashSet;

use log::debug;
use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom};

use super::sequence::{END, START};
use super::window::Window;
use super::window_index::WindowIndex;
use crate::error::{ChainError, Result};
use crate::tokenizer::Token;

/// Walks a trained `WindowIndex` to produce one sentence.
///
/// # Responsibilities
/// - Pick the starting window (given start word or random begin window)
/// - At each position, keep the continuations with the highest frequency
/// - Break ties uniformly at random with the caller's random source
///
/// # Notes
/// - Read-only over the index: several generators may share one index.
/// - A walk advances one position per step and positions past the index are
///   empty, so it always stops within the length of the longest sequence.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
	index: &'a WindowIndex,
}

impl<'a> Generator<'a> {
	pub fn new(index: &'a WindowIndex) -> Self {
		Self { index }
	}

	/// Selects the window the walk starts from.
	///
	/// # Behavior
	/// - With a start word, the window is `(START,) * (n-1) + (word,)`.
	/// - Without, a begin window is drawn uniformly at random.
	///
	/// # Errors
	/// - `InvalidStartWord` if the start word never opens a sentence.
	/// - `EmptyModel` if there is no begin window to draw from.
	pub fn begin_window<R: Rng + ?Sized>(&self, begin_word: Option<&str>, rng: &mut R) -> Result<Window> {
		match begin_word {
			Some(word) => {
				let mut tokens = vec![START.to_owned(); self.index.order() - 1];
				tokens.push(word.to_owned());
				let window = Window::new(tokens);
				if !self.index.is_begin(&window) {
					return Err(ChainError::InvalidStartWord(word.to_owned()));
				}
				Ok(window)
			}
			None => self
				.index
				.begin_windows()
				.iter()
				.choose(rng)
				.cloned()
				.ok_or(ChainError::EmptyModel),
		}
	}

	/// Returns the continuations of `current` at `position` that share the
	/// highest frequency.
	///
	/// The maximum is computed over every match first, then each distinct
	/// window reaching it is kept once, in index order. The result does not
	/// depend on the scan order of the position list.
	pub fn best_continuations(&self, current: &Window, position: usize) -> Vec<&'a Window> {
		let index = self.index;
		let matches: Vec<&'a Window> = index.at(position).iter().filter(|w| w.continues(current)).collect();

		let Some(best) = matches.iter().map(|w| index.frequency(w)).max() else {
			return Vec::new();
		};

		let mut seen = HashSet::new();
		matches
			.into_iter()
			.filter(|w| index.frequency(w) == best && seen.insert(*w))
			.collect()
	}

	/// Generates the token list of one sentence.
	///
	/// The returned tokens start with the last token of the begin window and
	/// end with `END` when the walk reached a sentence end through it.
	///
	/// # Errors
	/// - Errors of `begin_window`.
	/// - `NoContinuation` if no window continues the walk before an end condition.
	pub fn walk<R: Rng + ?Sized>(&self, begin_word: Option<&str>, rng: &mut R) -> Result<Vec<Token>> {
		let mut current = self.begin_window(begin_word, rng)?;
		debug!("walk starts from {current}");

		let mut output = vec![current.last().to_owned()];
		let mut position = 1;

		while current.last() != END && !self.index.is_end(&current) {
			let candidates = self.best_continuations(&current, position);
			let next = match candidates.choose(rng) {
				Some(w) => (*w).clone(),
				None => {
					return Err(ChainError::NoContinuation { position, window: current.to_string() });
				}
			};

			debug!("position {position}: {} candidate(s), picked {next}", candidates.len());
			output.push(next.last().to_owned());
			current = next;
			position += 1;
		}

		Ok(output)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::sequence::build_sequence;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn index(order: usize, sentences: &[&str]) -> WindowIndex {
		let mut index = WindowIndex::new(order).unwrap();
		index.train(
			sentences
				.iter()
				.map(|s| build_sequence(order, s.split_whitespace().map(str::to_owned).collect())),
		);
		index
	}

	#[test]
	fn most_frequent_continuation_wins() {
		let index = index(2, &["a b", "a b", "a c"]);
		let generator = Generator::new(&index);

		let current = Window::from_strs(&["<sos>", "a"]);
		let best = generator.best_continuations(&current, 1);
		assert_eq!(best, [&Window::from_strs(&["a", "b"])]);

		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..20 {
			assert_eq!(generator.walk(Some("a"), &mut rng).unwrap(), ["a", "b", "<eos>"]);
		}
	}

	#[test]
	fn ties_are_deduplicated() {
		let index = index(2, &["a b", "a b", "a c", "a c"]);
		let generator = Generator::new(&index);

		let best = generator.best_continuations(&Window::from_strs(&["<sos>", "a"]), 1);
		assert_eq!(best, [&Window::from_strs(&["a", "b"]), &Window::from_strs(&["a", "c"])]);
	}

	#[test]
	fn ties_are_broken_randomly() {
		let index = index(2, &["a b", "a c"]);
		let generator = Generator::new(&index);
		let mut rng = StdRng::seed_from_u64(1);

		let mut seen = HashSet::new();
		for _ in 0..64 {
			let tokens = generator.walk(Some("a"), &mut rng).unwrap();
			seen.insert(tokens[1].clone());
		}
		assert_eq!(seen.len(), 2);
	}

	#[test]
	fn invalid_start_word() {
		let index = index(3, &["I like cats.", "I like dogs."]);
		let err = Generator::new(&index).walk(Some("like"), &mut rand::rng()).unwrap_err();
		assert!(matches!(err, ChainError::InvalidStartWord(w) if w == "like"));
	}

	#[test]
	fn empty_model() {
		let index = WindowIndex::new(2).unwrap();
		let err = Generator::new(&index).walk(None, &mut rand::rng()).unwrap_err();
		assert!(matches!(err, ChainError::EmptyModel));
	}

	#[test]
	fn no_candidates_off_the_recorded_paths() {
		let index = index(2, &["x a b", "a z"]);
		let generator = Generator::new(&index);

		// "b" follows "a" at position 2 only
		assert_eq!(generator.best_continuations(&Window::from_strs(&["<sos>", "a"]), 2).len(), 1);
		assert!(generator.best_continuations(&Window::from_strs(&["q", "y"]), 1).is_empty());
		assert!(generator.best_continuations(&Window::from_strs(&["a", "z"]), 9).is_empty());
	}

	#[test]
	fn walk_fails_without_continuation() {
		// Begin window recorded at position 1, nothing continues it at position 1
		let mut index = WindowIndex::new(2).unwrap();
		index.train(vec![vec!["x".to_owned(), START.to_owned(), "y.".to_owned()]]);
		let mut rng = StdRng::seed_from_u64(3);

		let err = Generator::new(&index).walk(Some("y."), &mut rng).unwrap_err();
		assert!(matches!(err, ChainError::NoContinuation { position: 1, ref window } if window == "(<sos>, y.)"));
	}

	#[test]
	fn order_one_stops_on_end_window() {
		let index = index(1, &["Hi there."]);
		let tokens = Generator::new(&index).walk(None, &mut rand::rng()).unwrap();
		assert_eq!(tokens, ["Hi", "there."]);
	}
}
