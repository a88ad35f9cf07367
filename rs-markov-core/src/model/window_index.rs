use std::collections::{BTreeSet, HashMap};

use log::{debug, info};

use super::window::Window;
use crate::error::{ChainError, Result};
use crate::tokenizer::Token;

/// Training tables of an n-th order chain.
///
/// The `WindowIndex` slides an `n`-token window over every padded sequence
/// and records what it sees.
///
/// # Responsibilities
/// - Count every distinct window (frequency table)
/// - Catalogue the windows starting at each offset (position index)
/// - Collect the windows a walk may start from (begin set) and, for order 1,
///   the windows a walk may stop on (end set)
///
/// # Invariants
/// - `order` is always >= 1
/// - A window counted `k` times appears exactly `k` times across `positions`
/// - Tables are read-only once `train` returns
#[derive(Clone, Debug)]
pub struct WindowIndex {
	/// Chain order (tokens per window)
	order: usize,

	/// Number of occurrences of each window over the whole corpus
	frequencies: HashMap<Window, usize>,

	/// `positions[i]` lists the windows that started at offset `i`, in insertion order
	positions: Vec<Vec<Window>>,

	/// Windows eligible to start a walk
	begin: BTreeSet<Window>,

	/// Windows a walk may stop on (order 1 only)
	end: BTreeSet<Window>,

	/// Number of sequences ingested by the last training call
	sequences: usize,
}

impl WindowIndex {
	/// Creates an empty index of order `order`.
	///
	/// # Errors
	/// Returns a configuration error if `order < 1`.
	pub fn new(order: usize) -> Result<Self> {
		if order < 1 {
			return Err(ChainError::Configuration("n_order must be >= 1".to_owned()));
		}
		Ok(Self {
			order,
			frequencies: HashMap::new(),
			positions: Vec::new(),
			begin: BTreeSet::new(),
			end: BTreeSet::new(),
			sequences: 0,
		})
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Drops every count and every catalogued window.
	pub fn clear(&mut self) {
		self.frequencies.clear();
		self.positions.clear();
		self.begin.clear();
		self.end.clear();
		self.sequences = 0;
	}

	/// Rebuilds the tables from padded sequences.
	///
	/// Previous content is cleared first, so training twice on the same
	/// corpus gives the same tables.
	///
	/// # Notes
	/// - Sequences shorter than the order contribute nothing.
	/// - Counts do not depend on the order of the sequences.
	pub fn train<I>(&mut self, sequences: I)
	where
		I: IntoIterator<Item = Vec<Token>>,
	{
		self.clear();
		for sequence in sequences {
			self.index_sequence(&sequence);
		}
		info!(
			"indexed {} sequences: {} distinct windows, {} begin windows, longest sequence {}",
			self.sequences,
			self.frequencies.len(),
			self.begin.len(),
			self.positions.len()
		);
	}

	/// Records every window of one padded sequence.
	fn index_sequence(&mut self, sequence: &[Token]) {
		self.sequences += 1;
		let n = self.order;
		if sequence.len() < n {
			debug!("sequence of {} tokens is shorter than the order {}, skipped", sequence.len(), n);
			return;
		}

		// Position index grows to the longest sequence seen
		if self.positions.len() < sequence.len() {
			self.positions.resize_with(sequence.len(), Vec::new);
		}

		for (i, tokens) in sequence.windows(n).enumerate() {
			let window = Window::new(tokens.to_vec());
			*self.frequencies.entry(window.clone()).or_insert(0) += 1;

			if n == 1 {
				// Order 1 has no start padding: begin/end come from the offsets
				if i == 0 {
					self.begin.insert(window.clone());
				}
				if i + 2 == sequence.len() {
					self.end.insert(window.clone());
				}
			} else if window.starts_sequence() {
				self.begin.insert(window.clone());
			}

			self.positions[i].push(window);
		}
	}

	/// Number of times `window` was seen (0 if never).
	pub fn frequency(&self, window: &Window) -> usize {
		self.frequencies.get(window).copied().unwrap_or(0)
	}

	/// Read-only view of the frequency table.
	pub fn frequencies(&self) -> &HashMap<Window, usize> {
		&self.frequencies
	}

	/// Windows that started at `position`.
	///
	/// Returns an empty slice for positions past the longest sequence.
	pub fn at(&self, position: usize) -> &[Window] {
		self.positions.get(position).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Number of positions in the index (length of the longest sequence).
	pub fn positions(&self) -> usize {
		self.positions.len()
	}

	pub fn begin_windows(&self) -> &BTreeSet<Window> {
		&self.begin
	}

	pub fn end_windows(&self) -> &BTreeSet<Window> {
		&self.end
	}

	pub fn is_begin(&self, window: &Window) -> bool {
		self.begin.contains(window)
	}

	pub fn is_end(&self, window: &Window) -> bool {
		self.end.contains(window)
	}

	/// Number of sequences seen by the last training call.
	pub fn sequence_count(&self) -> usize {
		self.sequences
	}

	/// Number of distinct windows.
	pub fn distinct_windows(&self) -> usize {
		self.frequencies.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::sequence::build_sequence;

	fn sequences(order: usize, sentences: &[&str]) -> Vec<Vec<Token>> {
		sentences
			.iter()
			.map(|s| build_sequence(order, s.split_whitespace().map(str::to_owned).collect()))
			.collect()
	}

	#[test]
	fn order_zero_is_rejected() {
		assert!(matches!(WindowIndex::new(0), Err(ChainError::Configuration(_))));
	}

	#[test]
	fn counts_and_positions() {
		let mut index = WindowIndex::new(3).unwrap();
		index.train(sequences(3, &["I like cats.", "I like dogs."]));

		let opening = Window::from_strs(&["<sos>", "<sos>", "I"]);
		assert_eq!(index.frequency(&opening), 2);
		assert_eq!(index.frequency(&Window::from_strs(&["<sos>", "I", "like"])), 2);
		assert_eq!(index.frequency(&Window::from_strs(&["I", "like", "cats."])), 1);
		assert_eq!(index.frequency(&Window::from_strs(&["like", "dogs.", "<eos>"])), 1);
		assert_eq!(index.frequency(&Window::from_strs(&["cats.", "dogs.", "<eos>"])), 0);

		assert_eq!(index.at(0), [opening.clone(), opening.clone()]);
		assert_eq!(index.at(2).len(), 2);
		assert_eq!(index.positions(), 6);
		assert_eq!(index.sequence_count(), 2);
	}

	#[test]
	fn begin_set_for_higher_orders() {
		let mut index = WindowIndex::new(3).unwrap();
		index.train(sequences(3, &["I like cats.", "You like dogs."]));

		let begins: Vec<_> = index.begin_windows().iter().map(|w| w.last().to_owned()).collect();
		assert_eq!(begins, ["I", "You"]);
		assert!(index.end_windows().is_empty());
	}

	#[test]
	fn order_one_begin_and_end() {
		let mut index = WindowIndex::new(1).unwrap();
		index.train(sequences(1, &["A B C."]));

		assert!(index.is_begin(&Window::from_strs(&["A"])));
		assert!(index.is_end(&Window::from_strs(&["C."])));
		assert!(!index.is_end(&Window::from_strs(&["<eos>"])));
		assert_eq!(index.begin_windows().len(), 1);
		assert_eq!(index.end_windows().len(), 1);
	}

	#[test]
	fn order_one_single_token_sentence_is_begin_and_end() {
		let mut index = WindowIndex::new(1).unwrap();
		index.train(sequences(1, &["Hi"]));

		let hi = Window::from_strs(&["Hi"]);
		assert!(index.is_begin(&hi));
		assert!(index.is_end(&hi));
	}

	#[test]
	fn short_sequences_contribute_nothing() {
		let mut index = WindowIndex::new(4).unwrap();
		index.train(vec![vec!["a".to_owned(), "<eos>".to_owned()]]);

		assert_eq!(index.distinct_windows(), 0);
		assert_eq!(index.sequence_count(), 1);
		assert!(index.at(0).is_empty());
	}

	#[test]
	fn lookups_past_the_end_are_empty() {
		let mut index = WindowIndex::new(2).unwrap();
		index.train(sequences(2, &["a b"]));

		assert!(index.at(index.positions()).is_empty());
		assert!(index.at(usize::MAX).is_empty());
	}

	#[test]
	fn retraining_replaces_tables() {
		let mut index = WindowIndex::new(2).unwrap();
		index.train(sequences(2, &["a b", "a c"]));
		let first = index.frequencies().clone();

		index.train(sequences(2, &["a b", "a c"]));
		assert_eq!(index.frequencies(), &first);

		index.train(sequences(2, &["x"]));
		assert_eq!(index.frequency(&Window::from_strs(&["<sos>", "a"])), 0);
		assert_eq!(index.begin_windows().len(), 1);
	}
}
