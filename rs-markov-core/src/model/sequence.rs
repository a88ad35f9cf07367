use crate::tokenizer::Token;

/// Marker padding the beginning of every sequence.
pub const START: &str = "<sos>";

/// Marker closing every sequence.
pub const END: &str = "<eos>";

/// Pads the tokens of one sentence for windowing.
///
/// Returns `[START] * (order - 1) + tokens + [END]`.
///
/// # Notes
/// - An empty sentence still yields a valid sequence (`order` tokens long).
/// - An `order` of 0 is treated as 1 (no start marker).
/// - Tokens equal to `START` or `END` are dropped: markers are never vocabulary.
pub fn build_sequence(order: usize, tokens: Vec<Token>) -> Vec<Token> {
	let padding = order.saturating_sub(1);
	let mut sequence = Vec::with_capacity(padding + tokens.len() + 1);
	sequence.extend(std::iter::repeat_n(START.to_owned(), padding));
	sequence.extend(tokens.into_iter().filter(|t| t != START && t != END));
	sequence.push(END.to_owned());
	sequence
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(words: &[&str]) -> Vec<Token> {
		words.iter().map(|w| (*w).to_owned()).collect()
	}

	#[test]
	fn pads_with_markers() {
		let sequence = build_sequence(3, tokens(&["I", "like", "cats."]));
		assert_eq!(sequence, ["<sos>", "<sos>", "I", "like", "cats.", "<eos>"]);
	}

	#[test]
	fn order_one_has_no_start_marker() {
		assert_eq!(build_sequence(1, tokens(&["Hi"])), ["Hi", "<eos>"]);
	}

	#[test]
	fn marker_tokens_are_dropped() {
		let sequence = build_sequence(2, tokens(&["x", "<sos>", "y.", "<eos>", "z"]));
		assert_eq!(sequence, ["<sos>", "x", "y.", "z", "<eos>"]);
	}

	#[test]
	fn empty_sentence() {
		assert_eq!(build_sequence(2, Vec::new()), ["<sos>", "<eos>"]);
	}
}
