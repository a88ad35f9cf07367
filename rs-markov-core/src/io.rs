use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole corpus file into memory.
///
/// - The content must be valid UTF-8
/// - Line breaks are kept; sentence splitting happens later in `text`
pub(crate) fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
