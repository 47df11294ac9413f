//! Small parsing helpers built on top of [`ByteIterator`](super::iterator::ByteIterator).
//!
//! - `parse_word` for identifiers such as geometry keywords and type names
//! - `parse_number_as_string` and `parse_number_as<T>` for decimal numbers
//! - `parse_list_entries` for parenthesized, comma separated lists
//!
//! Every helper skips leading whitespace and leaves the iterator positioned on the
//! first byte it did not consume.

use super::iterator::ByteIterator;
use anyhow::{Context, Error, Result};
use std::str::FromStr;

/// Parse an identifier made of ASCII letters, digits and underscores, starting with a
/// letter or underscore.
///
/// # Errors
/// Returns an error if no identifier starts at the current position.
pub fn parse_word(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	let mut word = String::new();
	while let Some(byte) = iter.peek() {
		let accepted = if word.is_empty() {
			byte.is_ascii_alphabetic() || byte == b'_'
		} else {
			byte.is_ascii_alphanumeric() || byte == b'_'
		};
		if !accepted {
			break;
		}
		word.push(byte as char);
		iter.advance();
	}
	if word.is_empty() {
		return Err(iter.format_error("expected a word"));
	}
	Ok(word)
}

/// Parse a decimal number and return its textual representation.
///
/// Accepts an optional sign, integer digits, an optional fraction and an optional
/// exponent. A fraction without integer digits (`.5`) is accepted as well.
///
/// # Errors
/// Returns an error if required digits are missing.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	let mut number = Vec::with_capacity(16);

	if let Some(b'+' | b'-') = iter.peek() {
		number.push(iter.expect_next_byte()?);
	}

	let mut has_digits = false;
	while let Some(b'0'..=b'9') = iter.peek() {
		has_digits = true;
		number.push(iter.expect_next_byte()?);
	}

	if let Some(b'.') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		while let Some(b'0'..=b'9') = iter.peek() {
			has_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if !has_digits {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'e' | b'E') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(iter.expect_next_byte()?);
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			exponent_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !exponent_digits {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	String::from_utf8(number).map_err(Error::from)
}

/// Parse a number and convert it to a concrete type `R`.
///
/// # Errors
/// Returns an error if number parsing fails or if `R::from_str` rejects the text.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Iterate over the entries of a `( ... )` list, collecting the results of `parse_value`.
///
/// Entries are separated by commas. An empty list `()` and a trailing comma before the
/// closing parenthesis are both accepted, so one-element tuples like `(a,)` parse.
///
/// # Errors
/// Returns an error on malformed lists or if `parse_value` fails.
pub fn parse_list_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.expect_byte(b'(').context("while parsing list entries")?;

	let mut result = Vec::new();

	iter.skip_whitespace();
	if let Some(b')') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	result.push(parse_value(iter)?);

	loop {
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b')' => break,
			b',' => {
				iter.skip_whitespace();
				if let Some(b')') = iter.peek() {
					iter.advance();
					break;
				}
				result.push(parse_value(iter)?);
			}
			_ => return Err(iter.format_error("parsing list, expected ',' or ')'")),
		}
	}

	Ok(result)
}
