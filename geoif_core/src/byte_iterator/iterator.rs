//! A byte-level cursor over borrowed text.
//!
//! `ByteIterator` walks the bytes of a string slice, supports peeking at the next byte
//! without consuming it, and formats error messages that carry the current position and
//! a short excerpt of the input around it.

use anyhow::{Error, Result, anyhow};

const EXCERPT_SIZE: usize = 16;

/// A cursor over the bytes of a string with support for peeking, consuming, and error reporting.
///
/// # Fields
///
/// * `bytes` - The complete input.
/// * `position` - Index of the byte returned by the next call to [`ByteIterator::peek`].
pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` positioned at the first byte of `text`.
	#[must_use]
	pub fn new(text: &'a str) -> Self {
		ByteIterator {
			bytes: text.as_bytes(),
			position: 0,
		}
	}

	/// Formats an error message including the current byte position and the input
	/// consumed just before it.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let start = self.position.saturating_sub(EXCERPT_SIZE);
		let mut excerpt = String::from_utf8_lossy(&self.bytes[start..self.position]).into_owned();
		if self.peek().is_none() {
			excerpt.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {}", self.position, excerpt)
	}

	/// Returns the current position in the input.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Peeks at the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	/// Moves past the current byte. Does nothing at the end of the input.
	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Consumes and returns the current byte.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peek();
		self.advance();
		current_byte
	}

	/// Expects and returns the next byte, advancing the iterator.
	///
	/// # Errors
	///
	/// Returns an error if the end of the input is reached unexpectedly.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		let byte = self.expect_peeked_byte()?;
		self.advance();
		Ok(byte)
	}

	/// Returns the current byte without advancing.
	///
	/// # Errors
	///
	/// Returns an error if the end of the input is reached unexpectedly.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Consumes `byte` after optional whitespace, or fails naming what was expected.
	pub fn expect_byte(&mut self, byte: u8) -> Result<()> {
		self.skip_whitespace();
		match self.peek() {
			Some(b) if b == byte => {
				self.advance();
				Ok(())
			}
			_ => Err(self.format_error(&format!("expected '{}'", byte as char))),
		}
	}

	/// Skips over any ASCII whitespace bytes.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Returns `true` once only whitespace remains.
	pub fn is_at_end(&mut self) -> bool {
		self.skip_whitespace();
		self.peek().is_none()
	}

	/// Fails unless only whitespace remains.
	pub fn expect_end(&mut self) -> Result<()> {
		if self.is_at_end() {
			Ok(())
		} else {
			Err(self.format_error("unexpected trailing characters"))
		}
	}
}
