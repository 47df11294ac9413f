//! Text scanning primitives shared by the `geoif` parsers.
//!
//! The [`byte_iterator`] module provides a peekable byte cursor with positioned
//! error messages, plus a handful of helpers for tags, words and numbers.

pub mod byte_iterator;
