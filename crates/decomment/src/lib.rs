//! Quote-aware removal of `//` and `/* */` comments from C-family source
//! text.
//!
//! The filter is a single left-to-right pass over the input. Text inside
//! double-quoted literals is never mistaken for a comment, backslash escapes
//! inside literals are honoured, and unterminated comments or literals are
//! resolved leniently at end of input rather than rejected.
//!
//! ```rust
//! let code = "int x = 1; // the answer\nputs(\"// not a comment\"); /* gone */";
//! let out = decomment::filter(code).unwrap();
//! assert_eq!(out, "int x = 1; \nputs(\"// not a comment\"); ");
//! ```
//!
//! For input that arrives in pieces, use [`CommentFilter`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod filter;
mod options;
mod output;
mod scanner;

#[cfg(test)]
mod tests;

use alloc::string::String;

pub use error::FilterError;
pub use filter::{CommentFilter, Mode, Quote};
pub use options::FilterOptions;

/// Strips comments from `input` using the default [`FilterOptions`].
///
/// # Errors
///
/// Returns [`FilterError::OutOfMemory`] if the output cannot be allocated.
/// Malformed input is never an error.
///
/// # Examples
///
/// ```rust
/// assert_eq!(decomment::filter("a /* b\nc */ d").unwrap(), "a  d");
/// assert_eq!(decomment::filter("").unwrap(), "");
/// ```
pub fn filter(input: &str) -> Result<String, FilterError> {
    filter_with_options(input, FilterOptions::default())
}

/// Strips comments from `input` with explicit [`FilterOptions`].
///
/// # Errors
///
/// Returns [`FilterError::OutOfMemory`] if the output cannot be allocated.
pub fn filter_with_options(input: &str, options: FilterOptions) -> Result<String, FilterError> {
    let mut filter = CommentFilter::new(options);
    filter.feed(input)?;
    filter.finish()
}
