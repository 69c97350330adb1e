use alloc::collections::TryReserveError;

use thiserror::Error;

/// The ways a filtering pass can fail.
///
/// Unbalanced comments and unterminated strings are not errors: the filter
/// resolves them at end of input. The only failure is running out of memory
/// while growing the output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The output buffer could not grow to hold the filtered text.
    #[error("out of memory while growing the output buffer: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
