#![expect(clippy::inline_always)]

use alloc::string::String;

use crate::FilterError;

/// Append-only accumulator for filtered text.
///
/// Every append reserves through [`String::try_reserve`], which keeps the
/// amortised doubling growth of `String` but reports allocation failure as a
/// [`FilterError`] instead of aborting.
#[derive(Debug, Default)]
pub(crate) struct Output {
    text: String,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Pre-sizes the buffer. Filtered text is never longer than its input, so
    /// callers that know the input length can avoid regrowth entirely.
    pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), FilterError> {
        self.text.try_reserve(additional)?;
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, ch: char) -> Result<(), FilterError> {
        self.text.try_reserve(ch.len_utf8())?;
        self.text.push(ch);
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn push_str(&mut self, run: &str) -> Result<(), FilterError> {
        if run.is_empty() {
            return Ok(());
        }
        self.text.try_reserve(run.len())?;
        self.text.push_str(run);
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.text.len()
    }

    /// Hands out everything accumulated so far and leaves the buffer empty.
    pub(crate) fn take(&mut self) -> String {
        core::mem::take(&mut self.text)
    }

    pub(crate) fn finalize(self) -> String {
        self.text
    }
}
