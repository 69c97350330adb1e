//! The comment-stripping state machine.
//!
//! [`CommentFilter`] consumes text one chunk at a time and writes everything
//! that is not part of a `//` or `/* */` comment to its output. Quoted
//! literals pass through verbatim, so comment markers inside them survive.
//!
//! # Examples
//!
//! ```rust
//! use decomment::{CommentFilter, FilterOptions, Mode};
//!
//! let mut filter = CommentFilter::new(FilterOptions::default());
//! filter.feed("int x = 1; /").unwrap();
//! filter.feed("* answer */ // done").unwrap();
//! assert_eq!(filter.mode(), Mode::LineComment);
//! assert_eq!(filter.finish().unwrap(), "int x = 1;  ");
//! ```
#![allow(clippy::enum_glob_use)]

use alloc::string::String;

use crate::{
    FilterError, FilterOptions,
    output::Output,
    scanner::{Peeked, Scanner, ScannerState},
};

/// The character that opened a quoted literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quote {
    /// `"`
    Double,
    /// `'`, only recognised with
    /// [`FilterOptions::single_quoted_strings`].
    Single,
}

impl Quote {
    /// The character that opens and closes this kind of literal.
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

/// The lexical mode the filter is in at a given scan position.
///
/// Every mode may be the last one: input is allowed to end inside a comment
/// or a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Ordinary code. Characters pass through unless they open a comment or
    /// a literal.
    #[default]
    Normal,
    /// After `//`. Everything up to the next newline is dropped; the newline
    /// itself is kept.
    LineComment,
    /// After `/*`. Everything up to and including `*/` is dropped.
    BlockComment,
    /// Inside a quoted literal. Characters pass through verbatim.
    InString(Quote),
    /// Directly after a backslash inside a literal. The next character passes
    /// through whatever it is, then the literal resumes.
    StringEscape(Quote),
}

/// A streaming comment filter.
///
/// Feed it text in chunks of any size; the output is the same as filtering the
/// concatenated input in one go. When a chunk ends on a character whose
/// meaning depends on the next one (a `/` in code, a `*` in a block comment),
/// that character is held back until the next [`feed`](Self::feed) or
/// [`finish`](Self::finish).
///
/// After a call returns an error the filter's position in the input is lost,
/// and it should be dropped.
#[derive(Debug)]
pub struct CommentFilter {
    scanner: ScannerState,
    mode: Mode,
    /// Line and column where the current comment or literal began.
    opened_at: (usize, usize),
    output: Output,

    single_quoted_strings: bool,
    preserve_block_comment_newlines: bool,
}

impl Default for CommentFilter {
    fn default() -> Self {
        Self::new(FilterOptions::default())
    }
}

impl CommentFilter {
    /// Creates a filter in [`Mode::Normal`] with an empty output.
    #[must_use]
    pub fn new(options: FilterOptions) -> Self {
        Self {
            scanner: ScannerState::default(),
            mode: Mode::Normal,
            opened_at: (1, 1),
            output: Output::new(),
            single_quoted_strings: options.single_quoted_strings,
            preserve_block_comment_newlines: options.preserve_block_comment_newlines,
        }
    }

    /// Filters the next chunk of input, appending the result to the output.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::OutOfMemory`] if the output cannot grow.
    pub fn feed(&mut self, chunk: &str) -> Result<(), FilterError> {
        self.feed_reserving(chunk, chunk.len())
    }

    /// Filtered text never outgrows its input, so reserving `reserve` bytes
    /// up front (the chunk length) covers the whole feed.
    fn feed_reserving(&mut self, chunk: &str, reserve: usize) -> Result<(), FilterError> {
        self.output.reserve(reserve)?;
        let state = core::mem::take(&mut self.scanner);
        let mut scanner = Scanner::from_state(state, chunk, false);
        self.run(&mut scanner)?;
        self.scanner = scanner.finish();

        #[cfg(any(test, feature = "fuzzing"))]
        assert!(
            matches!(
                (self.scanner.held(), self.mode),
                (None, _) | (Some('/'), Mode::Normal) | (Some('*'), Mode::BlockComment)
            ),
            "held {:?} back in {:?}",
            self.scanner.held(),
            self.mode
        );
        Ok(())
    }

    /// Removes and returns the text filtered so far.
    ///
    /// A character held back for lookahead is not part of it yet.
    pub fn take_output(&mut self) -> String {
        self.output.take()
    }

    /// The current lexical mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Ends the input and returns the output not yet taken.
    ///
    /// An unterminated comment runs to the end of input and is dropped. An
    /// unterminated literal is kept as it was written.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::OutOfMemory`] if the output cannot grow.
    pub fn finish(mut self) -> Result<String, FilterError> {
        let state = core::mem::take(&mut self.scanner);
        let mut scanner = Scanner::from_state(state, "", true);
        self.run(&mut scanner)?;

        let (line, column) = self.opened_at;
        match self.mode {
            Mode::BlockComment => log::debug!(
                "input ended inside the block comment opened at {line}:{column}, discarding it"
            ),
            Mode::InString(_) | Mode::StringEscape(_) => log::debug!(
                "input ended inside the literal opened at {line}:{column}, keeping it as written"
            ),
            Mode::Normal | Mode::LineComment => {}
        }
        let end = scanner.finish();
        log::trace!(
            "filtered {} characters into {} bytes",
            end.offset(),
            self.output.len()
        );
        Ok(self.output.finalize())
    }

    fn transition(&mut self, next: Mode, at: (usize, usize)) {
        log::trace!("{:?} -> {next:?} at {}:{}", self.mode, at.0, at.1);
        if self.mode == Mode::Normal && next != Mode::Normal {
            self.opened_at = at;
        }
        self.mode = next;
    }

    fn opens_literal(&self, ch: char) -> Option<Quote> {
        match ch {
            '"' => Some(Quote::Double),
            '\'' if self.single_quoted_strings => Some(Quote::Single),
            _ => None,
        }
    }

    /// Drives the state machine until the chunk is exhausted or a lookahead
    /// runs past its end.
    fn run(&mut self, scanner: &mut Scanner<'_>) -> Result<(), FilterError> {
        use Mode::*;

        loop {
            let Peeked::Char(ch) = scanner.current() else {
                return Ok(());
            };
            let at = scanner.position();

            match self.mode {
                Normal => {
                    if ch == '/' {
                        let next = match scanner.peek() {
                            Peeked::Char('/') => LineComment,
                            Peeked::Char('*') => BlockComment,
                            Peeked::Empty => return Ok(()),
                            Peeked::Char(_) | Peeked::EndOfInput => {
                                scanner.advance();
                                self.output.push('/')?;
                                continue;
                            }
                        };
                        scanner.advance();
                        scanner.advance();
                        self.transition(next, at);
                    } else if let Some(quote) = self.opens_literal(ch) {
                        scanner.advance();
                        self.output.push(ch)?;
                        self.transition(InString(quote), at);
                    } else {
                        scanner.advance();
                        self.output.push(ch)?;
                        let single = self.single_quoted_strings;
                        let run = scanner.take_while(|c| {
                            c != '/' && c != '"' && !(single && c == '\'')
                        });
                        self.output.push_str(run)?;
                    }
                }

                LineComment => {
                    scanner.advance();
                    if ch == '\n' {
                        self.output.push('\n')?;
                        self.transition(Normal, at);
                    } else {
                        let _ = scanner.take_while(|c| c != '\n');
                    }
                }

                BlockComment => {
                    let keep_newlines = self.preserve_block_comment_newlines;
                    match ch {
                        '*' => match scanner.peek() {
                            Peeked::Char('/') => {
                                scanner.advance();
                                scanner.advance();
                                self.transition(Normal, at);
                            }
                            Peeked::Empty => return Ok(()),
                            Peeked::Char(_) | Peeked::EndOfInput => scanner.advance(),
                        },
                        '\n' if keep_newlines => {
                            scanner.advance();
                            self.output.push('\n')?;
                        }
                        _ => {
                            scanner.advance();
                            let _ = scanner
                                .take_while(|c| c != '*' && !(keep_newlines && c == '\n'));
                        }
                    }
                }

                InString(quote) => {
                    scanner.advance();
                    self.output.push(ch)?;
                    if ch == '\\' {
                        self.transition(StringEscape(quote), at);
                    } else if ch == quote.delimiter() {
                        self.transition(Normal, at);
                    } else {
                        let delimiter = quote.delimiter();
                        let run = scanner.take_while(|c| c != '\\' && c != delimiter);
                        self.output.push_str(run)?;
                    }
                }

                StringEscape(quote) => {
                    scanner.advance();
                    self.output.push(ch)?;
                    self.transition(InString(quote), at);
                }
            }
        }
    }
}
