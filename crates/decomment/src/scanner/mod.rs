//! Scanner: a cursor over the current chunk of input plus at most one
//! character carried over from the previous chunk.
//!
//! The comment filter needs one character of lookahead to recognise `//`,
//! `/*` and `*/`. When the lookahead falls past the end of a chunk, the filter
//! stops and the scanner hands the undecided character back through
//! [`Scanner::finish`]; the next feed replays it ahead of the new chunk.
//!
//! Invariants
//! - At most one character is ever carried between chunks.
//! - Reading past the end never fails: [`Peeked::Empty`] means "wait for more
//!   input", [`Peeked::EndOfInput`] means there will be none.
//! - `pos/line/col` count characters, not bytes, and survive across chunks.

#![expect(clippy::inline_always)]

/// What sits at a scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Peeked {
    /// The chunk is exhausted but more input may follow.
    Empty,
    Char(char),
    /// The chunk is exhausted and the input has ended.
    EndOfInput,
}

/// Scanner state persisted between feeds.
#[derive(Debug, Clone)]
pub(crate) struct ScannerState {
    carry: Option<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Default for ScannerState {
    fn default() -> Self {
        Self {
            carry: None,
            pos: 0,
            line: 1,
            col: 1,
        }
    }
}

impl ScannerState {
    /// Number of characters consumed so far, across all feeds.
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }
}

#[cfg(any(test, feature = "fuzzing"))]
impl ScannerState {
    /// The character held back for lookahead, if any.
    pub(crate) fn held(&self) -> Option<char> {
        self.carry
    }
}

#[cfg(test)]
impl ScannerState {
    pub fn test_position(&self) -> (usize, usize) {
        (self.line, self.col)
    }
}

pub(crate) struct Scanner<'src> {
    carry: Option<char>,
    batch: &'src str,
    byte_idx: usize,
    end_of_input: bool,

    pos: usize,
    line: usize,
    col: usize,
}

impl<'src> Scanner<'src> {
    /// Resumes scanning from a previous feed's state over a new chunk.
    pub(crate) fn from_state(state: ScannerState, batch: &'src str, end_of_input: bool) -> Self {
        Self {
            carry: state.carry,
            batch,
            byte_idx: 0,
            end_of_input,
            pos: state.pos,
            line: state.line,
            col: state.col,
        }
    }

    #[inline(always)]
    fn exhausted(&self) -> Peeked {
        if self.end_of_input {
            Peeked::EndOfInput
        } else {
            Peeked::Empty
        }
    }

    #[inline(always)]
    fn rest(&self) -> &'src str {
        &self.batch[self.byte_idx..]
    }

    /// The character at the scan position.
    #[inline(always)]
    pub(crate) fn current(&self) -> Peeked {
        if let Some(ch) = self.carry {
            return Peeked::Char(ch);
        }
        match self.rest().chars().next() {
            Some(ch) => Peeked::Char(ch),
            None => self.exhausted(),
        }
    }

    /// The character one past the scan position.
    #[inline(always)]
    pub(crate) fn peek(&self) -> Peeked {
        let mut rest = self.rest().chars();
        if self.carry.is_none() {
            rest.next();
        }
        match rest.next() {
            Some(ch) => Peeked::Char(ch),
            None => self.exhausted(),
        }
    }

    #[inline(always)]
    fn bump_position(&mut self, ch: char) {
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }

    /// Moves past the current character. A no-op once the chunk is exhausted.
    #[inline(always)]
    pub(crate) fn advance(&mut self) {
        if let Some(ch) = self.carry.take() {
            self.bump_position(ch);
            return;
        }
        if let Some(ch) = self.rest().chars().next() {
            self.byte_idx += ch.len_utf8();
            self.bump_position(ch);
        }
    }

    /// Consumes the longest run of characters satisfying `predicate` and
    /// returns it as a slice of the chunk.
    ///
    /// A carried character is never part of the run; callers consume it with
    /// [`advance`](Self::advance) first, so the run is always borrowable.
    #[inline]
    pub(crate) fn take_while<F>(&mut self, mut predicate: F) -> &'src str
    where
        F: FnMut(char) -> bool,
    {
        if self.carry.is_some() {
            return "";
        }
        let rest = self.rest();
        let mut len = 0;
        for ch in rest.chars() {
            if !predicate(ch) {
                break;
            }
            len += ch.len_utf8();
            self.bump_position(ch);
        }
        self.byte_idx += len;
        &rest[..len]
    }

    /// 1-based line and column of the current character.
    pub(crate) fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    /// Ends this feed, carrying any unread character into the next one.
    ///
    /// The filter only stops early on a lookahead miss, so at most the final
    /// character of the chunk can be left unread.
    pub(crate) fn finish(self) -> ScannerState {
        let mut rest = self.rest().chars();
        let carry = self.carry.or_else(|| rest.next());
        debug_assert!(
            rest.next().is_none() && (self.carry.is_none() || self.rest().is_empty()),
            "scanner finished with more than one unread character"
        );
        ScannerState {
            carry,
            pos: self.pos,
            line: self.line,
            col: self.col,
        }
    }
}
