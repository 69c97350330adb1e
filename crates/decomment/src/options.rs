/// Configuration options for the comment filter.
///
/// The defaults strip `//` and `/* */` comments, honour double-quoted strings
/// with backslash escapes, and drop everything inside a block comment.
///
/// # Examples
///
/// ```rust
/// use decomment::{FilterOptions, filter_with_options};
///
/// let options = FilterOptions {
///     single_quoted_strings: true,
///     ..Default::default()
/// };
/// let out = filter_with_options("c = '\"'; // quote", options).unwrap();
/// assert_eq!(out, "c = '\"'; ");
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterOptions {
    /// Whether a single quote (`'`) opens a quoted literal, like `"` does.
    ///
    /// C-family character literals such as `'"'` otherwise open a
    /// double-quoted string that swallows the rest of the line. Escapes work
    /// the same way in both kinds of literal.
    ///
    /// # Default
    ///
    /// `false`
    pub single_quoted_strings: bool,

    /// Whether newlines inside a stripped block comment are kept.
    ///
    /// When `true`, each line break between `/*` and `*/` is written to the
    /// output, so line `n` of the filtered text still corresponds to line `n`
    /// of the input. The comment text itself is dropped either way.
    ///
    /// # Default
    ///
    /// `false`
    pub preserve_block_comment_newlines: bool,
}
