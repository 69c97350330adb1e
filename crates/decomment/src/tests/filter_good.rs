use core::time::Duration;

use rstest::rstest;

use crate::{FilterOptions, filter, filter_with_options};

#[rstest]
#[case::empty("", "")]
#[case::no_markers("plain text\nwith lines", "plain text\nwith lines")]
#[case::line_comment("a // b\nc", "a \nc")]
#[case::block_comment("a /* b\nc */ d", "a  d")]
#[case::marker_in_string("\"a // b\"", "\"a // b\"")]
#[case::escaped_quote("\"a\\\"b\" // c", "\"a\\\"b\" ")]
#[case::unterminated_block("a /* never closes", "a ")]
#[case::line_comment_to_eof("x // trailing", "x ")]
#[timeout(Duration::from_millis(250))]
fn strips_comments(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(filter(input).unwrap(), expected);
}

#[rstest]
#[case::lone_slash("a / b", "a / b")]
#[case::division_chain("a/b/c", "a/b/c")]
#[case::slash_before_block("x = a / /* c */ b", "x = a /  b")]
#[case::adjacent_blocks("/* a */ /* b */", " ")]
#[case::stars_before_close("/***/x", "x")]
#[case::stars_inside("/* ** */y", "y")]
#[case::blocks_do_not_nest("/* /* */ */", " */")]
#[case::close_without_open("*/ stays", "*/ stays")]
#[case::close_then_open("*/*/", "*")]
#[case::slash_between_letters("a/b*a/b", "a/b*a/b")]
#[case::block_inside_line("a//b/*c\nd*/e", "a\nd*/e")]
#[case::line_inside_block("a/*b//c*/d", "ad")]
#[timeout(Duration::from_millis(250))]
fn recognises_markers_only_in_code(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(filter(input).unwrap(), expected);
}

#[rstest]
#[case::markers_as_arguments("f(\"/*\", \"*/\")", "f(\"/*\", \"*/\")")]
#[case::unterminated_string("\"unterminated // keep", "\"unterminated // keep")]
#[case::escaped_backslash("\"a\\\\\" // c", "\"a\\\\\" ")]
#[case::trailing_escape("\"a\\", "\"a\\")]
#[case::backslash_outside_string("\\\"x\" // y", "\\\"x\" ")]
#[timeout(Duration::from_millis(250))]
fn literals_pass_through(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(filter(input).unwrap(), expected);
}

#[rstest]
#[case::multiline("line1 /* a\nb\nc */ line?", "line1 \n\n line?")]
#[case::single_newline("a /* b\nc */ d", "a \n d")]
#[case::no_newlines("a /* b */ c", "a  c")]
#[case::unterminated("a /* b\nc", "a \n")]
fn block_comment_newlines_can_be_preserved(#[case] input: &str, #[case] expected: &str) {
    let options = FilterOptions {
        preserve_block_comment_newlines: true,
        ..FilterOptions::default()
    };
    assert_eq!(filter_with_options(input, options).unwrap(), expected);
}

#[rstest]
#[case::char_literal_quote("char c = '\"'; // q", "char c = '\"'; ")]
#[case::char_literal_escape("'\\'' // q", "'\\'' ")]
#[case::marker_in_char_literal("'/' /* q */", "'/' ")]
#[case::double_inside_single("'\"' \"'\"", "'\"' \"'\"")]
fn single_quoted_literals(#[case] input: &str, #[case] expected: &str) {
    let options = FilterOptions {
        single_quoted_strings: true,
        ..FilterOptions::default()
    };
    assert_eq!(filter_with_options(input, options).unwrap(), expected);
}
