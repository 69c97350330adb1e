use quickcheck_macros::quickcheck;

use super::arbitrary::{PLAIN_FRAGMENTS, PlainText, Source};
use crate::{FilterOptions, filter, filter_with_options};

/// Filtered text has no comments left, so a second pass is a no-op.
#[quickcheck]
fn filtering_twice_changes_nothing(src: Source, options: FilterOptions) -> bool {
    let once = filter_with_options(&src.0, options).unwrap();
    let twice = filter_with_options(&once, options).unwrap();
    once == twice
}

#[quickcheck]
fn text_without_markers_passes_through(src: PlainText) -> bool {
    filter(&src.0).unwrap() == src.0
}

#[test]
fn plain_fragment_pairs_pass_through() {
    for a in PLAIN_FRAGMENTS {
        for b in PLAIN_FRAGMENTS {
            let text = alloc::format!("{a}{b}{a}");
            assert_eq!(filter(&text).unwrap(), text);
        }
    }
}

/// The output keeps input characters in order and never invents any.
#[quickcheck]
fn output_is_a_subsequence_of_input(src: Source, options: FilterOptions) -> bool {
    let out = filter_with_options(&src.0, options).unwrap();
    let mut input = src.0.chars();
    out.chars().all(|c| input.any(|i| i == c))
}
