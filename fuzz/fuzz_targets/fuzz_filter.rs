#![no_main]
use std::cell::RefCell;

use decomment::{CommentFilter, FilterOptions, filter_with_options};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 5; // 1 flag + 4-byte seed

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Fragments that move the filter between modes.
static TOKEN_TABLE: &[&[u8]] = &[
    b"//",
    b"/*",
    b"*/",
    b"/",
    b"*",
    b"\"",
    b"'",
    b"\\",
    b"\\\"",
    b"\n",
    b"\r\n",
    b" ",
    b"x",
    "\u{e9}".as_bytes(),
    "\u{2028}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x3);
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            let written = append_token(&mut data[prefix..], max_size - prefix);
            if written == 0 {
                break;
            }
            prefix += written;
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append one token from the table, never exceeding `limit` bytes.
fn append_token(buf: &mut [u8], limit: usize) -> usize {
    let token = with_rng(|rng| TOKEN_TABLE[rng.random_range(0..TOKEN_TABLE.len())]);
    if token.len() > limit {
        return 0;
    }
    buf[..token.len()].copy_from_slice(token);
    token.len()
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn filter(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let split_seed = u64::from(u32::from_le_bytes(data[1..5].try_into().unwrap()));
    let text = String::from_utf8_lossy(&data[HEADER..]).into_owned();

    let options = FilterOptions {
        single_quoted_strings: flags & 1 != 0,
        preserve_block_comment_newlines: flags & 2 != 0,
    };

    let expected = filter_with_options(&text, options).unwrap();
    assert!(expected.len() <= text.len());

    let mut streaming = CommentFilter::new(options);
    let mut actual = String::new();
    for chunk in split_into_safe_chunks(&text, split_seed) {
        streaming.feed(chunk).unwrap();
        actual.push_str(&streaming.take_output());
    }
    actual.push_str(&streaming.finish().unwrap());
    assert_eq!(actual, expected, "chunked output diverged for {text:?}");

    let again = filter_with_options(&expected, options).unwrap();
    assert_eq!(again, expected, "second pass changed {expected:?}");
}

fuzz_target!(|data: &[u8]| filter(data));

/// Split a UTF-8 `&str` into boundary-safe chunks using a deterministic random
/// value to generate splits.
///
/// * `split_seed` may be any `u64`.
/// * Each chunk is at least one byte.
/// * Every slice ends on a valid UTF-8 boundary, so it can’t panic.
fn split_into_safe_chunks(text: &str, split_seed: u64) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let len = text.len();

    while start < len {
        let remaining = len - start;
        let mut size = (split_seed as usize % remaining) + 1;
        while start + size < len && !text.is_char_boundary(start + size) {
            size += 1;
        }
        chunks.push(&text[start..start + size]);
        start += size;
    }

    chunks
}
