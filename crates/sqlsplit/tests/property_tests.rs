//! Property tests for script splitting.

#![allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]

use proptest::prelude::*;
use sqlsplit::{split, split_spans, split_with, SplitOptions};

/// Fragments that exercise every lexical mode and the block tracker.
fn sql_fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "SELECT", " ", "\n", ";", "'", "\"", "`", "\\", "--", "-- ", "#", "/*", "*/", "BEGIN",
        "END", "CASE", "IF", "WORK", ".", "@", "(", ",", ")", "x", "1", "\u{FFFD}",
    ])
}

fn sql_like() -> impl Strategy<Value = String> {
    prop::collection::vec(sql_fragment(), 0..48).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn concatenation_reproduces_input(input in sql_like()) {
        let joined: String = split(&input).iter().map(|s| s.text).collect();
        prop_assert_eq!(joined, input);
    }

    #[test]
    fn spans_tile_input(input in sql_like()) {
        let mut expected_start = 0;
        for slice in split(&input) {
            prop_assert_eq!(slice.span.start, expected_start);
            prop_assert!(!slice.span.is_empty());
            expected_start = slice.span.end;
        }
        prop_assert_eq!(expected_start, input.len());
    }

    #[test]
    fn only_the_last_slice_may_be_unterminated(input in sql_like()) {
        let slices = split(&input);
        if let Some((_, init)) = slices.split_last() {
            for slice in init {
                prop_assert!(slice.terminated);
                prop_assert!(slice.text.ends_with(';'));
            }
        }
    }

    #[test]
    fn skip_keeps_only_non_blank_slices(input in sql_like()) {
        let all = split(&input);
        let kept = split_with(&input, SplitOptions::default().skip_blank());
        let expected: Vec<_> = all.into_iter().filter(|s| !s.blank).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn byte_spans_tile_arbitrary_bytes(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let total: usize = split_spans(&bytes, SplitOptions::default())
            .iter()
            .map(|s| s.span.len())
            .sum();
        prop_assert_eq!(total, bytes.len());
    }

    #[test]
    fn byte_and_text_splitting_agree(input in sql_like()) {
        let text_spans: Vec<_> = split(&input).iter().map(|s| s.span).collect();
        let byte_spans: Vec<_> = split_spans(input.as_bytes(), SplitOptions::default())
            .iter()
            .map(|s| s.span)
            .collect();
        prop_assert_eq!(text_spans, byte_spans);
    }
}
