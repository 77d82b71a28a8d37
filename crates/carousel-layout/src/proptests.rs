use crate::testing::FixedFont;
use crate::wrap;
use proptest::prelude::*;

const MONO: FixedFont = FixedFont {
    size: 10.0,
    ratio: 0.6,
};

// Property: wrapping an already-wrapped line keeps it whole
proptest! {
    #[test]
    fn prop_wrap_is_idempotent(
        text in "[a-zA-Z,.!?]{1,14}( [a-zA-Z,.!?]{1,14}){0,30}",
        max_width in 20.0f32..400.0,
    ) {
        let lines = wrap(&text, &MONO, max_width);
        for line in &lines {
            let rewrapped = wrap(line, &MONO, max_width);
            prop_assert_eq!(rewrapped, vec![line.clone()]);
        }
    }
}

// Property: wrapping never loses, reorders or splits words
proptest! {
    #[test]
    fn prop_wrap_preserves_words(
        text in "[a-z]{1,10}( [a-z]{1,10}){0,30}( *\n[a-z]{1,10}( [a-z]{1,10}){0,5}){0,3}",
        max_width in 10.0f32..300.0,
    ) {
        let lines = wrap(&text, &MONO, max_width);
        let words_in: Vec<&str> = text.split_whitespace().collect();
        let words_out: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        prop_assert_eq!(words_in, words_out);
    }
}

// Property: a line only overflows when it is a single word
proptest! {
    #[test]
    fn prop_overflow_only_for_single_words(
        text in "[a-z]{1,20}( [a-z]{1,20}){0,30}",
        max_width in 10.0f32..300.0,
    ) {
        use carousel_core::TextMeasure;
        for line in wrap(&text, &MONO, max_width) {
            if MONO.text_width(&line) > max_width {
                prop_assert!(!line.contains(' '), "overflowing line {:?}", line);
            }
        }
    }
}
