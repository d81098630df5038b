//! Fixation and saccade arithmetic
//!
//! A fixation is the emphasized leading part of a word; a saccade is the
//! jump between fixated words.

/// Maps the saccades ratio to the stride between emphasized words.
///
/// - below 1/3 → every third word
/// - below 2/3 → every second word
/// - otherwise → every word
pub fn saccade_stride(saccades: f64) -> usize {
    if saccades < 1.0 / 3.0 {
        3
    } else if saccades < 2.0 / 3.0 {
        2
    } else {
        1
    }
}

/// Returns true when the word at the 1-based running `index` receives a
/// fixation. The first word is always emphasized.
pub fn is_fixation_eligible(index: usize, stride: usize) -> bool {
    index == 1 || index % stride == 0
}

/// Calculates where the emphasized prefix of `token` ends.
///
/// Lengths are counted in characters. Tokens of one or two characters are
/// split after their first character; longer tokens after
/// `round(fixation * length)` characters, rounding half to even.
///
/// Returns the byte offset of the split, so `&token[..split]` is the
/// prefix and `&token[split..]` the suffix.
pub fn fixation_split(token: &str, fixation: f64) -> usize {
    let len = token.chars().count();
    let prefix_chars = match len {
        0 => 0,
        1..=2 => 1,
        _ => ((fixation * len as f64).round_ties_even() as usize).min(len),
    };

    token
        .char_indices()
        .nth(prefix_chars)
        .map_or(token.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn split(token: &str, fixation: f64) -> (&str, &str) {
        token.split_at(fixation_split(token, fixation))
    }

    #[rstest]
    #[case(0.0, 3)]
    #[case(0.2, 3)]
    #[case(0.33, 3)]
    #[case(0.34, 2)]
    #[case(0.5, 2)]
    #[case(0.66, 2)]
    #[case(0.67, 1)]
    #[case(0.75, 1)]
    #[case(1.0, 1)]
    fn test_saccade_stride(#[case] saccades: f64, #[case] expected: usize) {
        assert_eq!(saccade_stride(saccades), expected);
    }

    #[test]
    fn test_saccade_stride_boundaries() {
        assert_eq!(saccade_stride(1.0 / 3.0), 2);
        assert_eq!(saccade_stride(2.0 / 3.0), 1);
    }

    #[test]
    fn test_first_word_always_eligible() {
        assert!(is_fixation_eligible(1, 3));
        assert!(is_fixation_eligible(1, 2));
        assert!(!is_fixation_eligible(2, 3));
        assert!(is_fixation_eligible(3, 3));
        assert!(!is_fixation_eligible(4, 3));
        assert!(is_fixation_eligible(6, 3));
    }

    #[test]
    fn test_every_word_eligible_with_stride_one() {
        assert!((1..50).all(|i| is_fixation_eligible(i, 1)));
    }

    #[test]
    fn test_short_tokens_split_after_first_char() {
        assert_eq!(split("a", 0.6), ("a", ""));
        assert_eq!(split("We", 0.6), ("W", "e"));
        assert_eq!(split("of", 0.0), ("o", "f"));
        assert_eq!(split("if", 1.0), ("i", "f"));
    }

    #[test]
    fn test_long_tokens_follow_fixation_ratio() {
        assert_eq!(split("are", 0.6), ("ar", "e"));
        assert_eq!(split("happy", 0.6), ("hap", "py"));
        assert_eq!(split("people", 0.6), ("peop", "le"));
        assert_eq!(split("possible", 0.6), ("possi", "ble"));
        assert_eq!(split("advantage", 0.6), ("advan", "tage"));
        assert_eq!(split("Reading.", 0.6), ("Readi", "ng."));
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        // 0.5 * 5 = 2.5 rounds down to 2
        assert_eq!(split("hello", 0.5), ("he", "llo"));
        // 0.5 * 7 = 3.5 rounds up to 4
        assert_eq!(split("reading", 0.5), ("read", "ing"));
    }

    #[test]
    fn test_fixation_extremes() {
        assert_eq!(split("bionic", 0.0), ("", "bionic"));
        assert_eq!(split("bionic", 1.0), ("bionic", ""));
    }

    #[test]
    fn test_split_counts_characters_not_bytes() {
        assert_eq!(split("naïve", 0.6), ("naï", "ve"));
        assert_eq!(split("été", 0.6), ("ét", "é"));
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(fixation_split("", 0.6), 0);
    }

    proptest! {
        #[test]
        fn prop_split_preserves_token(token in "\\PC{1,20}", fixation in 0.0f64..=1.0) {
            let (prefix, suffix) = split(&token, fixation);
            prop_assert_eq!(format!("{prefix}{suffix}"), token.clone());

            let len = token.chars().count();
            let expected = if len <= 2 {
                1
            } else {
                (fixation * len as f64).round_ties_even() as usize
            };
            prop_assert_eq!(prefix.chars().count(), expected);
        }
    }
}
