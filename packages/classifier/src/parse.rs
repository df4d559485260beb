//! Free-text model output to per-title decisions.

use crate::types::Decision;

/// Map raw model output to exactly `expected` decisions, positionally.
///
/// Lines are trimmed and empty lines dropped. A line containing
/// "educational" (case-insensitive) maps to `Show`, otherwise one
/// containing "distracting" maps to `Hide`, and anything else (missing,
/// malformed, ambiguous) falls back to `Show`. Under-length responses are
/// padded with `Show`, over-length responses truncated, so the output
/// length always equals `expected`. Substring matching tolerates minor
/// formatting deviations without raising errors.
pub fn parse_decisions(text: &str, expected: usize) -> Vec<Decision> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    (0..expected)
        .map(|i| {
            let line = lines.get(i).map(|l| l.to_lowercase()).unwrap_or_default();
            if line.contains("educational") {
                Decision::Show
            } else if line.contains("distracting") {
                Decision::Hide
            } else {
                Decision::Show
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parses_exact_format() {
        let decisions = parse_decisions("EDUCATIONAL\nDISTRACTING", 2);
        assert_eq!(decisions, vec![Decision::Show, Decision::Hide]);
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let decisions = parse_decisions("1. Educational\n2) dIsTrAcTiNg stuff", 2);
        assert_eq!(decisions, vec![Decision::Show, Decision::Hide]);
    }

    #[test]
    fn test_skips_empty_lines() {
        let decisions = parse_decisions("\n\nEDUCATIONAL\n\nDISTRACTING\n", 2);
        assert_eq!(decisions, vec![Decision::Show, Decision::Hide]);
    }

    #[test]
    fn test_short_response_padded_with_show() {
        let decisions = parse_decisions("DISTRACTING", 3);
        assert_eq!(
            decisions,
            vec![Decision::Hide, Decision::Show, Decision::Show]
        );
    }

    #[test]
    fn test_long_response_truncated() {
        let decisions = parse_decisions("DISTRACTING\nDISTRACTING\nDISTRACTING", 1);
        assert_eq!(decisions, vec![Decision::Hide]);
    }

    #[test]
    fn test_unrecognized_lines_fail_open() {
        let decisions = parse_decisions("maybe?\nno idea\nDISTRACTING", 3);
        assert_eq!(
            decisions,
            vec![Decision::Show, Decision::Show, Decision::Hide]
        );
    }

    #[test]
    fn test_zero_expected_yields_empty() {
        assert!(parse_decisions("EDUCATIONAL", 0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_output_length_always_matches_expected(text in ".*", expected in 0usize..64) {
            prop_assert_eq!(parse_decisions(&text, expected).len(), expected);
        }

        #[test]
        fn prop_lines_without_labels_are_show(lines in proptest::collection::vec("[a-z]{1,10}( [a-z]{1,10}){0,2}", 0..8)) {
            let text = lines.join("\n");
            let n = lines.len();
            for (i, decision) in parse_decisions(&text, n).iter().enumerate() {
                let lowered = lines[i].to_lowercase();
                if !lowered.contains("educational") && !lowered.contains("distracting") {
                    prop_assert_eq!(*decision, Decision::Show);
                }
            }
        }
    }
}
