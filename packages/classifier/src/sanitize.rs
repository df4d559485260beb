//! Text sanitization for titles and credentials.
//!
//! Several of the target APIs reject non-ASCII header values outright, and
//! constraining title text keeps control characters out of prompts and
//! request JSON. All transforms are pure.

/// Check that every character fits in the Latin-1 range (code point <= 0xFF).
///
/// Credentials that fail this check are rejected before any network call,
/// since they cannot be carried in an HTTP header.
pub fn is_latin1(s: &str) -> bool {
    s.chars().all(|c| (c as u32) <= 0xFF)
}

/// Reduce a string to a header-safe form: drop characters outside the
/// Latin-1 range, then strip all whitespace.
pub fn header_safe(s: &str) -> String {
    s.chars()
        .filter(|c| (*c as u32) <= 0xFF && !c.is_whitespace())
        .collect()
}

/// Clean a title for transmission: keep tab, LF, CR, printable ASCII
/// (0x20-0x7E) and the Latin-1 extended band (0xA0-0xFF), drop everything
/// else, then trim surrounding whitespace.
pub fn clean_title(s: &str) -> String {
    s.chars()
        .filter(|c| matches!(c, '\t' | '\n' | '\r' | '\x20'..='\x7e' | '\u{a0}'..='\u{ff}'))
        .collect::<String>()
        .trim()
        .to_string()
}
