//! Prompt construction for the batched providers.
//!
//! The prompt is deterministic: identical inputs produce byte-identical
//! output, and titles are never reordered or deduplicated.

use crate::types::KeywordHints;

/// System message shared by the chat-completion providers.
pub const SYSTEM_INSTRUCTION: &str =
    "You classify YouTube titles as EDUCATIONAL or DISTRACTING.";

/// Render a keyword list for the prompt, with a literal marker when empty.
pub fn keyword_list(keywords: &[String]) -> String {
    if keywords.is_empty() {
        "(none)".to_string()
    } else {
        keywords.join(", ")
    }
}

/// Render titles as a 1-indexed numbered list, one per line.
pub fn numbered_titles(titles: &[String]) -> String {
    let mut out = String::new();
    for (i, title) in titles.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, title));
    }
    out
}

/// Build the classification instruction for a batch of titles.
///
/// Contains the role statement, the show/hide keyword intent lines, a note
/// about abbreviated titles, the strict output-format instruction, and the
/// numbered title list.
pub fn build_prompt(titles: &[String], hints: &KeywordHints) -> String {
    let mut prompt = String::new();
    prompt.push_str("You are an AI that classifies YouTube video titles.\n");
    prompt.push_str(&format!(
        "SHOW (educational) keyword intent: {}\n",
        keyword_list(&hints.show)
    ));
    prompt.push_str(&format!(
        "HIDE (distracting) keyword intent: {}\n",
        keyword_list(&hints.hide)
    ));
    prompt.push_str("Short forms may appear (e.g. TMKOC = Taarak Mehta Ka Ooltah Chashmah).\n");
    prompt.push_str("For each title output exactly one word: EDUCATIONAL or DISTRACTING.\n\n");
    prompt.push_str(&numbered_titles(titles));
    prompt.push_str("\nOnly output EDUCATIONAL or DISTRACTING, one per line, same order.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prompt_contains_numbered_titles_in_order() {
        let prompt = build_prompt(
            &titles(&["Rust Tutorial", "Prank Video"]),
            &KeywordHints::default(),
        );
        assert!(prompt.contains("1. Rust Tutorial\n"));
        assert!(prompt.contains("2. Prank Video\n"));
        assert!(
            prompt.find("1. Rust Tutorial").unwrap() < prompt.find("2. Prank Video").unwrap()
        );
    }

    #[test]
    fn test_prompt_marks_empty_keyword_lists() {
        let prompt = build_prompt(&titles(&["a"]), &KeywordHints::default());
        assert!(prompt.contains("SHOW (educational) keyword intent: (none)\n"));
        assert!(prompt.contains("HIDE (distracting) keyword intent: (none)\n"));
    }

    #[test]
    fn test_prompt_joins_keywords_with_commas() {
        let hints = KeywordHints::new(["tutorial", "learn"], ["prank"]);
        let prompt = build_prompt(&titles(&["a"]), &hints);
        assert!(prompt.contains("SHOW (educational) keyword intent: tutorial, learn\n"));
        assert!(prompt.contains("HIDE (distracting) keyword intent: prank\n"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let hints = KeywordHints::new(["learn"], ["vlog"]);
        let t = titles(&["One", "Two"]);
        assert_eq!(build_prompt(&t, &hints), build_prompt(&t, &hints));
    }

    #[test]
    fn test_prompt_keeps_duplicate_titles() {
        let prompt = build_prompt(&titles(&["Same", "Same"]), &KeywordHints::default());
        assert!(prompt.contains("1. Same\n"));
        assert!(prompt.contains("2. Same\n"));
    }

    #[test]
    fn test_prompt_ends_with_format_instruction() {
        let prompt = build_prompt(&titles(&["a"]), &KeywordHints::default());
        assert!(prompt
            .ends_with("Only output EDUCATIONAL or DISTRACTING, one per line, same order."));
    }
}
