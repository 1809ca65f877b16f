//! Pure text helpers for the speech pipeline
//!
//! These functions do not depend on converter state.

use lazy_static::lazy_static;
use regex::Regex;

// Private-use placeholder that survives whitespace collapsing, so paragraph
// breaks can be restored afterwards.
const PARAGRAPH_MARK: &str = "\u{E000}";

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"[ \t]*\n[ \t]*(?:\n[ \t]*)+").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r" +([.,;:?!])").unwrap();
}

/// Collapse whitespace so the output reads as flowing prose.
///
/// Runs containing a blank line become a single paragraph break; every other
/// whitespace run becomes one space. With `single_line` set, everything
/// collapses to spaces.
pub fn normalize_whitespace(text: &str, single_line: bool) -> String {
    if single_line {
        let collapsed = WHITESPACE_RUN.replace_all(text, " ");
        return SPACE_BEFORE_PUNCT
            .replace_all(&collapsed, "$1")
            .trim()
            .to_string();
    }

    let marked = PARAGRAPH_BREAK.replace_all(text, PARAGRAPH_MARK);
    let collapsed = WHITESPACE_RUN.replace_all(&marked, " ");
    let tightened = SPACE_BEFORE_PUNCT.replace_all(&collapsed, "$1");
    tightened
        .replace(&format!(" {}", PARAGRAPH_MARK), PARAGRAPH_MARK)
        .replace(&format!("{} ", PARAGRAPH_MARK), PARAGRAPH_MARK)
        .replace(PARAGRAPH_MARK, "\n\n")
        .trim()
        .to_string()
}

/// Speak word-adjacent `-` and `+` as "minus" and "plus".
///
/// Only fires between alphanumeric characters ("x-1"); signs with surrounding
/// spaces and leading signs are left alone.
pub fn space_math_operators(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut prev: Option<char> = None;

    while let Some(ch) = chars.next() {
        let between_words = prev.is_some_and(|p| p.is_alphanumeric())
            && chars.peek().is_some_and(|n| n.is_alphanumeric());
        if ch == '-' && between_words {
            result.push_str(" minus ");
        } else if ch == '+' && between_words {
            result.push_str(" plus ");
        } else {
            result.push(ch);
        }
        prev = Some(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_spaces_and_tabs() {
        assert_eq!(normalize_whitespace("a  \t b", false), "a b");
    }

    #[test]
    fn test_paragraph_breaks_preserved() {
        assert_eq!(
            normalize_whitespace("one\n\n\ntwo  three\nfour", false),
            "one\n\ntwo three four"
        );
    }

    #[test]
    fn test_space_before_punctuation_tightened() {
        assert_eq!(normalize_whitespace("x equals y .", false), "x equals y.");
    }

    #[test]
    fn test_single_line_mode() {
        assert_eq!(normalize_whitespace("one\n\ntwo\nthree", true), "one two three");
    }

    #[test]
    fn test_minus_between_symbols() {
        assert_eq!(space_math_operators("x-1"), "x minus 1");
        assert_eq!(space_math_operators("a+b"), "a plus b");
    }

    #[test]
    fn test_chained_operators() {
        assert_eq!(space_math_operators("a-b-c"), "a minus b minus c");
    }

    #[test]
    fn test_spaced_dash_untouched() {
        assert_eq!(space_math_operators("a - b"), "a - b");
        assert_eq!(space_math_operators("-x"), "-x");
    }
}
