//! Math verbalization passes
//!
//! Rewrites common math constructs into spoken phrases: norms, blackboard
//! sets, fractions, roots, scripts, and plain-text operators. Patterns match
//! single-level brace arguments only; nested braces degrade to the fallback
//! path rather than erroring.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::speech::utils::space_math_operators;
use crate::data::symbols::BLACKBOARD_SETS;

// Protects escaped dollar signs across delimiter stripping.
const DOLLAR_MARK: &str = "\u{E001}";

lazy_static! {
    // Norm before absolute value, squared norm before plain norm.
    static ref MATH_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\\\|(.+?)\\\|\s*\^\{?2\}?").unwrap(), "the two norm of $1"),
        (Regex::new(r"\\\|(.+?)\\\|").unwrap(), "the norm of $1"),
        (Regex::new(r"\\\{(.+?)\\\}").unwrap(), "the sequence $1"),
        (Regex::new(r"\\tag\*?\{([^}]*)\}").unwrap(), " equation $1 "),
        (Regex::new(r"\\[dt]?frac\{([^}]*)\}\{([^}]*)\}").unwrap(), " $1 over $2 "),
        (Regex::new(r"\\sqrt\[3\]\{([^}]*)\}").unwrap(), " the cube root of $1 "),
        (Regex::new(r"\\sqrt\[([^\]]*)\]\{([^}]*)\}").unwrap(), " the ${1}th root of $2 "),
        (Regex::new(r"\\sqrt\{([^}]*)\}").unwrap(), " the square root of $1 "),
        (Regex::new(r"\^\{\\prime\}|\^\\prime").unwrap(), " prime"),
        (Regex::new(r"\^\{([^}]*)\}").unwrap(), " to the power of $1 "),
        (Regex::new(r"\^([A-Za-z0-9])").unwrap(), " to the power of $1 "),
        (Regex::new(r"_\{([^}]*)\}").unwrap(), " sub $1 "),
        (Regex::new(r"_([A-Za-z0-9])").unwrap(), " sub $1 "),
    ];

    static ref MATHBB: Regex = Regex::new(r"\\mathbb\{([A-Za-z])\}").unwrap();
    static ref ABSOLUTE_VALUE: Regex = Regex::new(r"\|([^|\n]+)\|").unwrap();
    static ref ESCAPED_CHAR: Regex = Regex::new(r"\\([%&#_])").unwrap();
}

/// Rewrite math constructs into spoken phrases, in rule order.
pub fn verbalize_math(input: &str) -> String {
    let mut text = MATHBB
        .replace_all(input, |caps: &regex::Captures| {
            match BLACKBOARD_SETS.get(&caps[1]) {
                Some(spoken) => (*spoken).to_string(),
                None => caps[1].to_string(),
            }
        })
        .into_owned();
    for (pattern, replacement) in MATH_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    text
}

/// Speak the plain-text operators that remain after command substitution:
/// absolute values, comparisons, equals, and word-adjacent signs.
pub fn verbalize_operators(input: &str) -> String {
    let text = ABSOLUTE_VALUE.replace_all(input, "absolute value of $1");
    let text = text
        .replace('<', " less than ")
        .replace('>', " greater than ")
        .replace('=', " equals ");
    space_math_operators(&text)
}

/// Remove math delimiters and leftover markup characters: `$`, `\(..\)`,
/// `\[..\]`, stray braces, and any remaining backslashes. Escaped specials
/// (`\%`, `\$`, ...) become their literal character first.
pub fn strip_delimiters(input: &str) -> String {
    let text = input.replace("\\$", DOLLAR_MARK);
    let text = ESCAPED_CHAR.replace_all(&text, "$1");
    text.replace("\\(", " ")
        .replace("\\)", " ")
        .replace("\\[", " ")
        .replace("\\]", " ")
        .replace('$', " ")
        .replace(['{', '}'], "")
        .replace('\\', "")
        .replace(DOLLAR_MARK, "$")
}
