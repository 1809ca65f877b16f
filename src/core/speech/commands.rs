//! Dictionary command substitution
//!
//! The final command pass: every `\name` still standing after the structure
//! and math passes is looked up in the substitution table. Matching the whole
//! alphabetic command name at once gives longest-munch behavior, so `\leq`
//! can never be read as `\le` followed by a stray `q`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::speech::context::{SpeakOptions, UnknownCommandPolicy};
use crate::data::dictionary::SpeechTable;
use crate::data::symbols::GREEK_LETTERS;
use crate::utils::error::ConversionWarning;

lazy_static! {
    static ref COMMAND: Regex = Regex::new(r"\\([A-Za-z]+)\*?").unwrap();
}

/// Replace every backslash command via the table. Capitalized Greek commands
/// not in the table speak as "capital <letter>". Unknown commands follow the
/// configured fallback policy and are recorded as warnings.
pub fn substitute_commands(
    input: &str,
    table: &SpeechTable,
    options: &SpeakOptions,
    warnings: &mut Vec<ConversionWarning>,
) -> String {
    COMMAND
        .replace_all(input, |caps: &regex::Captures| {
            let name = &caps[1];
            let command = format!("\\{}", name);

            if let Some(spoken) = table.lookup(&command) {
                return format!(" {} ", spoken);
            }

            if name.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
                let lower = name.to_lowercase();
                if let Some(spoken) = GREEK_LETTERS.get(lower.as_str()) {
                    return format!(" capital {} ", spoken);
                }
            }

            warnings.push(ConversionWarning::unknown_command(command.as_str()));
            match options.unknown_commands {
                UnknownCommandPolicy::Drop => String::new(),
                UnknownCommandPolicy::BareName => format!(" {} ", name),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, options: &SpeakOptions) -> (String, Vec<ConversionWarning>) {
        let mut warnings = Vec::new();
        let text = substitute_commands(input, SpeechTable::builtin(), options, &mut warnings);
        (text, warnings)
    }

    #[test]
    fn test_known_command() {
        let (text, warnings) = run("\\alpha", &SpeakOptions::default());
        assert_eq!(text.trim(), "alpha");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_capital_greek() {
        let (text, _) = run("\\Omega", &SpeakOptions::default());
        assert_eq!(text.trim(), "capital omega");
    }

    #[test]
    fn test_longest_munch_tie_break() {
        let (text, _) = run("a \\leq b", &SpeakOptions::default());
        assert_eq!(text.trim(), "a  less than or equal to  b".trim());
        assert!(!text.contains('q'));
    }

    #[test]
    fn test_unknown_dropped_with_warning() {
        let (text, warnings) = run("\\mystery", &SpeakOptions::default());
        assert_eq!(text, "");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].command.as_deref(), Some("\\mystery"));
    }

    #[test]
    fn test_unknown_bare_name_policy() {
        let (text, warnings) = run("\\mystery", &SpeakOptions::verbose());
        assert_eq!(text.trim(), "mystery");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_starred_variant_consumed() {
        let (text, _) = run("\\alpha*", &SpeakOptions::default());
        assert_eq!(text.trim(), "alpha");
    }

    #[test]
    fn test_table_override_wins_over_capital_rule() {
        let mut table = SpeechTable::builtin().clone();
        table.merge(
            SpeechTable::from_json_str(r#"{"commands": {"\\Omega": "big omega"}}"#).unwrap(),
        );
        let mut warnings = Vec::new();
        let text =
            substitute_commands("\\Omega", &table, &SpeakOptions::default(), &mut warnings);
        assert_eq!(text.trim(), "big omega");
    }
}
