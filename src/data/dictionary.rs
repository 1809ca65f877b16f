//! The substitution dictionary
//!
//! `SpeechTable` maps LaTeX commands (with backslash, e.g. `\alpha`) to their
//! spoken replacements. The built-in table is assembled once from the static
//! maps in `data::symbols`; an external JSON file in the form
//!
//! ```json
//! { "commands": { "\\alpha": "alpha", "\\heartsuit": "heart" } }
//! ```
//!
//! can be merged over it at startup. Tables are plain values: load once, then
//! pass by reference into conversions. Nothing mutates a table mid-request.

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::fmt::Write;
use std::path::Path;

use crate::data::symbols::{GREEK_LETTERS, MATH_SYMBOLS};
use crate::utils::error::{DictionaryError, DictionaryResult};

/// On-disk dictionary format. The `commands` key is required; a file without
/// it is treated as malformed rather than as an empty dictionary.
#[derive(Deserialize)]
struct DictionaryFile {
    commands: FxHashMap<String, String>,
}

/// Command-to-spoken-text substitution table
#[derive(Debug, Clone, Default)]
pub struct SpeechTable {
    commands: FxHashMap<String, String>,
}

lazy_static! {
    static ref BUILTIN: SpeechTable = {
        let mut table = SpeechTable::empty();
        for (name, spoken) in GREEK_LETTERS.entries() {
            table.commands.insert(format!("\\{}", name), (*spoken).to_string());
        }
        for (command, spoken) in MATH_SYMBOLS.iter() {
            table.commands.insert((*command).to_string(), (*spoken).to_string());
        }
        table
    };
}

impl SpeechTable {
    /// An empty table. Useful for testing the engine in isolation.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table, assembled once per process.
    pub fn builtin() -> &'static SpeechTable {
        &BUILTIN
    }

    /// Parse a table from dictionary JSON. Contains only the file's entries;
    /// use [`SpeechTable::from_file`] to get built-ins plus overrides.
    pub fn from_json_str(json: &str) -> DictionaryResult<Self> {
        let file: DictionaryFile = serde_json::from_str(json)?;
        let mut table = SpeechTable::empty();
        for (command, spoken) in file.commands {
            validate_command(&command)?;
            table.commands.insert(command, spoken);
        }
        Ok(table)
    }

    /// Load the built-in table merged with an external dictionary file.
    /// File entries override built-ins with the same key.
    pub fn from_file(path: impl AsRef<Path>) -> DictionaryResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let mut table = SpeechTable::builtin().clone();
        table.merge(SpeechTable::from_json_str(&json)?);
        Ok(table)
    }

    /// Merge another table into this one; `other` wins on conflicts.
    pub fn merge(&mut self, other: SpeechTable) {
        self.commands.extend(other.commands);
    }

    /// Look up the spoken form of a command (key includes the backslash).
    pub fn lookup(&self, command: &str) -> Option<&str> {
        self.commands.get(command).map(String::as_str)
    }

    pub fn contains(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.commands.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Find entries whose command or spoken text contains the query
    /// (case-insensitive). Results are sorted by command name.
    pub fn search(&self, query: &str) -> Vec<(&str, &str)> {
        let query = query.to_lowercase();
        let mut hits: Vec<(&str, &str)> = self
            .iter()
            .filter(|(command, spoken)| {
                command.to_lowercase().contains(&query) || spoken.to_lowercase().contains(&query)
            })
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Render the table as `command -> spoken` lines, sorted by command.
    pub fn export_text(&self) -> String {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_unstable();
        let mut out = String::new();
        for (command, spoken) in entries {
            let _ = writeln!(out, "{} -> {}", command, spoken);
        }
        out
    }
}

/// Dictionary keys must be backslash-prefixed alphabetic command names.
fn validate_command(command: &str) -> DictionaryResult<()> {
    let name = match command.strip_prefix('\\') {
        Some(name) => name,
        None => return Err(DictionaryError::invalid_command(command)),
    };
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DictionaryError::invalid_command(command));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_greek_and_relations() {
        let table = SpeechTable::builtin();
        assert_eq!(table.lookup("\\alpha"), Some("alpha"));
        assert_eq!(table.lookup("\\leq"), Some("less than or equal to"));
        assert!(table.lookup("\\Omega").is_none());
        assert!(table.len() > 50);
    }

    #[test]
    fn test_from_json_str() {
        let table =
            SpeechTable::from_json_str(r#"{"commands": {"\\heartsuit": "heart"}}"#).unwrap();
        assert_eq!(table.lookup("\\heartsuit"), Some("heart"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_commands_key_is_parse_error() {
        let err = SpeechTable::from_json_str(r#"{"symbols": {}}"#).unwrap_err();
        assert!(matches!(err, DictionaryError::ParseError { .. }));
    }

    #[test]
    fn test_invalid_key_rejected() {
        let err = SpeechTable::from_json_str(r#"{"commands": {"alpha": "alpha"}}"#).unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidCommand { .. }));

        let err =
            SpeechTable::from_json_str(r#"{"commands": {"\\sec2tion": "section"}}"#).unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidCommand { .. }));
    }

    #[test]
    fn test_merge_overrides() {
        let mut table = SpeechTable::builtin().clone();
        let custom =
            SpeechTable::from_json_str(r#"{"commands": {"\\alpha": "alfa"}}"#).unwrap();
        table.merge(custom);
        assert_eq!(table.lookup("\\alpha"), Some("alfa"));
        // Untouched entries survive the merge
        assert_eq!(table.lookup("\\beta"), Some("beta"));
    }

    #[test]
    fn test_search() {
        let table = SpeechTable::builtin();
        let hits = table.search("union");
        assert!(hits.iter().any(|(command, _)| *command == "\\cup"));
        assert!(table.search("zzzznothing").is_empty());
    }

    #[test]
    fn test_export_text_sorted() {
        let table =
            SpeechTable::from_json_str(r#"{"commands": {"\\b": "bee", "\\a": "ay"}}"#).unwrap();
        assert_eq!(table.export_text(), "\\a -> ay\n\\b -> bee\n");
    }
}
