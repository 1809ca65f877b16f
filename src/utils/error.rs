//! Error handling for Texspeak
//!
//! Conversion itself is total and never fails; the only fallible operation in
//! the crate is loading a substitution dictionary. Non-fatal conversion issues
//! (unknown commands) surface as warnings attached to the output.

use std::fmt;

/// Dictionary load error type
#[derive(Debug, Clone)]
pub enum DictionaryError {
    /// IO error while reading the dictionary file
    IoError { message: String },
    /// The file is not valid dictionary JSON
    ParseError { message: String },
    /// A dictionary key is not a backslash-prefixed command name
    InvalidCommand { command: String },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            DictionaryError::ParseError { message } => {
                write!(f, "Dictionary parse error: {}", message)
            }
            DictionaryError::InvalidCommand { command } => {
                write!(
                    f,
                    "Invalid dictionary key '{}': expected a backslash-prefixed command name",
                    command
                )
            }
        }
    }
}

impl std::error::Error for DictionaryError {}

impl From<std::io::Error> for DictionaryError {
    fn from(err: std::io::Error) -> Self {
        DictionaryError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DictionaryError {
    fn from(err: serde_json::Error) -> Self {
        DictionaryError::ParseError {
            message: err.to_string(),
        }
    }
}

/// Result type for dictionary operations
pub type DictionaryResult<T> = Result<T, DictionaryError>;

// Convenience constructors
impl DictionaryError {
    pub fn io(message: impl Into<String>) -> Self {
        DictionaryError::IoError {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        DictionaryError::ParseError {
            message: message.into(),
        }
    }

    pub fn invalid_command(command: impl Into<String>) -> Self {
        DictionaryError::InvalidCommand {
            command: command.into(),
        }
    }
}

/// Conversion warning (non-fatal issue)
#[derive(Debug, Clone)]
pub struct ConversionWarning {
    pub message: String,
    /// The command that triggered the warning, if any
    pub command: Option<String>,
}

impl ConversionWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            command: None,
        }
    }

    pub fn unknown_command(command: impl Into<String>) -> Self {
        let command = command.into();
        Self {
            message: format!("Unknown command '{}'", command),
            command: Some(command),
        }
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning: {}", self.message)
    }
}

/// Conversion output with any warnings collected along the way
#[derive(Debug, Clone)]
pub struct SpeechOutput {
    /// The speakable text
    pub text: String,
    /// Warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl SpeechOutput {
    pub fn new(text: String) -> Self {
        Self {
            text,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(text: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { text, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = DictionaryError::io("no such file");
        assert!(err.to_string().contains("IO error"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_invalid_command_display() {
        let err = DictionaryError::invalid_command("alpha");
        let msg = err.to_string();
        assert!(msg.contains("alpha"));
        assert!(msg.contains("backslash"));
    }

    #[test]
    fn test_unknown_command_warning() {
        let warn = ConversionWarning::unknown_command("\\foobar");
        assert_eq!(warn.command.as_deref(), Some("\\foobar"));
        assert!(warn.to_string().contains("\\foobar"));
    }

    #[test]
    fn test_speech_output() {
        let output = SpeechOutput::new("hello".to_string());
        assert!(!output.has_warnings());

        let output_with_warn = SpeechOutput::with_warnings(
            "hello".to_string(),
            vec![ConversionWarning::new("test warning")],
        );
        assert!(output_with_warn.has_warnings());
    }
}
