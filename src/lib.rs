//! # texspeak
//!
//! LaTeX to plain speakable text converter written in Rust.
//!
//! Texspeak rewrites LaTeX source into prose a text-to-speech engine can read
//! aloud: Greek letters and math symbols become their spoken names, sections
//! become labeled lines, and markup with nothing to say is stripped.
//!
//! ## Features
//!
//! - **Dictionary-driven**: a built-in command table extendable with a JSON
//!   dictionary file
//! - **Total conversion**: every input maps to some output; malformed LaTeX
//!   degrades gracefully instead of erroring
//! - **Deterministic**: same input and table, same output
//! - **CLI**: the `t2s` binary converts files or stdin
//! - **WASM Support**: compiles to WebAssembly for browser usage
//! - **Python binding**: pyo3 extension module in `bindings/python`
//!
//! ## Usage Examples
//!
//! ```rust
//! use texspeak::latex_to_speech;
//!
//! let text = latex_to_speech(r"$\alpha \leq \Omega$");
//! assert_eq!(text, "alpha less than or equal to capital omega");
//! ```
//!
//! With a custom dictionary and options:
//!
//! ```rust
//! use texspeak::{latex_to_speech_with_table, SpeakOptions, SpeechTable};
//!
//! let mut table = SpeechTable::builtin().clone();
//! table.merge(SpeechTable::from_json_str(
//!     r#"{"commands": {"\\heartsuit": "heart"}}"#,
//! ).unwrap());
//!
//! let text = latex_to_speech_with_table(r"\heartsuit", &table, &SpeakOptions::default());
//! assert_eq!(text, "heart");
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static tables and the substitution dictionary
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the conversion engine
pub use core::speech::{SpeakOptions, SpeechConverter, UnknownCommandPolicy};

// Re-export the data layer
pub use data::dictionary::SpeechTable;
pub use data::symbols;

// Re-export utilities
pub use utils::error::{ConversionWarning, DictionaryError, DictionaryResult, SpeechOutput};

/// Convert LaTeX source to speakable text with the built-in table and
/// default options.
///
/// # Arguments
/// * `input` - LaTeX source, full document or fragment
///
/// # Returns
/// Speakable plain text
pub fn latex_to_speech(input: &str) -> String {
    let mut converter = SpeechConverter::new(SpeechTable::builtin());
    converter.convert(input)
}

/// Convert LaTeX source to speakable text with custom options.
pub fn latex_to_speech_with_options(input: &str, options: &SpeakOptions) -> String {
    let mut converter = SpeechConverter::with_options(SpeechTable::builtin(), options.clone());
    converter.convert(input)
}

/// Convert LaTeX source to speakable text against a caller-supplied table.
pub fn latex_to_speech_with_table(
    input: &str,
    table: &SpeechTable,
    options: &SpeakOptions,
) -> String {
    let mut converter = SpeechConverter::with_options(table, options.clone());
    converter.convert(input)
}

/// Convert and collect warnings (unknown commands) alongside the text.
pub fn latex_to_speech_with_diagnostics(input: &str) -> SpeechOutput {
    let mut converter = SpeechConverter::new(SpeechTable::builtin());
    converter.convert_with_diagnostics(input)
}

/// Heuristic check for whether input looks like a full LaTeX document
/// rather than a fragment. The CLI uses it for its info output; conversion
/// itself treats both the same.
pub fn is_latex_document(input: &str) -> bool {
    input.contains("\\documentclass")
        || input.contains("\\begin{document}")
        || input.contains("\\usepackage")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_letters() {
        assert_eq!(latex_to_speech(r"\alpha"), "alpha");
        assert_eq!(latex_to_speech(r"\omega"), "omega");
    }

    #[test]
    fn test_capital_greek_distinguished() {
        assert_eq!(latex_to_speech(r"\Omega"), "capital omega");
        assert_ne!(latex_to_speech(r"\Omega"), latex_to_speech(r"\omega"));
    }

    #[test]
    fn test_section() {
        let text = latex_to_speech(r"\section{Intro}");
        assert!(text.contains("Intro"));
        assert!(text.contains("Section:"));
        assert!(!text.contains("\\section"));
    }

    #[test]
    fn test_subsection_tie_break() {
        let text = latex_to_speech(r"\subsection{X}");
        assert!(text.contains("Sub-section: X"));
        assert!(!text.contains("Section: Section"));
    }

    #[test]
    fn test_determinism() {
        let input = r"\section{S} $\alpha + \beta \leq \gamma$ \unknowncmd{x}";
        assert_eq!(latex_to_speech(input), latex_to_speech(input));
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(latex_to_speech("just ordinary prose."), "just ordinary prose.");
    }

    #[test]
    fn test_unknown_command_graceful() {
        assert_eq!(latex_to_speech(r"\unknowncommand{text}"), "text");
    }

    #[test]
    fn test_unknown_command_verbose_policy() {
        let text = latex_to_speech_with_options(r"\unknowncommand{text}", &SpeakOptions::verbose());
        assert_eq!(text, "unknowncommand text");
    }

    #[test]
    fn test_diagnostics_report_unknown() {
        let output = latex_to_speech_with_diagnostics(r"\unknowncommand{text}");
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(
            output.warnings[0].command.as_deref(),
            Some("\\unknowncommand")
        );
    }

    #[test]
    fn test_no_raw_commands_leak() {
        for (command, _) in SpeechTable::builtin().iter() {
            let output = latex_to_speech(command);
            assert!(
                !output.contains(command),
                "'{}' leaked into output '{}'",
                command,
                output
            );
        }
    }

    #[test]
    fn test_equation_tag() {
        let text = latex_to_speech(r"x = y \tag{4}");
        assert!(text.contains("equation 4"));
    }

    #[test]
    fn test_full_document() {
        let input = r"\documentclass{article}
\usepackage{amsmath}
\title{Paper}
\begin{document}
\maketitle
\section{Setup}
Let $x \in \mathbb{R}$ with \(\|x\| \leq 1\).
\end{document}";
        let text = latex_to_speech(input);
        assert!(text.contains("Section: Setup"));
        assert!(text.contains("element of the reals"));
        assert!(text.contains("the norm of x"));
        assert!(!text.contains('\\'));
    }

    #[test]
    fn test_is_latex_document() {
        assert!(is_latex_document(r"\documentclass{article}"));
        assert!(!is_latex_document(r"$\alpha$"));
    }
}
