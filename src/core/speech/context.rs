//! Converter state and options

use crate::core::speech::{commands, math, structure, utils};
use crate::data::dictionary::SpeechTable;
use crate::utils::error::{ConversionWarning, SpeechOutput};

/// What to do with a backslash command the dictionary does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCommandPolicy {
    /// Drop the command silently (default). The dictionary is broad enough
    /// that unrecognized commands are almost always formatting noise.
    #[default]
    Drop,
    /// Speak the command name without its backslash.
    BareName,
}

/// Conversion options
#[derive(Debug, Clone, Default)]
pub struct SpeakOptions {
    pub unknown_commands: UnknownCommandPolicy,
    /// Collapse the entire result onto one line instead of keeping
    /// paragraph breaks.
    pub single_line: bool,
}

impl SpeakOptions {
    /// Preset that speaks unknown commands by name instead of dropping them.
    /// Useful when auditing a dictionary against a new document.
    pub fn verbose() -> Self {
        Self {
            unknown_commands: UnknownCommandPolicy::BareName,
            ..Default::default()
        }
    }
}

/// LaTeX to speakable-text converter
///
/// Borrows an immutable substitution table and collects warnings across a
/// conversion. Conversion is a pure rewrite: same input, table, and options
/// always produce the same output, and no input can make it fail.
pub struct SpeechConverter<'a> {
    table: &'a SpeechTable,
    options: SpeakOptions,
    warnings: Vec<ConversionWarning>,
}

impl<'a> SpeechConverter<'a> {
    pub fn new(table: &'a SpeechTable) -> Self {
        Self::with_options(table, SpeakOptions::default())
    }

    pub fn with_options(table: &'a SpeechTable, options: SpeakOptions) -> Self {
        Self {
            table,
            options,
            warnings: Vec::new(),
        }
    }

    /// Convert LaTeX source to speakable text.
    ///
    /// The passes run in a fixed order: structure stripping, section
    /// labeling, math verbalization, dictionary substitution, operator
    /// verbalization, delimiter cleanup, whitespace normalization. Each pass
    /// is total, so the whole pipeline is.
    pub fn convert(&mut self, input: &str) -> String {
        self.warnings.clear();

        let text = input.replace("\r\n", "\n").replace('\r', "\n");
        let text = structure::strip_comments(&text);
        let text = structure::strip_document_scaffolding(&text);
        let text = structure::label_sections(&text);
        let text = math::verbalize_math(&text);
        let text =
            commands::substitute_commands(&text, self.table, &self.options, &mut self.warnings);
        let text = math::verbalize_operators(&text);
        let text = math::strip_delimiters(&text);
        utils::normalize_whitespace(&text, self.options.single_line)
    }

    /// Convert and hand back the warnings with the text.
    pub fn convert_with_diagnostics(&mut self, input: &str) -> SpeechOutput {
        let text = self.convert(input);
        SpeechOutput::with_warnings(text, std::mem::take(&mut self.warnings))
    }

    /// Warnings collected by the most recent conversion.
    pub fn warnings(&self) -> &[ConversionWarning] {
        &self.warnings
    }
}
