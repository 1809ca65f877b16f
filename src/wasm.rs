//! WASM bindings for texspeak
//!
//! JavaScript-accessible functions for LaTeX to speech-text conversion, for
//! use from a web form that feeds the result to the browser's speech
//! synthesis API.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{SpeakOptions, SpeechConverter, SpeechTable, UnknownCommandPolicy};

/// Conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct SpeechConvertOptions {
    /// "drop" (default) or "name": what to do with unknown commands
    #[serde(default)]
    pub unknown_commands: String,
    /// Collapse output onto a single line
    #[serde(default)]
    pub single_line: bool,
    /// Extra dictionary entries merged over the built-ins, keyed by command
    #[serde(default)]
    pub extra_commands: std::collections::HashMap<String, String>,
}

/// Conversion result with warnings
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The speakable text
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if the options could not be applied
    pub error: Option<String>,
    /// Unknown-command warnings
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert LaTeX source to speakable text
///
/// # Arguments
/// * `input` - LaTeX source, full document or fragment
///
/// # Returns
/// Speakable plain text
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "latexToSpeech")]
pub fn latex_to_speech_wasm(input: &str) -> String {
    crate::latex_to_speech(input)
}

/// Convert LaTeX source to speakable text with options
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "latexToSpeechWithOptions")]
pub fn latex_to_speech_with_options_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: SpeechConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let speak_options = SpeakOptions {
        unknown_commands: match opts.unknown_commands.as_str() {
            "name" => UnknownCommandPolicy::BareName,
            _ => UnknownCommandPolicy::Drop,
        },
        single_line: opts.single_line,
    };

    let mut table = SpeechTable::builtin().clone();
    let mut error = None;
    if !opts.extra_commands.is_empty() {
        let json = serde_json::json!({ "commands": opts.extra_commands }).to_string();
        match SpeechTable::from_json_str(&json) {
            Ok(extra) => table.merge(extra),
            Err(e) => error = Some(e.to_string()),
        }
    }

    let mut converter = SpeechConverter::with_options(&table, speak_options);
    let output = converter.convert_with_diagnostics(input);

    let result = ConvertResult {
        output: output.text,
        success: error.is_none(),
        error,
        warnings: output
            .warnings
            .iter()
            .map(|warning| warning.to_string())
            .collect(),
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Number of commands in the built-in dictionary
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "dictionarySize")]
pub fn dictionary_size() -> usize {
    SpeechTable::builtin().len()
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
