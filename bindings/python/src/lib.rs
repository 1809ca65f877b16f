//! Python bindings for texspeak

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use texspeak::{SpeakOptions, SpeechConverter, SpeechTable, UnknownCommandPolicy};

fn parse_options(unknown: &str, single_line: bool) -> PyResult<SpeakOptions> {
    let unknown_commands = match unknown {
        "drop" => UnknownCommandPolicy::Drop,
        "name" => UnknownCommandPolicy::BareName,
        other => {
            return Err(PyValueError::new_err(format!(
                "unknown policy '{}': expected 'drop' or 'name'",
                other
            )))
        }
    };
    Ok(SpeakOptions {
        unknown_commands,
        single_line,
    })
}

/// Convert LaTeX source to speakable plain text.
#[pyfunction]
#[pyo3(signature = (text, unknown = "drop", single_line = false))]
fn latex_to_speech(text: &str, unknown: &str, single_line: bool) -> PyResult<String> {
    let options = parse_options(unknown, single_line)?;
    Ok(texspeak::latex_to_speech_with_options(text, &options))
}

/// Convert and return (text, warnings) where warnings lists unknown commands.
#[pyfunction]
#[pyo3(signature = (text, unknown = "drop", single_line = false))]
fn convert_with_warnings(
    text: &str,
    unknown: &str,
    single_line: bool,
) -> PyResult<(String, Vec<String>)> {
    let options = parse_options(unknown, single_line)?;
    let mut converter = SpeechConverter::with_options(SpeechTable::builtin(), options);
    let output = converter.convert_with_diagnostics(text);
    let warnings = output
        .warnings
        .iter()
        .map(|warning| warning.to_string())
        .collect();
    Ok((output.text, warnings))
}

/// Convert using a dictionary file merged over the built-in table.
#[pyfunction]
#[pyo3(signature = (text, dictionary_path, unknown = "drop", single_line = false))]
fn latex_to_speech_with_dictionary(
    text: &str,
    dictionary_path: &str,
    unknown: &str,
    single_line: bool,
) -> PyResult<String> {
    let options = parse_options(unknown, single_line)?;
    let table = SpeechTable::from_file(dictionary_path)
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(texspeak::latex_to_speech_with_table(text, &table, &options))
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(latex_to_speech, m)?)?;
    m.add_function(wrap_pyfunction!(convert_with_warnings, m)?)?;
    m.add_function(wrap_pyfunction!(latex_to_speech_with_dictionary, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
