//! Utility modules

pub mod error;

pub use error::{ConversionWarning, DictionaryError, DictionaryResult, SpeechOutput};
