//! Core conversion modules

pub mod speech;

pub use speech::{SpeakOptions, SpeechConverter, UnknownCommandPolicy};
