//! Data layer - static mappings and the substitution dictionary
//!
//! - `symbols`: built-in spoken-word tables (Greek letters, math symbols)
//! - `dictionary`: the `SpeechTable` type and external JSON file loading

pub mod dictionary;
pub mod symbols;

pub use dictionary::SpeechTable;
pub use symbols::{BLACKBOARD_SETS, GREEK_LETTERS, MATH_SYMBOLS};
