//! LaTeX to speakable-text conversion
//!
//! The Substitution Engine: an ordered sequence of total text rewrites driven
//! by a static lookup table. Not a LaTeX parser — there is no AST, no nested
//! brace handling, no macro expansion. Malformed input degrades to partially
//! rewritten text; it never produces an error.
//!
//! # Module structure
//!
//! - `context`: converter state and options (`SpeechConverter`, `SpeakOptions`)
//! - `structure`: document scaffolding and section labeling
//! - `math`: math construct verbalization and delimiter cleanup
//! - `commands`: the generic dictionary command pass and fallback policy
//! - `utils`: pure text helpers (whitespace, operator spacing)
//!
//! # Example
//!
//! ```rust
//! use texspeak::core::speech::{SpeechConverter, SpeakOptions};
//! use texspeak::data::SpeechTable;
//!
//! let mut converter = SpeechConverter::new(SpeechTable::builtin());
//! let text = converter.convert(r"\section{Results} $\alpha \leq \beta$");
//! assert!(text.contains("Section: Results"));
//! assert!(text.contains("alpha"));
//! ```

pub mod commands;
pub mod context;
pub mod math;
pub mod structure;
pub mod utils;

pub use context::{SpeakOptions, SpeechConverter, UnknownCommandPolicy};
