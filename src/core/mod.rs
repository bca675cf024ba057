//! Scanning core.
//!
//! Turns the text of one document into an ordered list of untranslated
//! literal findings. Everything here is pure and synchronous: no file
//! access, no shared mutable state.
//!
//! ## Module Structure
//!
//! - `data`: documents, regions, raw matches, verdicts and findings
//! - `inspect`: context checks around a match (comments, call wrapping, tag boundaries)
//! - `segment`: template / script preamble / named block extraction
//! - `patterns`: the compiled pattern catalog
//! - `classify`: per document kind extraction routines
//! - `scanner`: options and the compiled `Scanner` entry point

pub mod classify;
pub mod data;
mod error;
pub mod inspect;
pub mod patterns;
mod scanner;
pub mod segment;

pub use data::*;
pub use error::ScanError;
pub use inspect::ContextWindows;
pub use scanner::{ScanOptions, Scanner};
