//! Data types shared by the scanning core.
//!
//! - `document`: a source file's text and its detected kind
//! - `region`: bounded slices of a document
//! - `finding`: raw matches, suppression verdicts and reportable findings

mod document;
mod finding;
mod region;

pub use document::*;
pub use finding::*;
pub use region::*;
