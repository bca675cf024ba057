//! zhcheck - untranslated literal scanner for Vue projects
//!
//! zhcheck is a CLI tool and library that finds user-visible CJK text left
//! outside i18n calls in Vue single-file components and plain scripts.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Pure scanning engine (text in, findings out)
//! - `file_scanner`: Source file discovery
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `runner`: Parallel check orchestration
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod file_scanner;
pub mod issues;
pub mod mcp;
pub mod runner;
pub mod utils;
