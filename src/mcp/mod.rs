//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes zhcheck scanning to AI assistants over stdio.
//!
//! - `server`: tool router and stdio entry point
//! - `types`: tool parameters and result DTOs

mod server;
pub mod types;

pub use server::{ZhcheckMcpServer, run_server};
