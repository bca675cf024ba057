//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan sources for untranslated literals
//! - `init`: Initialize zhcheck configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Working directory; config lookup and relative paths start here
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Config file to use instead of searching for .zhcheckrc.json
    #[arg(long, value_name = "FILE", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore any config file and use defaults plus flags
    #[arg(long)]
    pub no_config: bool,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<String>,

    /// File globs to scan, relative to the source root (overrides config file)
    #[arg(long = "include", value_delimiter = ',')]
    pub includes: Vec<String>,

    /// File globs to skip, relative to the source root (overrides config file)
    #[arg(long = "ignore", value_delimiter = ',')]
    pub ignores: Vec<String>,

    /// Extra line-prefix regex that suppresses a literal; repeatable
    #[arg(long = "ignore-prefix", value_name = "REGEX")]
    pub ignore_prefixes: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report untranslated CJK literals in templates and scripts
    Check(CheckCommand),
    /// Initialize a new .zhcheckrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
