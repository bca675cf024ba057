use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use super::super::{
    args::{CheckCommand, CommonArgs, OutputFormat},
    exit_status::ExitStatus,
    report::{print_json_to, print_success_to, report_to},
};
use crate::{
    config::{Config, ConfigLoadResult, load_config, load_config_file},
    runner::CheckRunner,
};

/// Configuration after layering defaults, config file and flags.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub config: Config,
    pub cwd: PathBuf,
    pub from_file: bool,
}

/// Resolve the effective configuration: defaults, then the config file
/// (explicit, discovered, or none), then command-line overrides.
pub fn resolve_config(args: &CommonArgs) -> Result<ResolvedConfig> {
    let cwd = match &args.cwd {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("Failed to read current directory")?,
    };

    let ConfigLoadResult {
        mut config,
        from_file,
    } = if args.no_config {
        ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }
    } else if let Some(path) = &args.config {
        ConfigLoadResult {
            config: load_config_file(&cwd.join(path))?,
            from_file: true,
        }
    } else {
        load_config(&cwd)?
    };

    if let Some(source_root) = &args.source_root {
        config.source_root = source_root.clone();
    }
    if !args.includes.is_empty() {
        config.includes = args.includes.clone();
    }
    if !args.ignores.is_empty() {
        config.ignores = args.ignores.clone();
    }
    config
        .scan
        .ignore_prefix_patterns
        .extend(args.ignore_prefixes.iter().cloned());
    config.validate()?;

    Ok(ResolvedConfig {
        config,
        cwd,
        from_file,
    })
}

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let verbose = cmd.common.verbose;
    let resolved = resolve_config(&cmd.common)?;
    let runner = CheckRunner::new(&resolved.config, &resolved.cwd, verbose)?;
    let result = runner.run();

    let mut stdout = io::stdout().lock();
    match cmd.format {
        OutputFormat::Json => print_json_to(&result, &mut stdout)?,
        OutputFormat::Text => {
            let issues = result.issues();
            if issues.is_empty() {
                print_success_to(result.files_checked(), result.i18n_call_count(), &mut stdout);
            } else {
                report_to(&issues, result.i18n_call_count(), &mut stdout);
            }
        }
    }
    stdout.flush()?;

    Ok(ExitStatus::from_literal_count(result.literal_count()))
}
