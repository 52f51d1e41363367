// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! bridgejs CLI - show how CommonJS and ES modules see each other
//!
//! Loads a module manifest and prints, for each module, what `require()`
//! returns and what `import` observes.

mod report;

use bridgejs_interop::{Config, FlagPolicy, InteropError, Manifest, ModuleRegistry, VERSION};
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bridgejs",
    about = "Show what require() and import see for CommonJS and ES modules",
    version = VERSION,
    author = "Pegasus Heavy Industries"
)]
struct Cli {
    /// Module manifest (JSON)
    manifest: PathBuf,

    /// Only show what require() returns for this specifier
    #[arg(short = 'r', long = "require", value_name = "SPECIFIER")]
    require: Vec<String>,

    /// Only show what import sees for this specifier
    #[arg(short = 'i', long = "import", value_name = "SPECIFIER")]
    import: Vec<String>,

    /// Config file (defaults to ./bridgejs.toml when present)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// How __esModule is read: presence or truthy
    #[arg(long = "flag-policy", value_name = "POLICY")]
    flag_policy: Option<FlagPolicy>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path(&std::env::current_dir()?),
    };
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(config_path.parent().unwrap_or(Path::new(".")))?,
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, &config, &config_path)?)
        .with_writer(std::io::stderr)
        .init();

    let policy = cli.flag_policy.unwrap_or(config.flag_policy);
    tracing::debug!(?policy, manifest = %cli.manifest.display(), "starting");

    let registry =
        Manifest::load(&cli.manifest)?.into_registry(ModuleRegistry::with_policy(policy))?;

    if cli.require.is_empty() && cli.import.is_empty() {
        print_all(&registry);
        return Ok(());
    }

    for specifier in &cli.require {
        let value = registry.require(specifier)?;
        println!("{} {}", "require".green(), specifier.cyan());
        println!("  {}", report::describe_require(&value));
    }
    for specifier in &cli.import {
        let view = registry.import(specifier)?;
        println!("{} {}", "import".magenta(), specifier.cyan());
        println!("  {}", report::describe_import(&view));
    }
    Ok(())
}

/// Log filter for this run; `--verbose` overrides the configured level.
fn log_filter(
    verbose: bool,
    config: &Config,
    config_path: &Path,
) -> Result<EnvFilter, InteropError> {
    if verbose {
        return Ok(EnvFilter::new("bridgejs=debug,bridgejs_interop=debug"));
    }
    EnvFilter::try_new(&config.log_level).map_err(|e| InteropError::Config {
        path: config_path.to_path_buf(),
        reason: format!("invalid log_level '{}': {}", config.log_level, e),
    })
}

fn print_all(registry: &ModuleRegistry) {
    for report in registry.resolve_all() {
        let record = &report.record;
        let marker = if record.has_es_module_flag {
            " __esModule".yellow().to_string()
        } else {
            String::new()
        };
        println!("{} ({}{})", record.specifier.cyan().bold(), record.kind.dimmed(), marker);
        println!("  {}  {}", "require".green(), report::describe_require(&report.required));
        println!("  {}   {}", "import".magenta(), report::describe_import(&report.imported));
    }
}
