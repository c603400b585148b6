//! Command-line entry point. Wires up the `clap` dependency the teacher
//! declared but never used; subcommands mirror spec.md §6's "tool driver"
//! description.

use crate::domain::config::{self, Config};
use crate::domain::error::CoreError;
use crate::domain::extraction_mode::ExtractionMode;
use crate::domain::filters::FilterPipeline;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cxxdoc", about = "Extracts reference documentation from a C++ codebase")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (JSON; see domain::config).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full extraction + render pipeline.
    Extract {
        #[arg(long)]
        compile_commands: PathBuf,
    },
    /// Load and validate a config file without extracting anything.
    CheckConfig,
}

/// Installs the global `tracing` subscriber once, honoring `RUST_LOG` if
/// set and falling back to `log_level`.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Exit codes, per spec.md §6: 0 success, 1 configuration/input error,
/// 2 internal invariant violation.
pub const EXIT_OK: i32 = 0;
pub const EXIT_USER_ERROR: i32 = 1;
pub const EXIT_INTERNAL_ERROR: i32 = 2;

pub fn exit_code_for(error: &CoreError) -> i32 {
    match error {
        CoreError::Internal(_) => EXIT_INTERNAL_ERROR,
        _ => EXIT_USER_ERROR,
    }
}

pub fn load_config(path: Option<&std::path::Path>) -> Result<config::LoadedConfig, CoreError> {
    match path {
        Some(p) => config::load(p),
        None => Ok(config::LoadedConfig {
            config: Config::default(),
            warnings: Vec::new(),
        }),
    }
}

pub fn default_filters(config: &Config) -> FilterPipeline {
    use crate::domain::filters::PatternRule;
    FilterPipeline {
        exclude_rules: config
            .exclude_symbols
            .iter()
            .map(|p| PatternRule::exclude(p))
            .collect(),
        pattern_rules: config
            .namespaces
            .iter()
            .map(|ns| PatternRule::namespace_scope(ns, ExtractionMode::Regular))
            .collect(),
        in_scope_files: config.input_paths.clone(),
        default_mode: if config.namespaces.is_empty() {
            ExtractionMode::Regular
        } else {
            ExtractionMode::Dependency
        },
        extract_private: config.extract_private,
    }
}
