//! Core scanning functionality.

use crate::handlers::error::HandlerResult;
use crate::{Cli, Config, ConfigError, EffectiveConfig, Entry, ExecutableFinder, Extractor};
use crate::{OutputFormatter, sort_by_path};
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info};

/// What a CLI invocation does with its path argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Walk a directory and list every qualifying executable.
    Directory,
    /// Print every annotation of a single file.
    Describe,
}

impl ScanMode {
    pub fn for_path(path: &Path) -> Self {
        if path.is_file() {
            Self::Describe
        } else {
            Self::Directory
        }
    }
}

/// Load the explicit config file, or discover one next to the scanned path.
pub fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    if let Some(ref path) = cli.config {
        return Config::from_file(path);
    }

    let project_root = if cli.path.is_dir() {
        Some(cli.path.as_path())
    } else {
        cli.path.parent()
    };
    Ok(Config::load(project_root))
}

/// Run a scan using CLI settings and return the rendered output.
pub fn run_scan(cli: &Cli) -> HandlerResult<String> {
    let config = load_config(cli)?;
    let mut effective = EffectiveConfig::from_cli_and_config(cli, &config)?;
    effective.color &= std::io::stdout().is_terminal();
    debug!(?effective, "Effective configuration");

    run_scan_with_config(&cli.path, &effective)
}

/// Run scan with a pre-built configuration.
pub fn run_scan_with_config(path: &Path, effective: &EffectiveConfig) -> HandlerResult<String> {
    let formatter = OutputFormatter::new(effective.format).with_color(effective.color);

    match ScanMode::for_path(path) {
        ScanMode::Describe => {
            info!(path = %path.display(), "Describing file");
            let message = Extractor::new(&effective.options.sigil)
                .with_line_limit(effective.options.first_line_limit)
                .all_messages(path)?;
            Ok(formatter.format_describe(&Entry::new(path, message)))
        }
        ScanMode::Directory => {
            let mut entries = ExecutableFinder::new(effective.options.clone()).find(path)?;
            sort_by_path(&mut entries);
            Ok(formatter.format(&entries))
        }
    }
}
