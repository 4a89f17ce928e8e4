//! Effective configuration after merging CLI and config file.

use crate::{Cli, Config, ConfigError, OutputFormat, ScanOptions, Sigil, SkipSet};
use crate::types::{DEFAULT_FIRST_LINE_LIMIT, DEFAULT_SIGIL};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Deadline applied when neither the CLI nor the config sets one.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Effective configuration after merging CLI and config file.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub options: ScanOptions,
    pub format: OutputFormat,
    pub color: bool,
    pub verbose: bool,
}

impl EffectiveConfig {
    /// Merge CLI options with config file settings.
    ///
    /// - Value options: CLI takes precedence, fallback to config, then defaults
    /// - Boolean flags: CLI OR config (either can enable)
    /// - Skip directories: config entries first, then CLI entries
    pub fn from_cli_and_config(cli: &Cli, config: &Config) -> Result<Self, ConfigError> {
        let sigil = cli
            .sigil
            .clone()
            .or_else(|| config.scan.sigil.clone())
            .unwrap_or_else(|| DEFAULT_SIGIL.to_string());

        let mut skip_dirs = SkipSet::new(config.scan.skip_dirs.iter().cloned());
        skip_dirs.extend(cli.skip.iter().cloned());

        let timeout_ms = cli
            .timeout
            .or(config.scan.timeout_ms)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let format = match cli.format {
            Some(format) => format,
            None => parse_output_format(config.output.format.as_deref())?.unwrap_or_default(),
        };

        let options = ScanOptions {
            sigil: Sigil::new(sigil)?,
            skip_dirs,
            jobs: cli.jobs.or(config.scan.jobs).and_then(NonZeroUsize::new),
            timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
            follow_symlinks: cli.follow_symlinks || config.scan.follow_symlinks,
            first_line_limit: config
                .scan
                .first_line_limit
                .unwrap_or(DEFAULT_FIRST_LINE_LIMIT)
                .max(1),
        };

        Ok(Self {
            options,
            format,
            color: !(cli.no_color || config.output.no_color),
            verbose: cli.verbose,
        })
    }
}

/// Parse an output format name from the config file.
pub fn parse_output_format(s: Option<&str>) -> Result<Option<OutputFormat>, ConfigError> {
    match s.map(|s| s.to_lowercase()) {
        None => Ok(None),
        Some(name) => match name.as_str() {
            "terminal" | "table" => Ok(Some(OutputFormat::Terminal)),
            "json" => Ok(Some(OutputFormat::Json)),
            _ => Err(ConfigError::InvalidFormat(name)),
        },
    }
}
