//! Output formatter for scan results.

use crate::cli::OutputFormat;
use crate::reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
use crate::types::Entry;

/// Unified output formatter that selects the appropriate reporter.
pub struct OutputFormatter {
    format: OutputFormat,
    color: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: true,
        }
    }

    /// Set colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn reporter(&self) -> Box<dyn Reporter> {
        match self.format {
            OutputFormat::Terminal => Box::new(TerminalReporter::new().with_color(self.color)),
            OutputFormat::Json => Box::new(JsonReporter::new()),
        }
    }

    /// Format scan entries. Entries are expected to be sorted by path.
    pub fn format(&self, entries: &[Entry]) -> String {
        self.reporter().report(entries)
    }

    /// Format a single described file.
    pub fn format_describe(&self, entry: &Entry) -> String {
        self.reporter().describe(entry)
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Terminal)
    }
}
