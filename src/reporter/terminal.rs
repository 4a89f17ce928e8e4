use crate::reporter::Reporter;
use crate::types::Entry;
use colored::Colorize;

const PATH_HEADER: &str = "PATH";
const INFO_HEADER: &str = "INFO";
/// Spaces between the path column and the info column.
const COLUMN_GAP: usize = 2;

pub struct TerminalReporter {
    color: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn header(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn path_label(&self, path: &str) -> String {
        if self.color {
            path.green().to_string()
        } else {
            path.to_string()
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, entries: &[Entry]) -> String {
        let rows: Vec<(String, &str)> = entries
            .iter()
            .map(|e| (e.path.display().to_string(), e.message.as_str()))
            .collect();

        let width = rows
            .iter()
            .map(|(path, _)| path.chars().count())
            .chain(std::iter::once(PATH_HEADER.len()))
            .max()
            .unwrap_or_default()
            + COLUMN_GAP;

        let pad = |text: &str| " ".repeat(width - text.chars().count());

        let mut output = format!(
            "{}{}{}\n",
            self.header(PATH_HEADER),
            pad(PATH_HEADER),
            self.header(INFO_HEADER)
        );

        for (path, message) in rows {
            output.push_str(&self.path_label(&path));
            if !message.is_empty() {
                output.push_str(&pad(&path));
                output.push_str(message);
            }
            output.push('\n');
        }

        output
    }

    fn describe(&self, entry: &Entry) -> String {
        let mut output = self.header(&entry.path.display().to_string());
        output.push('\n');
        if !entry.message.is_empty() {
            output.push_str(&entry.message);
            output.push('\n');
        }
        output
    }
}
