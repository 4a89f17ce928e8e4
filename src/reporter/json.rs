use crate::reporter::Reporter;
use crate::types::Entry;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, entries: &[Entry]) -> String {
        serde_json::to_string_pretty(entries)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize entries: {}"}}"#, e))
    }

    fn describe(&self, entry: &Entry) -> String {
        serde_json::to_string_pretty(entry)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize entry: {}"}}"#, e))
    }
}
