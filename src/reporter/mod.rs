pub mod json;
pub mod terminal;

use crate::types::Entry;

pub trait Reporter {
    /// Render the result of a directory scan. Entries arrive sorted by path.
    fn report(&self, entries: &[Entry]) -> String;

    /// Render a single file together with all of its annotations.
    fn describe(&self, entry: &Entry) -> String;
}
