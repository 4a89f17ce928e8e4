use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// A qualifying executable and the annotation extracted from it.
///
/// `message` is empty when the file carries no annotation. Paths that are
/// not valid UTF-8 serialize lossily.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    pub message: String,
}

fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Lexicographic byte-wise ordering of the paths.
    ///
    /// Unlike `Path`'s own `Ord`, which compares component by component,
    /// this sorts `a-b` before `a/b`.
    pub fn cmp_by_path(&self, other: &Self) -> Ordering {
        self.path
            .as_os_str()
            .as_encoded_bytes()
            .cmp(other.path.as_os_str().as_encoded_bytes())
    }
}

/// Sort entries by path for stable presentation.
pub fn sort_by_path(entries: &mut [Entry]) {
    entries.sort_by(Entry::cmp_by_path);
}
