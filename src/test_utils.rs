#[cfg(test)]
pub mod fixtures {
    use crate::types::Entry;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Write `contents` to `dir/name` with the given mode, creating parents.
    pub fn write_file(dir: &Path, name: &str, contents: &[u8], mode: u32) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        set_mode(&path, mode);
        path
    }

    #[cfg(unix)]
    fn set_mode(path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[cfg(not(unix))]
    fn set_mode(_path: &Path, _mode: u32) {}

    /// Entries as `(path relative to root, message)`, sorted by path.
    pub fn sorted_pairs(root: &Path, entries: Vec<Entry>) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = entries
            .into_iter()
            .map(|e| {
                let relative = e.path.strip_prefix(root).unwrap_or(e.path.as_path());
                (relative.to_string_lossy().into_owned(), e.message)
            })
            .collect();
        pairs.sort();
        pairs
    }
}
