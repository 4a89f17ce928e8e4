use crate::config::ConfigError;
use std::fmt;

/// Marker used when nothing else is configured.
pub const DEFAULT_SIGIL: &str = "lx:";

/// The literal marker that introduces an annotation on a line.
///
/// Never empty: an empty marker would match every line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sigil(String);

impl Sigil {
    /// Create a sigil, rejecting the empty string.
    pub fn new(s: impl Into<String>) -> Result<Self, ConfigError> {
        let s = s.into();
        if s.is_empty() {
            return Err(ConfigError::InvalidSigil(s));
        }
        Ok(Self(s))
    }

    /// Get the underlying string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split `line` at the first occurrence of the sigil and return the
    /// whitespace-trimmed remainder, or `None` when the sigil is absent.
    pub fn payload<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.split_once(self.0.as_str()).map(|(_, rest)| rest.trim())
    }
}

impl Default for Sigil {
    fn default() -> Self {
        Self(DEFAULT_SIGIL.to_string())
    }
}

impl AsRef<str> for Sigil {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sigil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
