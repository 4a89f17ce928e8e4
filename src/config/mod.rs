//! Configuration layer for lx.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File loading and search order
//! - `effective`: CLI + config merging (in `run::config`)

mod error;
mod loading;
mod types;

pub use error::ConfigError;
pub use loading::PROJECT_CONFIG_FILES;
pub use types::{Config, OutputConfig, ScanConfig};

pub use crate::run::config::{EffectiveConfig, parse_output_format};
