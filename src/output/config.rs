//! Output configuration types

use crate::entry::TypeMarker;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// How the first character of each permission string is chosen
    pub type_marker: TypeMarker,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            type_marker: TypeMarker::Legacy,
        }
    }
}
