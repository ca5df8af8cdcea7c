//! Configuration types for the directory walker

/// Configuration for walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Descend at most this many directory levels below the start.
    /// `None` walks the whole tree.
    pub max_depth: Option<usize>,
}

impl WalkerConfig {
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
