//! Search presentation settings.

use serde::{Deserialize, Serialize};

/// Search result rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of content characters shown in a result preview.
    #[serde(default = "default_snippet_length")]
    pub snippet_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            snippet_length: default_snippet_length(),
        }
    }
}

fn default_snippet_length() -> usize {
    200
}
