use thiserror::Error;

use crate::net::NetError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported schema_version {found} (expected {expected})")]
    UnsupportedSchema { found: u32, expected: u32 },

    #[error("link #{index} rejected: {source}")]
    Link {
        index: usize,
        #[source]
        source: NetError,
    },
}
