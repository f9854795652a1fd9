use thiserror::Error;

/// Document generation errors. Building a tree never fails; only the
/// interchange serialization boundary can.
#[derive(Error, Debug)]
pub enum DocGenError {
    #[error("Failed to serialize document tree: {0}")]
    Serialization(#[from] serde_json::Error),
}
