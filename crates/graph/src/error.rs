use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    /// A query or mutation referenced an id that is not in the node set
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// Path reconstruction stepped onto an id with no backing node
    #[error("Inconsistent graph: route from {from} passes through missing node {missing}")]
    InconsistentGraph { from: String, missing: String },

    #[error("Invalid edge {edge_id}: {reason}")]
    InvalidEdge { edge_id: String, reason: String },

    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Dataset(err.to_string())
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        GraphError::Config(err.to_string())
    }
}
