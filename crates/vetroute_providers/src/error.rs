use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Malformed optimization response: {0}")]
    Malformed(String),

    #[error("No route optimization endpoint configured")]
    NotConfigured,
}
