use thiserror::Error;

#[derive(Debug, Error)]
pub enum VroomError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Solver error {code}: {message}")]
    Solver { code: i32, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}
