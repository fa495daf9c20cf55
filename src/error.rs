#[derive(Debug, thiserror::Error)]
pub enum CovidError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Failed to decode summary record {index}: {source}")]
    RecordDecode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CovidError {
    /// Whether the failure happened before a response body could be read
    /// (no connectivity, timeout, non-2xx status).
    pub fn is_transport(&self) -> bool {
        matches!(self, CovidError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, CovidError>;
