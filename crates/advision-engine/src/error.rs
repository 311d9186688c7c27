use thiserror::Error;

/// Failures talking to the generation service. All of them are recoverable:
/// callers fall back to the heuristic path.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("generation service returned no text")]
    EmptyResponse,

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid generation endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Input-contract violations surfaced to the caller.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no {0} provided")]
    EmptyBatch(&'static str),
}
