use thiserror::Error;

/// Errors surfaced by the risk engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RiskError {
    #[error("measurement history is empty; no current reading to assess")]
    EmptyHistory,
}

/// Errors raised while loading or checking a `RiskPolicy`
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse policy JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid policy: {0}")]
    Invalid(String),
}
