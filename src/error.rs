/// Result alias that carries the crate's [`StyleError`] type.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors surfaced while ingesting an externally produced style payload.
///
/// The simulation core itself never fails; malformed values inside a payload
/// that parses are clamped or ignored rather than rejected.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// The payload was not valid JSON or did not match the style schema.
    #[error("invalid style payload: {0}")]
    Parse(#[from] serde_json::Error),
}
