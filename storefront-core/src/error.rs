use thiserror::Error;

/// Failure taxonomy for remote commerce calls.
///
/// The backend is an opaque collaborator, so there is a single
/// undifferentiated remote-failure kind carrying whatever message the
/// transport produced. Callers report these and leave state untouched;
/// a failed remote call never crashes the view.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// The remote call itself failed (network, HTTP status, server rejection).
    #[error("remote call failed: {0}")]
    Remote(String),

    /// The call succeeded but the response body could not be decoded.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
