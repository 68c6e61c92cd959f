use thiserror::Error;

/// Failures surfaced by the vendor integrations.
///
/// No retries happen anywhere: every failure is handled once, at the boundary
/// where it is detected.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Vendor answered with a non-success status.
    #[error("upstream request failed with status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Vendor payload lacked a section that cannot be defaulted.
    #[error("malformed vendor response: {0}")]
    MalformedResponse(String),

    /// Network-level failure before any vendor status was received.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
