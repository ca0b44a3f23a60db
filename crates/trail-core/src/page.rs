//! Page workload error taxonomy.

/// Error type for page rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("Section '{0}' failed: {1}")]
    SectionFailed(String, String),
}
