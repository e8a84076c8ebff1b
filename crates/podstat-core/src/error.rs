//! Shared error types across podstat crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PodstatError>;

/// Failure while parsing or executing the HTML page template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("template syntax error at byte {offset}: {reason}")]
    Syntax { offset: usize, reason: String },
    #[error("template field `{0}` is not defined")]
    MissingField(String),
    #[error("template field `{0}` cannot be rendered as text")]
    NotScalar(String),
    #[error("template field `{0}` is not a map")]
    NotIterable(String),
    #[error("template data unavailable: {0}")]
    Data(String),
}

impl RenderError {
    pub(crate) fn syntax(offset: usize, reason: impl Into<String>) -> Self {
        RenderError::Syntax {
            offset,
            reason: reason.into(),
        }
    }
}

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum PodstatError {
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl PodstatError {
    /// Stable code string, used in logs and by tests.
    pub fn code(&self) -> &'static str {
        match self {
            PodstatError::Render(_) => "RENDER",
            PodstatError::BadConfig(_) => "BAD_CONFIG",
            PodstatError::UnsupportedVersion => "UNSUPPORTED_VERSION",
            PodstatError::Internal(_) => "INTERNAL",
        }
    }
}
