//! Error types
//!
//! The `Display` text of [`SubmitError`] is exactly what the form shows in
//! its error banner.

/// Fallback banner text for failures without a usable message
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Everything that can end a submission without a result bundle
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Input did not match the company ID format; nothing was sent
    #[error("Invalid Company ID. Please enter a valid numeric ID.")]
    InvalidCompanyId,

    /// The service answered 2xx but reported a logical failure
    #[error("{0}")]
    Business(String),

    /// The service answered 2xx without usable data
    #[error("No customer data available.")]
    NoData,

    #[error("Company not found. Please enter a valid ID.")]
    NotFound,

    /// Any other non-2xx status
    #[error("{}", .message.as_deref().unwrap_or(UNEXPECTED_ERROR))]
    Http { status: u16, message: Option<String> },

    /// No response at all (network failure, CORS rejection, ...)
    #[error("An unexpected error occurred")]
    Transport(String),

    /// The request could not be built
    #[error("An unexpected error occurred")]
    Request(String),

    #[error("The update service endpoint is not configured.")]
    NotConfigured,
}

impl SubmitError {
    /// True when the failure was decided locally, before any request
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::InvalidCompanyId | Self::NotConfigured | Self::Request(_)
        )
    }

    /// Underlying detail for logs; may differ from the banner text
    pub fn detail(&self) -> String {
        match self {
            Self::Transport(detail) | Self::Request(detail) => detail.clone(),
            Self::Http { status, message } => match message {
                Some(message) => format!("HTTP {status}: {message}"),
                None => format!("HTTP {status}"),
            },
            other => other.to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Service endpoint is empty")]
    MissingEndpoint,

    #[error("Service endpoint must be an http(s) URL: {0}")]
    InvalidEndpoint(String),
}
