use serde::{Deserialize, Serialize};

/// Unified error type for all client operations.
///
/// Configuration and validation failures are detected before any I/O and
/// returned synchronously; transport failures always arrive through the
/// asynchronous completion path. All variants are serializable for
/// structured error reporting.
///
/// # Raw responses
///
/// Transport variants keep the raw server payload
/// ([`raw_response()`](Self::raw_response)) so callers can inspect the
/// original body even when the request failed. This layer never retries:
/// retry policy belongs to the [`AuthorizedRequester`](crate::AuthorizedRequester)
/// or to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum DnsError {
    /// A required construction parameter is missing (e.g. the project
    /// identifier). Fatal at construction; there is nothing to retry.
    Configuration {
        /// Name of the missing parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// A required call-site argument is missing or blank (zone name,
    /// DNS name). Returned before any request is issued; fix the input
    /// and call again.
    Validation {
        /// Name of the invalid argument.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure,
    /// connection refused, broken transfer).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Suggested wait time in seconds from the `Retry-After`
        /// header, if the server provided one.
        retry_after: Option<u64>,
        /// Raw response body, if available.
        raw_message: Option<String>,
    },

    /// The provided credentials were rejected (HTTP 401/403).
    InvalidCredentials {
        /// Raw response body, if available.
        raw_message: Option<String>,
    },

    /// Any other non-2xx response from the API, passed through
    /// unchanged.
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the server's error envelope,
        /// or a generic placeholder when the body had none.
        message: String,
        /// Raw response body for diagnostics.
        raw_body: Option<String>,
    },

    /// Failed to parse a success payload from the API.
    Parse {
        /// Details about the parse failure.
        detail: String,
    },
}

impl DnsError {
    /// Whether the error is expected behavior (bad input, bad
    /// credentials), used for log leveling: `true` should log at
    /// `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::Validation { .. } | Self::InvalidCredentials { .. }
        )
    }

    /// The raw server payload carried by transport errors, when one
    /// was received.
    #[must_use]
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::RateLimited { raw_message, .. } | Self::InvalidCredentials { raw_message } => {
                raw_message.as_deref()
            }
            Self::Api { raw_body, .. } => raw_body.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for DnsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration { param, detail } => {
                write!(f, "Missing configuration '{param}': {detail}")
            }
            Self::Validation { param, detail } => {
                write!(f, "Invalid argument '{param}': {detail}")
            }
            Self::Network { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::Api {
                status, message, ..
            } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            Self::Parse { detail } => {
                write!(f, "Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for DnsError {}

/// Convenience type alias for `Result<T, DnsError>`.
pub type Result<T> = std::result::Result<T, DnsError>;
