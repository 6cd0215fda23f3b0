use serde::{Deserialize, Serialize};

/// Unified error type for all Namecheap operations.
///
/// Every variant is serializable for structured error reporting. None of them
/// is retried: transport failures surface to the caller exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A required credential is missing or blank.
    ///
    /// Raised when the provider is built, before any network I/O.
    Configuration {
        /// Configuration key that is missing (e.g. `NC_API_KEY`).
        field: String,
        /// Where the value was expected to come from.
        detail: String,
    },

    /// A user supplied TTL token could not be understood.
    InvalidTtl {
        /// The offending input, as given.
        input: String,
    },

    /// A request parameter is invalid before it ever reaches the API
    /// (e.g. a domain name without a top-level part).
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The API envelope reported an error.
    Api {
        /// Numeric error code from the `Error` entry, if present.
        raw_code: Option<String>,
        /// Error message from the `Error` entry.
        raw_message: String,
    },

    /// The domain has no WhoisGuard subscription at all.
    NoSubscription {
        /// Domain that was looked up.
        domain: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused,
    /// non-2xx status without a readable envelope, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The response body is not a well-formed API envelope.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、远端拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. }
                | Self::InvalidTtl { .. }
                | Self::InvalidParameter { .. }
                | Self::Api { .. }
                | Self::NoSubscription { .. }
        )
    }

    /// Whether the failure happened below the API envelope (connection, timeout).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration { field, detail } => {
                write!(f, "Missing config value {field}: {detail}")
            }
            Self::InvalidTtl { input } => {
                write!(
                    f,
                    "Invalid TTL \"{input}\". Use: auto | 1m | 5m | 20m | 30m | 60m | <seconds>"
                )
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "Invalid parameter '{param}': {detail}")
            }
            Self::Api {
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "{raw_message} (Code: {code})")
                } else {
                    write!(f, "{raw_message}")
                }
            }
            Self::NoSubscription { domain } => {
                write!(f, "No privacy subscription exists for {domain}")
            }
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
