use serde::{Deserialize, Serialize};

/// Unified error type for all catalog source operations.
///
/// Each variant includes a `provider` field identifying which source produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// None of these errors are retried by this crate. A failed row fetch is
/// surfaced to the caller, which marks the row as permanently failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Source that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Source that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success HTTP status.
    HttpStatus {
        /// Source that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The referenced set does not exist.
    NotFound {
        /// Source that produced the error.
        provider: String,
        /// Reference id that was requested.
        ref_id: String,
    },

    /// The reference id cannot be turned into a location (empty, or contains path separators).
    InvalidRefId {
        /// Source that produced the error.
        provider: String,
        /// The rejected reference id.
        ref_id: String,
    },

    /// Failed to parse the response payload.
    ParseError {
        /// Source that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A local I/O error (file-backed sources).
    Io {
        /// Source that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（资源不存在、引用无效等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidRefId { .. })
    }

    /// 产生该错误的数据源标识
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::NotFound { provider, .. }
            | Self::InvalidRefId { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::Io { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                provider,
                status,
                url,
            } => {
                write!(f, "[{provider}] HTTP {status} for {url}")
            }
            Self::NotFound { provider, ref_id } => {
                write!(f, "[{provider}] Set '{ref_id}' not found")
            }
            Self::InvalidRefId { provider, ref_id } => {
                write!(f, "[{provider}] Invalid reference id '{ref_id}'")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Io { provider, detail } => {
                write!(f, "[{provider}] I/O error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
