use reqwest::StatusCode;

/// Coarse classification used by the sessions to pick a user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    NotFound,
    Conflict,
    Unauthorized,
    Rejected,
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("{label}: could not reach the server: {source}")]
    Transport {
        label: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{label}: not found")]
    NotFound { label: &'static str },

    #[error("{label}: conflict: {message}")]
    Conflict {
        label: &'static str,
        message: String,
    },

    #[error("unauthorized (token missing or expired; run `pokedeck login`)")]
    Unauthorized,

    #[error("forbidden (insufficient permissions)")]
    Forbidden,

    #[error("{label}: server returned {status}: {message}")]
    Status {
        label: &'static str,
        status: u16,
        message: String,
    },

    #[error("{label}: invalid response body: {source}")]
    InvalidResponse {
        label: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid base url '{0}' (expected http:// or https://)")]
    InvalidBaseUrl(String),
}

impl RemoteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RemoteError::Transport { .. }
            | RemoteError::InvalidResponse { .. }
            | RemoteError::InvalidBaseUrl(_) => ErrorKind::Network,
            RemoteError::NotFound { .. } => ErrorKind::NotFound,
            RemoteError::Conflict { .. } => ErrorKind::Conflict,
            RemoteError::Unauthorized => ErrorKind::Unauthorized,
            RemoteError::Forbidden | RemoteError::Status { .. } => ErrorKind::Rejected,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, RemoteError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RemoteError::NotFound { .. })
    }

    /// Maps a non-success status plus the server's error text onto a variant.
    pub(crate) fn from_status(label: &'static str, status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => RemoteError::NotFound { label },
            StatusCode::CONFLICT => RemoteError::Conflict { label, message },
            StatusCode::UNAUTHORIZED => RemoteError::Unauthorized,
            StatusCode::FORBIDDEN => RemoteError::Forbidden,
            _ => RemoteError::Status {
                label,
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[cfg(test)]
#[path = "../tests/remote/error_tests.rs"]
mod tests;
