// Employee Service - Error taxonomy
//
// Every layer propagates these upward untouched. Only the HTTP boundary
// (api.rs) turns them into status codes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Lookup by id found no record
    #[error("employee {id} not found")]
    NotFound { id: String },

    /// Request body could not be turned into an EmployeeDto
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Blocking store task panicked or was cancelled
    #[error("store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("store connection lock poisoned")]
    LockPoisoned,
}

impl Error {
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound { id: id.into() }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Error::InvalidRequest {
            message: message.into(),
        }
    }

    /// True for failures caused by the caller rather than the store
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::InvalidRequest { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(Error::not_found("123").is_client_error());
        assert!(Error::invalid_request("bad json").is_client_error());
        assert!(!Error::LockPoisoned.is_client_error());

        let db_err: Error = rusqlite::Error::InvalidQuery.into();
        assert!(!db_err.is_client_error());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::not_found("abc").to_string(), "employee abc not found");
        assert_eq!(
            Error::invalid_request("missing field `email`").to_string(),
            "invalid request: missing field `email`"
        );
    }
}
