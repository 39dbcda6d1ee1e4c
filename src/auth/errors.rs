//! Authentication error types.

use crate::storage::StorageError;
use thiserror::Error;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login could not persist the user record. Unreachable with a healthy
    /// storage backend since the mock call itself never fails.
    #[error("Login failed")]
    LoginFailed,

    /// Signup counterpart of [`AuthError::LoginFailed`]
    #[error("Signup failed")]
    SignupFailed,

    /// Durable storage rejected a read or write
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The persisted user record could not be encoded or decoded
    #[error("corrupt user record: {0}")]
    CorruptUser(#[from] serde_json::Error),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
