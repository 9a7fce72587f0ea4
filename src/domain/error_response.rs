//! Response mapping for domain errors.
//!
//! Handlers call [`DomainError::code`] to pick the HTTP status and send an
//! [`ErrorResponse`] as the body.

use super::errors::{DomainError, ErrorKind};
use serde::{Deserialize, Serialize};

/// Stable machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Required input is missing or invalid.
    InvalidRequest,
    /// The caller does not own the resource.
    Forbidden,
    /// The referenced resource does not exist.
    NotFound,
    /// The resource collides with an existing one.
    Conflict,
}

impl ErrorCode {
    pub fn http_status(self) -> u16 {
        match self {
            Self::InvalidRequest => 400,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
        }
    }
}

impl DomainError {
    pub fn code(&self) -> ErrorCode {
        match self.kind() {
            ErrorKind::UsernameExists | ErrorKind::UserEmailExists => ErrorCode::Conflict,
            ErrorKind::NoUsername
            | ErrorKind::NoUsernamePassword
            | ErrorKind::CouldNotGetUserId
            | ErrorKind::CannotDeleteLastUser
            | ErrorKind::IdCannotBeZero
            | ErrorKind::ListItemCannotBeEmpty => ErrorCode::InvalidRequest,
            ErrorKind::UserDoesNotExist
            | ErrorKind::ListDoesNotExist
            | ErrorKind::ListItemDoesNotExist
            | ErrorKind::NamespaceDoesNotExist => ErrorCode::NotFound,
            ErrorKind::NeedToBeListOwner
            | ErrorKind::NeedToBeItemOwner
            | ErrorKind::NeedToBeNamespaceOwner => ErrorCode::Forbidden,
        }
    }
}

/// Error body returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}
