//! Dipan types service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind as DatabaseErrorKind},
};
use thiserror::Error;

use crate::{
    errors::{Classify, ErrorKind, is_unavailable},
    pagination::PaginationError,
};

#[derive(Debug, Error)]
pub enum DipanTypesServiceError {
    #[error("dipan type already exists")]
    AlreadyExists,

    #[error("dipan type not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("invalid pagination")]
    InvalidPagination(#[from] PaginationError),

    #[error("storage unavailable")]
    Unavailable(#[source] Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for DipanTypesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if is_unavailable(&error) {
            return Self::Unavailable(error);
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(DatabaseErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(DatabaseErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(DatabaseErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(DatabaseErrorKind::CheckViolation) => Self::InvalidData,
            Some(DatabaseErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl Classify for DipanTypesServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::AlreadyExists => ErrorKind::AlreadyExists,
            Self::InvalidReference
            | Self::MissingRequiredData
            | Self::InvalidData
            | Self::InvalidPagination(_) => ErrorKind::InvalidArgument,
            Self::NotImplemented(_) => ErrorKind::NotImplemented,
            Self::Unavailable(_) => ErrorKind::Unavailable,
            Self::Sql(_) => ErrorKind::Internal,
        }
    }
}
