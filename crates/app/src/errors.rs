//! Error classification shared by every resource.

/// Transport-independent category of a domain failure.
///
/// Handlers translate a kind into a protocol status; they never inspect the
/// concrete error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested record does not exist.
    NotFound,

    /// A record with the same identity already exists.
    AlreadyExists,

    /// The caller supplied input the domain cannot accept.
    InvalidArgument,

    /// The operation is declared but intentionally not implemented.
    NotImplemented,

    /// The store could not be reached; retrying later may succeed.
    Unavailable,

    /// Any other failure.
    Internal,
}

/// Errors that can report their [`ErrorKind`].
pub trait Classify {
    /// The category of this failure.
    fn kind(&self) -> ErrorKind;
}

/// Whether a storage error means the store itself was unreachable.
pub(crate) fn is_unavailable(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}
