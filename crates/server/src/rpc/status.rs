//! Domain error to gRPC status translation.

use std::error::Error;

use tonic::Status;
use tracing::error;

use catalog_app::errors::{Classify, ErrorKind};

/// Translate any domain error into a gRPC status, keyed by its [`ErrorKind`].
///
/// Storage details never reach the client; they are logged instead.
pub(crate) fn into_status<E>(error: E) -> Status
where
    E: Classify + Error,
{
    match error.kind() {
        ErrorKind::NotFound => Status::not_found(error.to_string()),
        ErrorKind::AlreadyExists => Status::already_exists(error.to_string()),
        ErrorKind::InvalidArgument => Status::invalid_argument(describe(&error)),
        ErrorKind::NotImplemented => Status::unimplemented(error.to_string()),
        ErrorKind::Unavailable => {
            error!("storage unavailable: {}", describe(&error));

            Status::unavailable("storage temporarily unavailable")
        }
        ErrorKind::Internal => {
            error!("request failed: {}", describe(&error));

            Status::internal("internal error")
        }
    }
}

/// Render an error together with its source chain.
fn describe(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
