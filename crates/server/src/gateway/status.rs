//! gRPC status to HTTP status translation.

use salvo::http::{StatusCode, StatusError};
use tonic::{Code, Status};

/// Translate a gRPC status into the HTTP error grpc-gateway would return.
///
/// The status message becomes the error brief.
pub(crate) fn into_status_error(status: Status) -> StatusError {
    let error = match status.code() {
        Code::Cancelled => client_closed_request(),
        Code::InvalidArgument | Code::FailedPrecondition | Code::OutOfRange => {
            StatusError::bad_request()
        }
        Code::DeadlineExceeded => StatusError::gateway_timeout(),
        Code::NotFound => StatusError::not_found(),
        Code::AlreadyExists | Code::Aborted => StatusError::conflict(),
        Code::PermissionDenied => StatusError::forbidden(),
        Code::Unauthenticated => StatusError::unauthorized(),
        Code::ResourceExhausted => StatusError::too_many_requests(),
        Code::Unimplemented => StatusError::not_implemented(),
        Code::Unavailable => StatusError::service_unavailable(),
        Code::Ok | Code::Unknown | Code::Internal | Code::DataLoss => {
            StatusError::internal_server_error()
        }
    };

    error.brief(status.message())
}

/// grpc-gateway answers a cancelled call with nginx's non-standard 499.
fn client_closed_request() -> StatusError {
    let mut error = StatusError::request_timeout();

    if let Ok(code) = StatusCode::from_u16(499) {
        error.code = code;
        error.name = "Client Closed Request".to_owned();
    }

    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_grpc_gateway_table() {
        let cases = [
            (Code::NotFound, StatusCode::NOT_FOUND),
            (Code::InvalidArgument, StatusCode::BAD_REQUEST),
            (Code::AlreadyExists, StatusCode::CONFLICT),
            (Code::Unimplemented, StatusCode::NOT_IMPLEMENTED),
            (Code::Unavailable, StatusCode::SERVICE_UNAVAILABLE),
            (Code::DeadlineExceeded, StatusCode::GATEWAY_TIMEOUT),
            (Code::Internal, StatusCode::INTERNAL_SERVER_ERROR),
            (Code::Unknown, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (code, expected) in cases {
            let error = into_status_error(Status::new(code, "message"));

            assert_eq!(error.code, expected, "unexpected HTTP status for {code:?}");
        }
    }

    #[test]
    fn cancelled_is_client_closed_request() {
        let error = into_status_error(Status::cancelled("client went away"));

        assert_eq!(error.code.as_u16(), 499);
        assert_eq!(error.brief, "client went away");
    }

    #[test]
    fn keeps_the_status_message() {
        let error = into_status_error(Status::not_found("product not found"));

        assert_eq!(error.brief, "product not found");
    }
}
