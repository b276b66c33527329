//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::{rpc::Handlers, state::State};

pub(crate) trait DepotExt {
    /// The gRPC handlers injected with the gateway [`State`].
    fn handlers_or_500(&self) -> Result<&Handlers, StatusError>;
}

impl DepotExt for Depot {
    fn handlers_or_500(&self) -> Result<&Handlers, StatusError> {
        self.obtain::<Arc<State>>()
            .map(|state| &state.handlers)
            .map_err(|_ignored| {
                error!("gateway state missing from depot");

                StatusError::internal_server_error()
            })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_state_is_500() {
        let depot = Depot::new();

        let error = depot.handlers_or_500().err();

        assert_eq!(
            error.map(|error| error.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
