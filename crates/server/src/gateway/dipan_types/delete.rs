//! Delete Dipan Type Endpoint

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    gateway::status::into_status_error,
    rpc::proto::{self, dipan_type_service_server::DipanTypeService},
};

/// Empty body returned on a successful delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeletedResponse {}

/// Delete Dipan Type
///
/// Not supported yet; always answers 501.
#[endpoint(
    tags("dipan-types"),
    summary = "Delete Dipan Type",
    responses(
        (status_code = StatusCode::NOT_IMPLEMENTED, description = "Not implemented"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<DeletedResponse>, StatusError> {
    let handlers = depot.handlers_or_500()?;

    handlers
        .dipan_types
        .delete_dipan_type(tonic::Request::new(proto::DeleteDipanTypeRequest {
            id: id.into_inner(),
        }))
        .await
        .map_err(into_status_error)?;

    Ok(Json(DeletedResponse {}))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use catalog_app::domain::dipan_types::{DipanTypesServiceError, MockDipanTypesService};

    use crate::test_helpers::dipan_types_gateway;

    use super::*;

    #[tokio::test]
    async fn delete_returns_501() {
        let mut dipan_types = MockDipanTypesService::new();

        dipan_types
            .expect_delete_dipan_type()
            .once()
            .withf(|id| *id == 5)
            .return_once(|_| Err(DipanTypesServiceError::NotImplemented("delete dipan type")));

        let res = TestClient::delete("http://example.com/v1/dipan-types/5")
            .send(&dipan_types_gateway(dipan_types))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_IMPLEMENTED));
    }
}
