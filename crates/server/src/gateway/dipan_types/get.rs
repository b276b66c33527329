//! Get Dipan Type Endpoint

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    gateway::{dipan_types::DipanTypeResponse, status::into_status_error},
    rpc::proto::{self, dipan_type_service_server::DipanTypeService},
};

/// Get Dipan Type
#[endpoint(
    tags("dipan-types"),
    summary = "Get Dipan Type",
    responses(
        (status_code = StatusCode::OK, description = "Dipan type found"),
        (status_code = StatusCode::NOT_FOUND, description = "Dipan type not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<DipanTypeResponse>, StatusError> {
    let handlers = depot.handlers_or_500()?;

    let dipan_type = handlers
        .dipan_types
        .get_dipan_type(tonic::Request::new(proto::GetDipanTypeRequest {
            id: id.into_inner(),
        }))
        .await
        .map_err(into_status_error)?
        .into_inner();

    Ok(Json(dipan_type.into()))
}
