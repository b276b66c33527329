//! Update Dipan Type Endpoint

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    extensions::*,
    gateway::{
        dipan_types::{DipanTypeBody, DipanTypeResponse},
        status::into_status_error,
    },
    rpc::proto::{self, dipan_type_service_server::DipanTypeService},
};

/// Update Dipan Type
///
/// Not supported yet; always answers 501.
#[endpoint(
    tags("dipan-types"),
    summary = "Update Dipan Type",
    responses(
        (status_code = StatusCode::NOT_IMPLEMENTED, description = "Not implemented"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    json: JsonBody<DipanTypeBody>,
    depot: &mut Depot,
) -> Result<Json<DipanTypeResponse>, StatusError> {
    let handlers = depot.handlers_or_500()?;

    let dipan_type = handlers
        .dipan_types
        .update_dipan_type(tonic::Request::new(proto::UpdateDipanTypeRequest {
            id: id.into_inner(),
            nama_type: json.into_inner().nama_type,
        }))
        .await
        .map_err(into_status_error)?
        .into_inner();

    Ok(Json(dipan_type.into()))
}
