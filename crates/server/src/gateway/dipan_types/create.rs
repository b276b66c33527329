//! Create Dipan Type Endpoint

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    gateway::{
        dipan_types::{DipanTypeBody, DipanTypeResponse},
        status::into_status_error,
    },
    rpc::proto::{self, dipan_type_service_server::DipanTypeService},
};

/// Create Dipan Type
#[endpoint(
    tags("dipan-types"),
    summary = "Create Dipan Type",
    responses(
        (status_code = StatusCode::CREATED, description = "Dipan type created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<DipanTypeBody>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DipanTypeResponse>, StatusError> {
    let handlers = depot.handlers_or_500()?;

    let dipan_type = handlers
        .dipan_types
        .create_dipan_type(tonic::Request::new(proto::CreateDipanTypeRequest {
            nama_type: json.into_inner().nama_type,
        }))
        .await
        .map_err(into_status_error)?
        .into_inner();

    res.add_header(
        LOCATION,
        format!("/v1/dipan-types/{}", dipan_type.id),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(dipan_type.into()))
}
