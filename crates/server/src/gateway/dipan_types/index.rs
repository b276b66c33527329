//! Dipan Type Index Endpoint

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    gateway::{dipan_types::DipanTypeResponse, status::into_status_error},
    rpc::proto::{self, dipan_type_service_server::DipanTypeService},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DipanTypesResponse {
    /// One page of dipan types, highest id first
    pub dipan_types: Vec<DipanTypeResponse>,

    /// Number of dipan types across all pages
    pub total: i64,
}

/// List Dipan Types
#[endpoint(tags("dipan-types"), summary = "List Dipan Types")]
pub(crate) async fn handler(
    page: QueryParam<i32, false>,
    limit: QueryParam<i32, false>,
    depot: &mut Depot,
) -> Result<Json<DipanTypesResponse>, StatusError> {
    let handlers = depot.handlers_or_500()?;

    let response = handlers
        .dipan_types
        .list_dipan_types(tonic::Request::new(proto::ListDipanTypesRequest {
            page: page.into_inner().unwrap_or_default(),
            limit: limit.into_inner().unwrap_or_default(),
        }))
        .await
        .map_err(into_status_error)?
        .into_inner();

    Ok(Json(DipanTypesResponse {
        dipan_types: response.dipan_types.into_iter().map(Into::into).collect(),
        total: response.total,
    }))
}
