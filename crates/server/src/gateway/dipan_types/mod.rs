//! Dipan Type Gateway Routes

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::rpc::proto;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

/// Dipan type as rendered by the gateway.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DipanTypeResponse {
    pub id: i32,

    pub nama_type: String,
}

impl From<proto::DipanType> for DipanTypeResponse {
    fn from(dipan_type: proto::DipanType) -> Self {
        Self {
            id: dipan_type.id,
            nama_type: dipan_type.nama_type,
        }
    }
}

/// Body shared by create and update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DipanTypeBody {
    #[serde(default, alias = "nama_type")]
    pub nama_type: String,
}

/// Mount the dipan type routes on `router`.
#[must_use]
pub(crate) fn register(router: Router) -> Router {
    router.push(
        Router::with_path("dipan-types")
            .get(index::handler)
            .post(create::handler)
            .push(
                Router::with_path("{id}")
                    .get(get::handler)
                    .put(update::handler)
                    .delete(delete::handler),
            ),
    )
}
