//! Product Gateway Routes

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::rpc::proto;

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;

/// Product as rendered by the gateway.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Product id (UUID)
    pub id: String,

    pub name: String,

    pub description: String,

    pub price: f64,

    pub stock: i32,

    /// RFC 3339 creation time
    pub created_at: String,

    /// RFC 3339 last update time
    pub updated_at: String,
}

impl From<proto::Product> for ProductResponse {
    fn from(product: proto::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Mount the product routes on `router`.
#[must_use]
pub(crate) fn register(router: Router) -> Router {
    router.push(
        Router::with_path("products")
            .get(index::handler)
            .post(create::handler)
            .push(Router::with_path("{id}").get(get::handler)),
    )
}
