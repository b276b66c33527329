//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;

use catalog_app::domain::{
    dipan_types::MockDipanTypesService,
    products::{
        MockProductsService,
        records::{ProductId, ProductRecord},
    },
};

use crate::{gateway, rpc::Handlers, state::State};

pub(crate) fn make_product(id: ProductId) -> ProductRecord {
    ProductRecord {
        id,
        name: "Chair".to_string(),
        description: "Oak dining chair".to_string(),
        price: 49.99,
        stock: 10,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_create_product().never();
    products.expect_get_product().never();
    products.expect_list_products().never();

    products
}

fn strict_dipan_types_mock() -> MockDipanTypesService {
    let mut dipan_types = MockDipanTypesService::new();

    dipan_types.expect_create_dipan_type().never();
    dipan_types.expect_get_dipan_type().never();
    dipan_types.expect_list_dipan_types().never();
    dipan_types.expect_update_dipan_type().never();
    dipan_types.expect_delete_dipan_type().never();

    dipan_types
}

fn build_gateway(products: MockProductsService, dipan_types: MockDipanTypesService) -> Service {
    let handlers = Handlers::new(Arc::new(products), Arc::new(dipan_types));

    gateway::service(State::from_handlers(handlers))
}

/// The full gateway service with `products` behind the product handler.
pub(crate) fn products_gateway(products: MockProductsService) -> Service {
    build_gateway(products, strict_dipan_types_mock())
}

/// The full gateway service with `dipan_types` behind the dipan type handler.
pub(crate) fn dipan_types_gateway(dipan_types: MockDipanTypesService) -> Service {
    build_gateway(strict_products_mock(), dipan_types)
}

/// A gateway whose use-cases must never be reached.
pub(crate) fn idle_gateway() -> Service {
    build_gateway(strict_products_mock(), strict_dipan_types_mock())
}
