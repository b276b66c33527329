//! gRPC handlers and the service registrar.
//!
//! The same [`Handlers`] value backs both the native gRPC server and the
//! JSON gateway, so each operation has exactly one implementation.

use std::sync::Arc;

use tonic::transport::{Server, server::Router};

use catalog_app::{
    context::AppContext,
    domain::{dipan_types::DipanTypesService, products::ProductsService},
};

pub(crate) mod dipan_types;
pub(crate) mod products;
pub(crate) mod status;

pub(crate) use dipan_types::DipanTypeHandler;
pub(crate) use products::ProductHandler;

/// Generated protobuf types and service traits.
pub mod proto {
    tonic::include_proto!("catalog.v1");
}

use proto::{
    dipan_type_service_server::DipanTypeServiceServer,
    product_service_server::ProductServiceServer,
};

/// One handler per resource.
#[derive(Clone)]
pub(crate) struct Handlers {
    pub(crate) products: ProductHandler,
    pub(crate) dipan_types: DipanTypeHandler,
}

impl Handlers {
    #[must_use]
    pub(crate) fn new(
        products: Arc<dyn ProductsService>,
        dipan_types: Arc<dyn DipanTypesService>,
    ) -> Self {
        Self {
            products: ProductHandler::new(products),
            dipan_types: DipanTypeHandler::new(dipan_types),
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: &AppContext) -> Self {
        Self::new(Arc::clone(&app.products), Arc::clone(&app.dipan_types))
    }

    /// Attach every resource service to the gRPC server.
    ///
    /// All services are added here, before the router starts serving.
    pub(crate) fn register(self, server: &mut Server) -> Router {
        server
            .add_service(ProductServiceServer::new(self.products))
            .add_service(DipanTypeServiceServer::new(self.dipan_types))
    }
}
