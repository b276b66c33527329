//! Dipan Type gRPC Handler

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::instrument;

use catalog_app::domain::dipan_types::{
    DipanTypesService,
    data::{DipanTypeUpdate, NewDipanType},
    records::DipanTypeRecord,
};

use crate::rpc::{
    proto::{self, dipan_type_service_server::DipanTypeService},
    status::into_status,
};

impl From<DipanTypeRecord> for proto::DipanType {
    fn from(dipan_type: DipanTypeRecord) -> Self {
        Self {
            id: dipan_type.id,
            nama_type: dipan_type.nama_type,
        }
    }
}

/// Serves `catalog.v1.DipanTypeService` over the dipan types use-case.
#[derive(Clone)]
pub(crate) struct DipanTypeHandler {
    dipan_types: Arc<dyn DipanTypesService>,
}

impl DipanTypeHandler {
    #[must_use]
    pub(crate) fn new(dipan_types: Arc<dyn DipanTypesService>) -> Self {
        Self { dipan_types }
    }
}

#[tonic::async_trait]
impl DipanTypeService for DipanTypeHandler {
    #[instrument(name = "rpc.create_dipan_type", skip_all)]
    async fn create_dipan_type(
        &self,
        request: Request<proto::CreateDipanTypeRequest>,
    ) -> Result<Response<proto::DipanType>, Status> {
        let proto::CreateDipanTypeRequest { nama_type } = request.into_inner();

        let dipan_type = self
            .dipan_types
            .create_dipan_type(NewDipanType { nama_type })
            .await
            .map_err(into_status)?;

        Ok(Response::new(dipan_type.into()))
    }

    #[instrument(name = "rpc.get_dipan_type", skip_all)]
    async fn get_dipan_type(
        &self,
        request: Request<proto::GetDipanTypeRequest>,
    ) -> Result<Response<proto::DipanType>, Status> {
        let dipan_type = self
            .dipan_types
            .get_dipan_type(request.into_inner().id)
            .await
            .map_err(into_status)?;

        Ok(Response::new(dipan_type.into()))
    }

    #[instrument(name = "rpc.list_dipan_types", skip_all)]
    async fn list_dipan_types(
        &self,
        request: Request<proto::ListDipanTypesRequest>,
    ) -> Result<Response<proto::ListDipanTypesResponse>, Status> {
        let proto::ListDipanTypesRequest { page, limit } = request.into_inner();

        let page = self
            .dipan_types
            .list_dipan_types(page, limit)
            .await
            .map_err(into_status)?;

        Ok(Response::new(proto::ListDipanTypesResponse {
            total: page.total,
            dipan_types: page.items.into_iter().map(Into::into).collect(),
        }))
    }

    #[instrument(name = "rpc.update_dipan_type", skip_all)]
    async fn update_dipan_type(
        &self,
        request: Request<proto::UpdateDipanTypeRequest>,
    ) -> Result<Response<proto::DipanType>, Status> {
        let proto::UpdateDipanTypeRequest { id, nama_type } = request.into_inner();

        let dipan_type = self
            .dipan_types
            .update_dipan_type(DipanTypeUpdate { id, nama_type })
            .await
            .map_err(into_status)?;

        Ok(Response::new(dipan_type.into()))
    }

    #[instrument(name = "rpc.delete_dipan_type", skip_all)]
    async fn delete_dipan_type(
        &self,
        request: Request<proto::DeleteDipanTypeRequest>,
    ) -> Result<Response<proto::DeleteDipanTypeResponse>, Status> {
        self.dipan_types
            .delete_dipan_type(request.into_inner().id)
            .await
            .map_err(into_status)?;

        Ok(Response::new(proto::DeleteDipanTypeResponse {}))
    }
}
