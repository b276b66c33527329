//! State

use std::sync::Arc;

use crate::rpc::Handlers;

/// Shared by every gateway endpoint through the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) handlers: Handlers,
}

impl State {
    #[must_use]
    pub(crate) fn new(handlers: Handlers) -> Self {
        Self { handlers }
    }

    #[must_use]
    pub(crate) fn from_handlers(handlers: Handlers) -> Arc<Self> {
        Arc::new(Self::new(handlers))
    }
}
