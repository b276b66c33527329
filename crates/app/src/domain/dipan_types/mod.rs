//! Dipan Types

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::DipanTypesServiceError;
pub use repository::{DipanTypesRepository, MockDipanTypesRepository, PgDipanTypesRepository};
pub use service::*;
