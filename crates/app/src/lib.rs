//! Catalog application domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod errors;
pub mod pagination;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
