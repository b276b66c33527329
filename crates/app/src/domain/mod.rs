//! Catalog Domain Concerns

pub mod dipan_types;
pub mod products;
