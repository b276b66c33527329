//! Products Data

use jiff::Timestamp;

use crate::domain::products::records::ProductId;

/// Caller-supplied fields of a product to create.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
}

/// A product with its identifier and timestamps stamped, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewProduct {
    /// Stamp a product with a fresh identifier and `now` as both timestamps.
    #[must_use]
    pub fn stamp(product: CreateProduct, now: Timestamp) -> Self {
        Self {
            id: ProductId::new(),
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: now,
            updated_at: now,
        }
    }
}
