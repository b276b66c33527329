//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product identifier
pub type ProductId = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
