//! Dipan Type Records

/// Dipan type identifier, assigned by the database on insert.
pub type DipanTypeId = i32;

/// Dipan Type Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DipanTypeRecord {
    pub id: DipanTypeId,
    pub nama_type: String,
}
