//! Dipan Type Data

use crate::domain::dipan_types::records::DipanTypeId;

/// New Dipan Type Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDipanType {
    pub nama_type: String,
}

/// Dipan Type Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DipanTypeUpdate {
    pub id: DipanTypeId,
    pub nama_type: String,
}
