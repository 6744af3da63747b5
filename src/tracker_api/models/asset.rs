use serde::{Deserialize, Serialize};

/// Asset row as returned by the tracker's filter endpoint. Only the fields
/// the audit projects are modeled; the vendor sends many more.
#[derive(Serialize, Deserialize, Clone)]
pub struct Asset {
    pub sequence_num: Option<i64>,
    pub bios_serial_number: Option<String>,
    pub name: Option<String>,
    pub assigned_to_user_email: Option<String>,
    pub candidate_email: Option<String>,
    pub manufacturer: Option<String>,
}
