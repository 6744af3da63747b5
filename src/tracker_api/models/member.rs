use serde::{Deserialize, Serialize};

/// Member row as returned by the tracker's members endpoint.
#[derive(Serialize, Deserialize, Clone)]
pub struct Member {
    pub id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub role_name: Option<String>,
}
