use serde::{Deserialize, Serialize};

/// Mobile device row from the MDM's legacy listing endpoint.
#[derive(Serialize, Deserialize, Clone)]
pub struct MobileDevice {
    pub id: i64,
    pub name: Option<String>,
    pub serial_number: Option<String>,
}
