use serde::{Deserialize, Serialize};

/// Computer inventory row. The MDM returns sections on demand, so every
/// section is optional; a hardware fetch carries no user data and vice versa.
#[derive(Serialize, Deserialize, Clone)]
pub struct ComputerInventory {
    pub id: String,
    pub general: Option<General>,
    pub hardware: Option<Hardware>,
    #[serde(rename = "userAndLocation")]
    pub user_and_location: Option<UserAndLocation>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct General {
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Hardware {
    #[serde(rename = "serialNumber")]
    pub serial_number: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UserAndLocation {
    pub username: Option<String>,
    pub realname: Option<String>,
    pub email: Option<String>,
}
