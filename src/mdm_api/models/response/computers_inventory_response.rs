use crate::mdm_api::models::computer_inventory::ComputerInventory;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct ComputersInventoryResponse {
    #[serde(rename = "totalCount")]
    pub total_count: i64,
    #[serde(default)]
    pub results: Vec<ComputerInventory>,
}
