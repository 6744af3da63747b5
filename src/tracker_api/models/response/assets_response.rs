use crate::tracker_api::models::asset::Asset;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct AssetsResponse {
    #[serde(default)]
    pub assets: Vec<Asset>,
    pub total_pages: Option<u32>,
}
