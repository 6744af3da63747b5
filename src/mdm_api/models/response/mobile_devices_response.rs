use crate::mdm_api::models::mobile_device::MobileDevice;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct MobileDevicesResponse {
    #[serde(default)]
    pub mobile_devices: Vec<MobileDevice>,
}
