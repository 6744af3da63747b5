use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FilesConfig;

// Snapshot file names double as the contract between pipeline steps.
pub const TRACKER_ASSETS_CHECKED_OUT: &str = "tracker_assets_checked_out.json";
pub const TRACKER_ASSETS_AVAILABLE: &str = "tracker_assets_available.json";
pub const TRACKER_MEMBERS: &str = "tracker_members.json";
pub const MDM_COMPUTERS: &str = "mdm_computers.json";
pub const MDM_USERS: &str = "mdm_users.json";
pub const MDM_MOBILE_DEVICES: &str = "mdm_mobile_devices.json";
pub const JOINED_ASSETS: &str = "assets.json";
pub const ASSIGNED_ASSETS: &str = "assets_assigned.json";
pub const FIXED_ASSETS: &str = "assets_fixed.json";
pub const AUTOCHECKOUT_ASSETS: &str = "assets_autocheckout.json";
pub const RETIRED_ASSETS: &str = "assets_retired.json";
pub const QUICK_CHECKIN_ASSETS: &str = "assets_quick_checkin.json";

pub fn data_path(files: &FilesConfig, name: &str) -> PathBuf {
    Path::new(&files.data_dir).join(name)
}

pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Unable to read snapshot {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Unable to deserialize snapshot {}", path.display()))
}

pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)
        .with_context(|| format!("Unable to write snapshot {}", path.display()))
}
