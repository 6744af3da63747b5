use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized tracker asset as persisted by the fetch steps. `serial_no` is
/// the join key between the two systems.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AssetRecord {
    pub asset_id: Option<i64>,
    pub serial_no: String,
    pub name: String,
    pub assigned_email: Option<String>,
    pub manufacturer: Option<String>,
}

/// Normalized tracker member.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MemberRecord {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Normalized MDM device (computer or mobile device). Computer ids arrive as
/// strings from the inventory API; mobile-device ids are stringified so both
/// lists share one shape.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MdmDeviceRecord {
    pub id: String,
    pub serial_no: String,
    pub name: Option<String>,
}

/// Normalized MDM user-and-location record, keyed by device id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MdmUserRecord {
    pub id: String,
    pub username: Option<String>,
    pub real_name: Option<String>,
    pub email: Option<String>,
}

/// Tracker asset enriched with its MDM match. Serializes flat so the MDM
/// fields sit beside the tracker fields in the snapshot.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JoinedAsset {
    #[serde(flatten)]
    pub asset: AssetRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mdm_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mdm_user_data: Option<MdmUserData>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MdmUserData {
    pub username: Option<String>,
    pub real_name: Option<String>,
    pub email: Option<String>,
}

/// Output of the join step (`assets.json`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JoinedInventory {
    pub assets_in_mdm: Vec<JoinedAsset>,
    pub not_in_mdm: Vec<AssetRecord>,
    pub total_in_mdm: usize,
    pub total_not_in_mdm: usize,
    pub total_all: usize,
}

impl JoinedInventory {
    pub fn new(assets_in_mdm: Vec<JoinedAsset>, not_in_mdm: Vec<AssetRecord>) -> Self {
        let total_in_mdm = assets_in_mdm.len();
        let total_not_in_mdm = not_in_mdm.len();
        Self {
            assets_in_mdm,
            not_in_mdm,
            total_in_mdm,
            total_not_in_mdm,
            total_all: total_in_mdm + total_not_in_mdm,
        }
    }
}

/// Output of the classification step (`assets_assigned.json`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssignmentBuckets {
    pub correct_user: Vec<JoinedAsset>,
    pub wrong_user: Vec<JoinedAsset>,
    pub unassigned: Vec<JoinedAsset>,
    pub total_correct: usize,
    pub total_wrong: usize,
    pub total_unassigned: usize,
    pub total_all: usize,
}

impl AssignmentBuckets {
    pub fn new(
        correct_user: Vec<JoinedAsset>,
        wrong_user: Vec<JoinedAsset>,
        unassigned: Vec<JoinedAsset>,
    ) -> Self {
        let total_correct = correct_user.len();
        let total_wrong = wrong_user.len();
        let total_unassigned = unassigned.len();
        Self {
            correct_user,
            wrong_user,
            unassigned,
            total_correct,
            total_wrong,
            total_unassigned,
            total_all: total_correct + total_wrong + total_unassigned,
        }
    }
}

/// Audit entry for a checkin+checkout correction (`assets_fixed.json`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FixedAsset {
    pub serial_no: String,
    pub name: String,
    pub checkin_response: Value,
    pub checkout_response: Value,
}

/// Audit entry for an automatic checkout (`assets_autocheckout.json`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckoutRecord {
    pub serial_no: String,
    pub checkout: Value,
}

/// Audit entry for a checkin+retire (`assets_retired.json`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RetiredAsset {
    pub serial_no: String,
    pub name: String,
    pub checkin_response: Value,
    pub retire_response: Value,
}

/// Audit file for quick checkins (`assets_quick_checkin.json`).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct QuickCheckinFile {
    pub all: Vec<CheckinRecord>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckinRecord {
    pub serial_no: String,
    pub name: String,
    pub checkin_response: Value,
}
