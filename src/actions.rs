use crate::records::{
    AssetRecord, CheckinRecord, CheckoutRecord, FixedAsset, JoinedAsset, MemberRecord,
    QuickCheckinFile, RetiredAsset,
};
use crate::tracker_api::tracker_client::{MutationOutcome, TrackerApi};
use anyhow::Result;
use serde_json::{Value, json};
use std::io::Read;
use tracing::{error, info, warn};

/// Linear scan of the member snapshot by email; first match wins.
pub fn resolve_member_id(email: &str, members: &[MemberRecord]) -> Option<i64> {
    members
        .iter()
        .find(|member| member.email.as_deref() == Some(email))
        .map(|member| member.id)
}

/// Reads serial numbers from the first column of a headerless CSV.
pub fn read_serials<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut serials = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(serial) = record.get(0).filter(|s| !s.is_empty()) {
            serials.push(serial.to_string());
        }
    }
    Ok(serials)
}

/// Collapses a mutation result into the value stored in the audit file: the
/// raw response body on any HTTP outcome, an error object on transport
/// failure. The run always continues with the next record.
fn audit_body(result: Result<MutationOutcome>, operation: &str, serial_no: &str) -> Value {
    match result {
        Ok(outcome) => {
            if !outcome.is_success() {
                warn!("{} for {} returned HTTP {}", operation, serial_no, outcome.status);
            }
            outcome.body
        }
        Err(e) => {
            error!("Error during {} for {}: {:?}", operation, serial_no, e);
            json!({ "error": e.to_string() })
        }
    }
}

/// Corrects every wrong-user asset: checkin to clear the current holder,
/// then checkout to the member whose email matches the MDM-side user. The
/// checkout is issued even when the checkin failed.
pub async fn fix_assignments<T>(
    client: &T,
    wrong_user: &[JoinedAsset],
    members: &[MemberRecord],
) -> Vec<FixedAsset>
where
    T: TrackerApi,
{
    let mut fixed = Vec::new();

    for asset in wrong_user {
        let serial_no = asset.asset.serial_no.clone();
        let Some(asset_id) = asset.asset.asset_id else {
            warn!("Asset {} has no tracker id, skipping correction", serial_no);
            fixed.push(FixedAsset {
                serial_no,
                name: asset.asset.name.clone(),
                checkin_response: json!({ "error": "missing asset id" }),
                checkout_response: json!({ "error": "missing asset id" }),
            });
            continue;
        };

        let checkin_response =
            audit_body(client.checkin_asset(asset_id).await, "checkin", &serial_no);

        let mdm_email = asset
            .mdm_user_data
            .as_ref()
            .and_then(|user| user.email.as_deref());
        let checkout_response = match mdm_email.and_then(|email| resolve_member_id(email, members))
        {
            Some(user_id) => audit_body(
                client.checkout_asset(asset_id, user_id).await,
                "checkout",
                &serial_no,
            ),
            None => {
                warn!("No member matches the MDM user for {}", serial_no);
                json!({ "error": "no matching member for MDM user" })
            }
        };

        info!("Corrected assignment for {}", serial_no);
        fixed.push(FixedAsset {
            serial_no,
            name: asset.asset.name.clone(),
            checkin_response,
            checkout_response,
        });
    }

    fixed
}

/// Checks out every available asset to the member matching its candidate
/// email. Assets with no resolvable member are recorded, not mutated.
pub async fn auto_checkout<T>(
    client: &T,
    available: &[AssetRecord],
    members: &[MemberRecord],
) -> Vec<CheckoutRecord>
where
    T: TrackerApi,
{
    let mut all_checkout = Vec::new();

    for asset in available {
        let serial_no = asset.serial_no.clone();
        let target = asset
            .assigned_email
            .as_deref()
            .and_then(|email| resolve_member_id(email, members));

        let checkout = match (asset.asset_id, target) {
            (Some(asset_id), Some(user_id)) => audit_body(
                client.checkout_asset(asset_id, user_id).await,
                "checkout",
                &serial_no,
            ),
            (None, _) => {
                warn!("Asset {} has no tracker id, skipping checkout", serial_no);
                json!({ "error": "missing asset id" })
            }
            (_, None) => {
                warn!("No member matches candidate email for {}", serial_no);
                json!({ "error": "no matching member for candidate email" })
            }
        };

        all_checkout.push(CheckoutRecord { serial_no, checkout });
    }

    all_checkout
}

/// Retires orphaned hardware: assets absent from the MDM whose manufacturer
/// matches the configured filter get a checkin followed by a retire. The
/// retire is issued even when the checkin failed.
pub async fn retire_orphans<T>(
    client: &T,
    not_in_mdm: &[AssetRecord],
    manufacturer: &str,
) -> Vec<RetiredAsset>
where
    T: TrackerApi,
{
    let mut retired = Vec::new();

    for asset in not_in_mdm {
        if asset.manufacturer.as_deref() != Some(manufacturer) {
            info!("Skipping non-{} asset: {}", manufacturer, asset.serial_no);
            continue;
        }
        let serial_no = asset.serial_no.clone();
        let Some(asset_id) = asset.asset_id else {
            warn!("Asset {} has no tracker id, skipping retire", serial_no);
            continue;
        };

        let checkin_response =
            audit_body(client.checkin_asset(asset_id).await, "checkin", &serial_no);
        let retire_response =
            audit_body(client.retire_asset(asset_id).await, "retire", &serial_no);

        info!("Retired asset {}", serial_no);
        retired.push(RetiredAsset {
            serial_no,
            name: asset.name.clone(),
            checkin_response,
            retire_response,
        });
    }

    retired
}

/// Checks in the given serials, looked up in the joined snapshot. Only 2xx
/// responses make it into the audit file.
pub async fn quick_checkin<T>(
    client: &T,
    serials: &[String],
    assets_in_mdm: &[JoinedAsset],
) -> QuickCheckinFile
where
    T: TrackerApi,
{
    let mut checked_in = QuickCheckinFile::default();

    for serial_no in serials {
        let Some(asset) = assets_in_mdm
            .iter()
            .find(|joined| &joined.asset.serial_no == serial_no)
        else {
            warn!("Serial {} not present in joined snapshot", serial_no);
            continue;
        };
        let Some(asset_id) = asset.asset.asset_id else {
            warn!("Asset {} has no tracker id, skipping checkin", serial_no);
            continue;
        };

        match client.checkin_asset(asset_id).await {
            Ok(outcome) if outcome.is_success() => {
                info!("Checked in asset {}", serial_no);
                checked_in.all.push(CheckinRecord {
                    serial_no: serial_no.clone(),
                    name: asset.asset.name.clone(),
                    checkin_response: outcome.body,
                });
            }
            Ok(outcome) => {
                warn!("checkin for {} returned HTTP {}", serial_no, outcome.status);
            }
            Err(e) => {
                error!("Error during checkin for {}: {:?}", serial_no, e);
            }
        }
    }

    checked_in
}
