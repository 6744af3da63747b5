pub mod models;
pub mod tracker_client;

use crate::records::{AssetRecord, MemberRecord};
use crate::tracker_api::models::asset::Asset;
use crate::tracker_api::models::member::Member;
use crate::tracker_api::tracker_client::TrackerApi;
use tracing::debug;

/// Tracker-side asset status filter. Decides both the query sent to the
/// filter endpoint and which email field is projected: checked-out assets
/// carry the current holder, available assets carry the intended candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AssetStatus {
    CheckedOut,
    Available,
}

impl AssetStatus {
    pub fn as_query(&self) -> &'static str {
        match self {
            AssetStatus::CheckedOut => "checked_out",
            AssetStatus::Available => "available",
        }
    }

    pub fn snapshot_name(&self) -> &'static str {
        match self {
            AssetStatus::CheckedOut => crate::snapshots::TRACKER_ASSETS_CHECKED_OUT,
            AssetStatus::Available => crate::snapshots::TRACKER_ASSETS_AVAILABLE,
        }
    }
}

fn project_asset(asset: Asset, status: AssetStatus) -> Option<AssetRecord> {
    // Serial number is the join key; rows without one are useless downstream.
    let serial_no = asset.bios_serial_number.filter(|s| !s.is_empty())?;
    let assigned_email = match status {
        AssetStatus::CheckedOut => asset.assigned_to_user_email,
        AssetStatus::Available => asset.candidate_email,
    };
    Some(AssetRecord {
        asset_id: asset.sequence_num,
        serial_no,
        name: asset.name.unwrap_or_else(|| "Unknown Device".to_string()),
        assigned_email,
        manufacturer: asset.manufacturer,
    })
}

fn project_member(member: Member) -> MemberRecord {
    MemberRecord {
        id: member.id,
        name: member.full_name,
        email: member.email,
        role: member.role_name,
    }
}

/// Pages through the asset filter endpoint, accumulating normalized records.
/// Stops at the server-reported total page count or on an empty page,
/// whichever comes first. Any page error aborts the whole fetch.
pub async fn fetch_assets<T>(client: &T, status: AssetStatus) -> anyhow::Result<Vec<AssetRecord>>
where
    T: TrackerApi,
{
    let mut records = Vec::new();
    let mut page = 1u32;
    let mut total_pages = 1u32;

    while page <= total_pages {
        debug!("Fetching assets page {}", page);
        let response = client.get_assets_page(status, page).await?;

        if response.assets.is_empty() {
            debug!("No more assets on page {}", page);
            break;
        }
        for asset in response.assets {
            if let Some(record) = project_asset(asset, status) {
                records.push(record);
            }
        }

        total_pages = response.total_pages.unwrap_or(page);
        page += 1;
    }

    Ok(records)
}

/// Pages through the members endpoint; same pagination contract as
/// [`fetch_assets`].
pub async fn fetch_members<T>(client: &T) -> anyhow::Result<Vec<MemberRecord>>
where
    T: TrackerApi,
{
    let mut records = Vec::new();
    let mut page = 1u32;
    let mut total_pages = 1u32;

    while page <= total_pages {
        debug!("Fetching members page {}", page);
        let response = client.get_members_page(page).await?;

        if response.members.is_empty() {
            debug!("No more members on page {}", page);
            break;
        }
        records.extend(response.members.into_iter().map(project_member));

        total_pages = response.total_pages.unwrap_or(page);
        page += 1;
    }

    Ok(records)
}
