use crate::records::{AssignmentBuckets, JoinedAsset};
use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One report line. Field order is the published column order.
#[derive(Debug, Serialize)]
struct ReportRow {
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "Serial Number")]
    serial_no: String,
    #[serde(rename = "Device Name")]
    name: String,
    #[serde(rename = "Tracker Email")]
    tracker_email: String,
    #[serde(rename = "MDM Email")]
    mdm_email: String,
}

fn row(status: &'static str, asset: &JoinedAsset) -> ReportRow {
    let mdm_email = match &asset.mdm_user_data {
        None => "N/A".to_string(),
        Some(user) => user.email.clone().unwrap_or_default(),
    };
    ReportRow {
        status,
        serial_no: asset.asset.serial_no.clone(),
        name: asset.asset.name.clone(),
        tracker_email: asset.asset.assigned_email.clone().unwrap_or_default(),
        mdm_email,
    }
}

/// Renders the classification buckets as CSV, one row per joined asset.
pub fn write_report<W: Write>(buckets: &AssignmentBuckets, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for asset in &buckets.correct_user {
        wtr.serialize(row("Good", asset))?;
    }
    for asset in &buckets.wrong_user {
        wtr.serialize(row("Wrong User", asset))?;
    }
    for asset in &buckets.unassigned {
        wtr.serialize(row("Unassigned", asset))?;
    }

    wtr.flush().context("Failed to flush CSV report")?;
    Ok(())
}

/// Timestamped path under the report directory.
pub fn report_path(report_dir: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    Path::new(report_dir).join(format!("{}.csv", timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{AssetRecord, MdmUserData};

    fn joined(serial: &str, assigned: Option<&str>, mdm: Option<Option<&str>>) -> JoinedAsset {
        JoinedAsset {
            asset: AssetRecord {
                asset_id: Some(1),
                serial_no: serial.to_string(),
                name: format!("device-{}", serial),
                assigned_email: assigned.map(str::to_string),
                manufacturer: None,
            },
            mdm_id: Some("10".to_string()),
            mdm_user_data: mdm.map(|email| MdmUserData {
                username: None,
                real_name: None,
                email: email.map(str::to_string),
            }),
        }
    }

    #[test]
    fn header_and_column_order_are_fixed() {
        let buckets = AssignmentBuckets::new(
            vec![joined("SN1", Some("a@example.com"), Some(Some("a@example.com")))],
            vec![],
            vec![],
        );

        let mut output = Vec::new();
        write_report(&buckets, &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();

        let mut lines = csv_string.lines();
        assert_eq!(
            lines.next(),
            Some("Status,Serial Number,Device Name,Tracker Email,MDM Email")
        );
        assert_eq!(
            lines.next(),
            Some("Good,SN1,device-SN1,a@example.com,a@example.com")
        );
    }

    #[test]
    fn buckets_render_in_order_with_fallback_emails() {
        let buckets = AssignmentBuckets::new(
            vec![joined("SN1", Some("a@example.com"), Some(Some("a@example.com")))],
            vec![joined("SN2", Some("a@example.com"), Some(Some("b@example.com")))],
            vec![
                joined("SN3", Some("c@example.com"), Some(None)),
                joined("SN4", None, None),
            ],
        );

        let mut output = Vec::new();
        write_report(&buckets, &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<_> = csv_string.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("Good,SN1"));
        assert!(lines[2].starts_with("Wrong User,SN2"));
        // Null MDM email renders empty; missing MDM user renders N/A.
        assert_eq!(lines[3], "Unassigned,SN3,device-SN3,c@example.com,");
        assert_eq!(lines[4], "Unassigned,SN4,device-SN4,,N/A");
    }
}
