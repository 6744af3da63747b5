use crate::records::{
    AssetRecord, JoinedAsset, JoinedInventory, MdmDeviceRecord, MdmUserData, MdmUserRecord,
};
use tracing::debug;

/// Linear scan by serial number; first match wins. Serials are assumed
/// unique across both systems, so duplicates silently resolve to the first
/// occurrence.
pub fn find_device<'a>(
    serial_no: &str,
    devices: &'a [MdmDeviceRecord],
) -> Option<&'a MdmDeviceRecord> {
    devices.iter().find(|d| d.serial_no == serial_no)
}

pub fn find_user<'a>(device_id: &str, users: &'a [MdmUserRecord]) -> Option<&'a MdmUserRecord> {
    users.iter().find(|u| u.id == device_id)
}

/// Partitions tracker assets by presence in the MDM, checking computers
/// before mobile devices. Matched assets carry the MDM device id and, when
/// one exists for that id, the MDM user record.
pub fn join_by_serial(
    assets: Vec<AssetRecord>,
    computers: &[MdmDeviceRecord],
    mobile_devices: &[MdmDeviceRecord],
    users: &[MdmUserRecord],
) -> JoinedInventory {
    let mut assets_in_mdm = Vec::new();
    let mut not_in_mdm = Vec::new();

    for asset in assets {
        let device = find_device(&asset.serial_no, computers)
            .or_else(|| find_device(&asset.serial_no, mobile_devices));

        match device {
            Some(device) => {
                let mdm_user_data = find_user(&device.id, users).map(|user| MdmUserData {
                    username: user.username.clone(),
                    real_name: user.real_name.clone(),
                    email: user.email.clone(),
                });
                assets_in_mdm.push(JoinedAsset {
                    asset,
                    mdm_id: Some(device.id.clone()),
                    mdm_user_data,
                });
            }
            None => {
                debug!("Asset {} not found in MDM", asset.serial_no);
                not_in_mdm.push(asset);
            }
        }
    }

    JoinedInventory::new(assets_in_mdm, not_in_mdm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(serial: &str, email: Option<&str>) -> AssetRecord {
        AssetRecord {
            asset_id: Some(1),
            serial_no: serial.to_string(),
            name: format!("device-{}", serial),
            assigned_email: email.map(str::to_string),
            manufacturer: Some("Apple".to_string()),
        }
    }

    fn device(id: &str, serial: &str) -> MdmDeviceRecord {
        MdmDeviceRecord {
            id: id.to_string(),
            serial_no: serial.to_string(),
            name: None,
        }
    }

    fn user(id: &str, email: Option<&str>) -> MdmUserRecord {
        MdmUserRecord {
            id: id.to_string(),
            username: Some("someone".to_string()),
            real_name: None,
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn partitions_without_overlap_or_omission() {
        let assets = vec![
            asset("SN1", Some("a@example.com")),
            asset("SN2", Some("b@example.com")),
            asset("SN3", Some("c@example.com")),
        ];
        let computers = vec![device("10", "SN1")];
        let mobile = vec![device("20", "SN2")];

        let joined = join_by_serial(assets, &computers, &mobile, &[]);

        assert_eq!(joined.total_in_mdm, 2);
        assert_eq!(joined.total_not_in_mdm, 1);
        assert_eq!(joined.total_all, 3);
        let matched: Vec<_> = joined
            .assets_in_mdm
            .iter()
            .map(|j| j.asset.serial_no.as_str())
            .collect();
        assert_eq!(matched, ["SN1", "SN2"]);
        assert_eq!(joined.not_in_mdm[0].serial_no, "SN3");
    }

    #[test]
    fn computers_take_precedence_over_mobile_devices() {
        let assets = vec![asset("SN1", None)];
        let computers = vec![device("10", "SN1")];
        let mobile = vec![device("20", "SN1")];

        let joined = join_by_serial(assets, &computers, &mobile, &[]);
        assert_eq!(joined.assets_in_mdm[0].mdm_id.as_deref(), Some("10"));
    }

    #[test]
    fn duplicate_serials_resolve_to_first_match() {
        let assets = vec![asset("SN1", None)];
        let computers = vec![device("10", "SN1"), device("11", "SN1")];

        let joined = join_by_serial(assets, &computers, &[], &[]);
        assert_eq!(joined.assets_in_mdm[0].mdm_id.as_deref(), Some("10"));
    }

    #[test]
    fn attaches_user_record_by_device_id() {
        let assets = vec![asset("SN1", Some("a@example.com"))];
        let computers = vec![device("10", "SN1")];
        let users = vec![user("99", Some("other@example.com")), user("10", Some("a@example.com"))];

        let joined = join_by_serial(assets, &computers, &[], &users);
        let user_data = joined.assets_in_mdm[0].mdm_user_data.as_ref().unwrap();
        assert_eq!(user_data.email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn mobile_match_without_user_record_stays_userless() {
        let assets = vec![asset("SN2", Some("b@example.com"))];
        let mobile = vec![device("20", "SN2")];
        let users = vec![user("10", Some("a@example.com"))];

        let joined = join_by_serial(assets, &[], &mobile, &users);
        assert!(joined.assets_in_mdm[0].mdm_user_data.is_none());
    }
}
