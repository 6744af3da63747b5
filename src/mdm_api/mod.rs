pub mod mdm_client;
pub mod models;

use crate::mdm_api::mdm_client::MdmApi;
use crate::mdm_api::models::computer_inventory::ComputerInventory;
use crate::records::{MdmDeviceRecord, MdmUserRecord};
use tracing::debug;

pub const SECTION_HARDWARE: &str = "HARDWARE";
pub const SECTION_USER_AND_LOCATION: &str = "USER_AND_LOCATION";

/// Pages through the computers inventory for one section. Page numbers start
/// at 0; the loop stops once the accumulated result count reaches the
/// server-reported total, or on an empty page.
async fn fetch_inventory_pages<T>(client: &T, section: &str) -> anyhow::Result<Vec<ComputerInventory>>
where
    T: MdmApi,
{
    let mut results = Vec::new();
    let mut page = 0u32;

    loop {
        debug!("Fetching computers inventory page {} ({})", page, section);
        let response = client.get_computers_page(section, page).await?;

        if response.results.is_empty() {
            break;
        }
        results.extend(response.results);

        if results.len() as i64 >= response.total_count {
            break;
        }
        page += 1;
    }

    Ok(results)
}

pub async fn fetch_computers<T>(client: &T) -> anyhow::Result<Vec<MdmDeviceRecord>>
where
    T: MdmApi,
{
    let computers = fetch_inventory_pages(client, SECTION_HARDWARE).await?;
    Ok(computers
        .into_iter()
        .filter_map(|computer| {
            let serial_no = computer
                .hardware
                .and_then(|h| h.serial_number)
                .filter(|s| !s.is_empty())?;
            Some(MdmDeviceRecord {
                id: computer.id,
                serial_no,
                name: computer.general.and_then(|g| g.name),
            })
        })
        .collect())
}

pub async fn fetch_computer_users<T>(client: &T) -> anyhow::Result<Vec<MdmUserRecord>>
where
    T: MdmApi,
{
    let computers = fetch_inventory_pages(client, SECTION_USER_AND_LOCATION).await?;
    Ok(computers
        .into_iter()
        .filter_map(|computer| {
            let user = computer.user_and_location?;
            Some(MdmUserRecord {
                id: computer.id,
                username: user.username,
                real_name: user.realname,
                email: user.email,
            })
        })
        .collect())
}

pub async fn fetch_mobile_devices<T>(client: &T) -> anyhow::Result<Vec<MdmDeviceRecord>>
where
    T: MdmApi,
{
    let response = client.get_mobile_devices().await?;
    Ok(response
        .mobile_devices
        .into_iter()
        .filter_map(|device| {
            let serial_no = device.serial_number.filter(|s| !s.is_empty())?;
            Some(MdmDeviceRecord {
                id: device.id.to_string(),
                serial_no,
                name: device.name,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdm_api::models::computer_inventory::{Hardware, UserAndLocation};
    use crate::mdm_api::models::mobile_device::MobileDevice;
    use crate::mdm_api::models::response::computers_inventory_response::ComputersInventoryResponse;
    use crate::mdm_api::models::response::mobile_devices_response::MobileDevicesResponse;
    use std::sync::Mutex;

    fn computer(id: &str, serial: Option<&str>) -> ComputerInventory {
        ComputerInventory {
            id: id.to_string(),
            general: None,
            hardware: Some(Hardware {
                serial_number: serial.map(str::to_string),
            }),
            user_and_location: Some(UserAndLocation {
                username: Some(format!("user-{}", id)),
                realname: None,
                email: Some(format!("user-{}@example.com", id)),
            }),
        }
    }

    struct PagedMdm {
        pages: Vec<Vec<ComputerInventory>>,
        total_count: i64,
        requested: Mutex<Vec<u32>>,
    }

    impl MdmApi for PagedMdm {
        async fn get_computers_page(
            &self,
            _section: &str,
            page: u32,
        ) -> anyhow::Result<ComputersInventoryResponse> {
            self.requested.lock().unwrap().push(page);
            Ok(ComputersInventoryResponse {
                total_count: self.total_count,
                results: self.pages.get(page as usize).cloned().unwrap_or_default(),
            })
        }

        async fn get_mobile_devices(&self) -> anyhow::Result<MobileDevicesResponse> {
            Ok(MobileDevicesResponse {
                mobile_devices: vec![
                    MobileDevice {
                        id: 77,
                        name: Some("tablet".to_string()),
                        serial_number: Some("MOB1".to_string()),
                    },
                    MobileDevice {
                        id: 78,
                        name: None,
                        serial_number: None,
                    },
                ],
            })
        }
    }

    #[tokio::test]
    async fn stops_at_total_count() {
        let mdm = PagedMdm {
            pages: vec![
                vec![computer("1", Some("A")), computer("2", Some("B"))],
                vec![computer("3", Some("C"))],
            ],
            total_count: 3,
            requested: Mutex::new(Vec::new()),
        };

        let records = fetch_computers(&mdm).await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(*mdm.requested.lock().unwrap(), vec![0, 1]);
    }

    #[tokio::test]
    async fn skips_computers_without_serial() {
        let mdm = PagedMdm {
            pages: vec![vec![computer("1", Some("A")), computer("2", None)]],
            total_count: 2,
            requested: Mutex::new(Vec::new()),
        };

        let records = fetch_computers(&mdm).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].serial_no, "A");
    }

    #[tokio::test]
    async fn user_records_keyed_by_device_id() {
        let mdm = PagedMdm {
            pages: vec![vec![computer("9", Some("A"))]],
            total_count: 1,
            requested: Mutex::new(Vec::new()),
        };

        let users = fetch_computer_users(&mdm).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "9");
        assert_eq!(users[0].email.as_deref(), Some("user-9@example.com"));
    }

    #[tokio::test]
    async fn mobile_ids_are_stringified_and_rows_without_serial_dropped() {
        let mdm = PagedMdm {
            pages: vec![],
            total_count: 0,
            requested: Mutex::new(Vec::new()),
        };

        let devices = fetch_mobile_devices(&mdm).await.unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, "77");
        assert_eq!(devices[0].serial_no, "MOB1");
    }
}
