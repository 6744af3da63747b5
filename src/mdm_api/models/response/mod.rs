pub mod computers_inventory_response;
pub mod mobile_devices_response;
