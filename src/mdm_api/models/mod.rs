pub mod response;

pub mod computer_inventory;
pub mod mobile_device;
