pub mod assets_response;
pub mod members_response;
