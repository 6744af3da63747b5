use crate::tracker_api::models::member::Member;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct MembersResponse {
    #[serde(default)]
    pub members: Vec<Member>,
    pub total_pages: Option<u32>,
}
