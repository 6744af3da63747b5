use crate::records::{AssignmentBuckets, JoinedAsset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    CorrectUser,
    WrongUser,
    Unassigned,
}

/// Buckets a joined pair by assigned-user email. Comparison is exact string
/// equality; no case folding or trimming.
pub fn classify(assigned_email: Option<&str>, mdm_email: Option<&str>) -> Assignment {
    match mdm_email {
        None => Assignment::Unassigned,
        Some(mdm_email) => {
            if assigned_email == Some(mdm_email) {
                Assignment::CorrectUser
            } else {
                Assignment::WrongUser
            }
        }
    }
}

/// Partitions the joined assets into the three assignment buckets. Assets
/// with no MDM user record at all count as unassigned.
pub fn classify_assignments(assets: Vec<JoinedAsset>) -> AssignmentBuckets {
    let mut correct_user = Vec::new();
    let mut wrong_user = Vec::new();
    let mut unassigned = Vec::new();

    for asset in assets {
        let mdm_email = asset
            .mdm_user_data
            .as_ref()
            .and_then(|user| user.email.as_deref());
        match classify(asset.asset.assigned_email.as_deref(), mdm_email) {
            Assignment::CorrectUser => correct_user.push(asset),
            Assignment::WrongUser => wrong_user.push(asset),
            Assignment::Unassigned => unassigned.push(asset),
        }
    }

    AssignmentBuckets::new(correct_user, wrong_user, unassigned)
}
