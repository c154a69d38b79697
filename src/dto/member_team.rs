use serde::Serialize;

use crate::domain::types::{MemberId, TeamId};

/// Flattened view of a member joined to its team.
///
/// Team fields are `None` for members that do not belong to a team.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MemberTeamDto {
    pub member_id: MemberId,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
}
