use serde::{Deserialize, Serialize};

use crate::domain::types::{MemberId, TeamId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    /// Members may be stored without a username.
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<TeamId>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewMember {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    #[must_use]
    pub fn new(username: Option<String>, age: i32, team_id: Option<TeamId>) -> Self {
        Self {
            username,
            age,
            team_id,
        }
    }

    /// A member that does not belong to any team.
    #[must_use]
    pub fn without_team(username: impl Into<String>, age: i32) -> Self {
        Self::new(Some(username.into()), age, None)
    }

    /// A member assigned to `team_id`.
    #[must_use]
    pub fn in_team(username: impl Into<String>, age: i32, team_id: TeamId) -> Self {
        Self::new(Some(username.into()), age, Some(team_id))
    }
}

/// Aggregate figures over the ages of all members.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AgeSummary {
    pub count: i64,
    pub sum: i64,
    /// `None` when there are no members.
    pub avg: Option<f64>,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

/// Member count and average age of a single team.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TeamAgeStats {
    pub team_name: String,
    pub member_count: i64,
    pub avg_age: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_member_helpers_set_team() {
        let team = TeamId::new(2).unwrap();
        let member = NewMember::in_team("member1", 10, team);
        assert_eq!(member.username.as_deref(), Some("member1"));
        assert_eq!(member.team_id, Some(team));

        let loner = NewMember::without_team("member9", 99);
        assert!(loner.team_id.is_none());
    }
}
