//! Search criteria for member lookups.

use serde::{Deserialize, Serialize};

/// Sparse set of filters applied to a member search.
///
/// Every field is optional; an absent field places no constraint on that
/// dimension. Text fields that are blank after trimming count as absent;
/// otherwise they are matched exactly, surrounding whitespace included.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberSearchCondition {
    /// Exact username match.
    pub username: Option<String>,
    /// Exact team name match.
    pub team_name: Option<String>,
    /// Inclusive lower bound on age.
    pub age_goe: Option<i32>,
    /// Inclusive upper bound on age.
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Username to match, or `None` when blank. The value is compared as given.
    pub fn username_filter(&self) -> Option<&str> {
        non_blank(self.username.as_deref())
    }

    /// Team name to match, or `None` when blank. The value is compared as given.
    pub fn team_name_filter(&self) -> Option<&str> {
        non_blank(self.team_name.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_fields_are_ignored() {
        let condition = MemberSearchCondition::new().username("   ").team_name("");
        assert_eq!(condition.username_filter(), None);
        assert_eq!(condition.team_name_filter(), None);
    }

    #[test]
    fn text_filters_keep_surrounding_whitespace() {
        let condition = MemberSearchCondition::new()
            .team_name("  teamB ")
            .username("member1");
        assert_eq!(condition.team_name_filter(), Some("  teamB "));
        assert_eq!(condition.username_filter(), Some("member1"));
    }
}
