//! Composition of member search filters into a single Diesel predicate.

use diesel::dsl::LeftJoinQuerySource;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable};
use diesel::sqlite::Sqlite;

use crate::domain::search::MemberSearchCondition;
use crate::schema::{members, teams};

/// `members LEFT JOIN teams ON members.team_id = teams.id`
pub type MemberTeamSource = LeftJoinQuerySource<members::table, teams::table>;

/// Boolean filter over [`MemberTeamSource`].
pub type MemberPredicate =
    Box<dyn BoxableExpression<MemberTeamSource, Sqlite, SqlType = Nullable<Bool>>>;

/// Builds the conjunction of every filter present in `condition`.
///
/// Absent or blank fields contribute nothing. When no field is set the
/// result is a literal `TRUE`, so callers can always apply it.
pub fn build_member_predicate(condition: &MemberSearchCondition) -> MemberPredicate {
    [
        username_eq(condition.username_filter()),
        team_name_eq(condition.team_name_filter()),
        age_goe(condition.age_goe),
        age_loe(condition.age_loe),
    ]
    .into_iter()
    .flatten()
    .reduce(|acc, next| Box::new(acc.and(next)))
    .unwrap_or_else(match_all)
}

fn match_all() -> MemberPredicate {
    Box::new(true.into_sql::<Bool>().nullable())
}

fn username_eq(username: Option<&str>) -> Option<MemberPredicate> {
    username.map(|name| -> MemberPredicate {
        Box::new(members::username.eq(name.to_owned()).nullable())
    })
}

fn team_name_eq(team_name: Option<&str>) -> Option<MemberPredicate> {
    // Right-hand columns of a left join are only selectable as nullable.
    team_name.map(|name| -> MemberPredicate {
        Box::new(teams::name.nullable().eq(name.to_owned()).nullable())
    })
}

fn age_goe(age: Option<i32>) -> Option<MemberPredicate> {
    age.map(|age| -> MemberPredicate { Box::new(members::age.ge(age).nullable()) })
}

fn age_loe(age: Option<i32>) -> Option<MemberPredicate> {
    age.map(|age| -> MemberPredicate { Box::new(members::age.le(age).nullable()) })
}
