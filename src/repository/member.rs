//! Repository implementation for members and member searches.

use diesel::dsl::{IntoBoxed, LeftJoin, count_star, max, min, sum};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        member::{AgeSummary, Member, NewMember, TeamAgeStats},
        page::{CountStrategy, MemberSortProperty, Page, PageRequest, SortDirection, SortOrder},
        search::MemberSearchCondition,
        types::MemberId,
    },
    dto::member_team::MemberTeamDto,
    models::member::{Member as DbMember, MemberTeamRow, NewMember as DbNewMember},
    repository::{
        DieselRepository, MemberReader, MemberWriter,
        errors::{RepositoryError, RepositoryResult},
        pager::fetch_page,
        predicate::build_member_predicate,
    },
    schema::{members, teams},
};

type MemberTeamQuery = IntoBoxed<'static, LeftJoin<members::table, teams::table>, Sqlite>;

/// `members LEFT JOIN teams` filtered by `condition`.
fn member_team_query(condition: &MemberSearchCondition) -> MemberTeamQuery {
    members::table
        .left_join(teams::table)
        .into_boxed::<Sqlite>()
        .filter(build_member_predicate(condition))
}

/// Applies `sort`, then `members.id` as the final tie-breaker.
fn ordered(mut query: MemberTeamQuery, sort: &[SortOrder]) -> MemberTeamQuery {
    for order in sort {
        query = match (order.property, order.direction) {
            (MemberSortProperty::Id, SortDirection::Asc) => query.then_order_by(members::id.asc()),
            (MemberSortProperty::Id, SortDirection::Desc) => {
                query.then_order_by(members::id.desc())
            }
            (MemberSortProperty::Age, SortDirection::Asc) => {
                query.then_order_by(members::age.asc())
            }
            (MemberSortProperty::Age, SortDirection::Desc) => {
                query.then_order_by(members::age.desc())
            }
            // Missing usernames and teams sort last in either direction.
            (MemberSortProperty::Username, SortDirection::Asc) => query
                .then_order_by(members::username.is_null().asc())
                .then_order_by(members::username.asc()),
            (MemberSortProperty::Username, SortDirection::Desc) => query
                .then_order_by(members::username.is_null().asc())
                .then_order_by(members::username.desc()),
            (MemberSortProperty::TeamName, SortDirection::Asc) => query
                .then_order_by(teams::name.is_null().asc())
                .then_order_by(teams::name.asc()),
            (MemberSortProperty::TeamName, SortDirection::Desc) => query
                .then_order_by(teams::name.is_null().asc())
                .then_order_by(teams::name.desc()),
        };
    }
    query.then_order_by(members::id.asc())
}

fn load_member_team_rows(
    conn: &mut SqliteConnection,
    query: MemberTeamQuery,
) -> RepositoryResult<Vec<MemberTeamDto>> {
    query
        .select((
            members::id,
            members::username,
            members::age,
            teams::id.nullable(),
            teams::name.nullable(),
        ))
        .load::<MemberTeamRow>(conn)?
        .into_iter()
        .map(|row| MemberTeamDto::try_from(row).map_err(RepositoryError::from))
        .collect()
}

fn into_domain(db_members: Vec<DbMember>) -> RepositoryResult<Vec<Member>> {
    db_members
        .into_iter()
        .map(|member| Member::try_from(member).map_err(RepositoryError::from))
        .collect()
}

impl MemberReader for DieselRepository {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        let mut conn = self.conn()?;
        let db_member = members::table
            .find(id.get())
            .first::<DbMember>(&mut conn)
            .optional()?;

        match db_member {
            Some(db_member) => Ok(Some(
                Member::try_from(db_member).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_members(&self) -> RepositoryResult<Vec<Member>> {
        let mut conn = self.conn()?;
        let db_members = members::table
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain(db_members)
    }

    fn find_members_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>> {
        let mut conn = self.conn()?;
        let db_members = members::table
            .filter(members::username.eq(username))
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain(db_members)
    }

    fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        log::debug!("Searching members with {condition:?}");

        let mut conn = self.conn()?;
        load_member_team_rows(&mut conn, ordered(member_team_query(condition), &[]))
    }

    fn search_members_page(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
        strategy: CountStrategy,
    ) -> RepositoryResult<Page<MemberTeamDto>> {
        log::debug!("Searching members with {condition:?}, page {request:?}, {strategy:?}");

        let mut conn = self.conn()?;
        fetch_page(
            &mut *conn,
            request,
            strategy,
            |conn, offset, limit| {
                let query = ordered(member_team_query(condition), &request.sort)
                    .offset(offset)
                    .limit(limit);
                load_member_team_rows(conn, query)
            },
            |conn| Ok(member_team_query(condition).count().get_result::<i64>(conn)?),
        )
    }

    fn member_age_summary(&self) -> RepositoryResult<AgeSummary> {
        let mut conn = self.conn()?;
        let (count, total, youngest, oldest) = members::table
            .select((
                count_star(),
                sum(members::age),
                min(members::age),
                max(members::age),
            ))
            .get_result::<(i64, Option<i64>, Option<i32>, Option<i32>)>(&mut conn)?;

        let total = total.unwrap_or(0);
        Ok(AgeSummary {
            count,
            sum: total,
            avg: (count > 0).then(|| total as f64 / count as f64),
            min: youngest,
            max: oldest,
        })
    }

    fn team_age_stats(&self) -> RepositoryResult<Vec<TeamAgeStats>> {
        let mut conn = self.conn()?;
        let rows = members::table
            .inner_join(teams::table)
            .group_by(teams::name)
            .select((teams::name, count_star(), sum(members::age)))
            .order(teams::name.asc())
            .load::<(String, i64, Option<i64>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(team_name, member_count, total)| TeamAgeStats {
                team_name,
                member_count,
                avg_age: total.unwrap_or(0) as f64 / member_count.max(1) as f64,
            })
            .collect())
    }
}

impl MemberWriter for DieselRepository {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member> {
        let mut conn = self.conn()?;
        let db_new_member: DbNewMember = new_member.into();

        let db_member = diesel::insert_into(members::table)
            .values(&db_new_member)
            .get_result::<DbMember>(&mut conn)?;

        Member::try_from(db_member).map_err(RepositoryError::from)
    }

    fn rename_members_younger_than(&self, age: i32, username: &str) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let affected = diesel::update(members::table.filter(members::age.lt(age)))
            .set(members::username.eq(username))
            .execute(&mut conn)?;

        log::info!("Renamed {affected} members younger than {age}");
        Ok(affected)
    }

    fn add_to_member_ages(&self, delta: i32) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let affected = diesel::update(members::table)
            .set(members::age.eq(members::age + delta))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn multiply_member_ages(&self, factor: i32) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let affected = diesel::update(members::table)
            .set(members::age.eq(members::age * factor))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_members_older_than(&self, age: i32) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let affected = diesel::delete(members::table.filter(members::age.gt(age)))
            .execute(&mut conn)?;

        log::info!("Deleted {affected} members older than {age}");
        Ok(affected)
    }
}
