use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        member::{AgeSummary, Member, NewMember, TeamAgeStats},
        page::{CountStrategy, Page, PageRequest},
        search::MemberSearchCondition,
        team::{NewTeam, Team},
        types::{MemberId, TeamId},
    },
    dto::member_team::MemberTeamDto,
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod member;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod pager;
pub mod predicate;
pub mod team;

/// Diesel-backed repository sharing one SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait MemberReader {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
    fn list_members(&self) -> RepositoryResult<Vec<Member>>;
    fn find_members_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>>;

    /// Members joined to their team, filtered by `condition`, in id order.
    fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeamDto>>;

    /// One page of [`MemberReader::search_members`], with the total obtained
    /// according to `strategy`.
    fn search_members_page(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
        strategy: CountStrategy,
    ) -> RepositoryResult<Page<MemberTeamDto>>;

    fn member_age_summary(&self) -> RepositoryResult<AgeSummary>;
    fn team_age_stats(&self) -> RepositoryResult<Vec<TeamAgeStats>>;

    fn search_page(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> RepositoryResult<Page<MemberTeamDto>> {
        self.search_members_page(condition, request, CountStrategy::Always)
    }

    fn search_page_optimized(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> RepositoryResult<Page<MemberTeamDto>> {
        self.search_members_page(condition, request, CountStrategy::SkipOnFirstPartialPage)
    }
}

/// Single-statement writes over the members table.
pub trait MemberWriter {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
    fn rename_members_younger_than(&self, age: i32, username: &str) -> RepositoryResult<usize>;
    fn add_to_member_ages(&self, delta: i32) -> RepositoryResult<usize>;
    fn multiply_member_ages(&self, factor: i32) -> RepositoryResult<usize>;
    fn delete_members_older_than(&self, age: i32) -> RepositoryResult<usize>;
}

pub trait TeamReader {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
    fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
}

pub trait TeamWriter {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
}
