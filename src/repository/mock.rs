//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::member::{AgeSummary, Member, NewMember, TeamAgeStats};
use crate::domain::page::{CountStrategy, Page, PageRequest};
use crate::domain::search::MemberSearchCondition;
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::{MemberId, TeamId};
use crate::dto::member_team::MemberTeamDto;
use crate::repository::errors::RepositoryResult;
use crate::repository::{MemberReader, MemberWriter, TeamReader, TeamWriter};

mock! {
    pub Repository {}

    impl MemberReader for Repository {
        fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
        fn list_members(&self) -> RepositoryResult<Vec<Member>>;
        fn find_members_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>>;
        fn search_members(
            &self,
            condition: &MemberSearchCondition,
        ) -> RepositoryResult<Vec<MemberTeamDto>>;
        fn search_members_page(
            &self,
            condition: &MemberSearchCondition,
            request: &PageRequest,
            strategy: CountStrategy,
        ) -> RepositoryResult<Page<MemberTeamDto>>;
        fn member_age_summary(&self) -> RepositoryResult<AgeSummary>;
        fn team_age_stats(&self) -> RepositoryResult<Vec<TeamAgeStats>>;
    }

    impl MemberWriter for Repository {
        fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
        fn rename_members_younger_than(&self, age: i32, username: &str) -> RepositoryResult<usize>;
        fn add_to_member_ages(&self, delta: i32) -> RepositoryResult<usize>;
        fn multiply_member_ages(&self, factor: i32) -> RepositoryResult<usize>;
        fn delete_members_older_than(&self, age: i32) -> RepositoryResult<usize>;
    }

    impl TeamReader for Repository {
        fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
        fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
    }

    impl TeamWriter for Repository {
        fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
    }
}
