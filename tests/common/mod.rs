#![allow(dead_code)]

use member_search::db::{DbPool, establish_connection_pool, run_pending_migrations};
use member_search::domain::member::{Member, NewMember};
use member_search::domain::team::{NewTeam, Team};
use member_search::repository::{DieselRepository, MemberWriter, TeamWriter};
use tempfile::TempDir;

/// Migrated SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("establish pool");
        run_pending_migrations(&pool).expect("run migrations");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub struct Fixture {
    pub team_a: Team,
    pub team_b: Team,
    pub members: Vec<Member>,
}

/// teamA holds member1 (10) and member2 (20); teamB holds member3 (30) and
/// member4 (40).
pub fn seed(repo: &DieselRepository) -> Fixture {
    let team_b = repo.create_team(&NewTeam::new("teamB")).unwrap();
    let team_a = repo.create_team(&NewTeam::new("teamA")).unwrap();

    let members = [
        NewMember::in_team("member1", 10, team_a.id),
        NewMember::in_team("member2", 20, team_a.id),
        NewMember::in_team("member3", 30, team_b.id),
        NewMember::in_team("member4", 40, team_b.id),
    ]
    .iter()
    .map(|member| repo.create_member(member).unwrap())
    .collect();

    Fixture {
        team_a,
        team_b,
        members,
    }
}
