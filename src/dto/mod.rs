pub mod member_team;
pub mod search;
