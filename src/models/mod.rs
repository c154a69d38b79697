pub mod config;
pub mod member;
pub mod team;
