//! Domain aggregates and query inputs of the member search layer.

pub mod member;
pub mod page;
pub mod search;
pub mod team;
pub mod types;
