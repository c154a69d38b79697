//! Dynamic member searches over a `members LEFT JOIN teams` view: composable
//! filters, DTO projection, paging with an optional count short circuit, and
//! single-statement bulk updates.

pub mod db;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;
pub mod services;

/// Page size used when a caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;
/// Largest page a caller may request through the search service.
pub const MAX_PAGE_SIZE: i64 = 100;
