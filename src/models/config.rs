//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::page::CountStrategy;
use crate::dto::search::MemberSearchQuery;

fn default_page_size() -> i64 {
    crate::DEFAULT_PAGE_SIZE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the member search entry point.
pub struct AppConfig {
    pub database_url: String,
    #[serde(default)]
    pub run_migrations: bool,
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
    #[serde(default)]
    pub count_strategy: CountStrategy,
    #[serde(default)]
    pub search: MemberSearchQuery,
}
