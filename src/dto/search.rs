//! DTOs shaped for paged member search screens.

use serde::{Deserialize, Serialize};

use crate::domain::page::{PageMetadata, SortOrder};
use crate::domain::search::MemberSearchCondition;
use crate::dto::member_team::MemberTeamDto;

/// Search parameters as they arrive from a caller: 1-based page number and
/// an optional page size.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MemberSearchQuery {
    #[serde(default)]
    pub condition: MemberSearchCondition,
    pub page: Option<usize>,
    pub per_page: Option<i64>,
    #[serde(default)]
    pub sort: Vec<SortOrder>,
}

/// Data required to render one page of member search results.
#[derive(Debug, Serialize)]
pub struct MemberSearchPage {
    pub members: Vec<MemberTeamDto>,
    pub metadata: PageMetadata,
    /// 1-based page numbers to link to; `None` marks a gap.
    pub pages: Vec<Option<usize>>,
    /// Current page, 1-based.
    pub page: usize,
}
