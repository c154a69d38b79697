//! Paged member search as presented to callers.

use crate::MAX_PAGE_SIZE;
use crate::domain::page::PageRequest;
use crate::dto::search::{MemberSearchPage, MemberSearchQuery};
use crate::models::config::AppConfig;
use crate::pagination::page_links;
use crate::repository::MemberReader;
use crate::services::{ServiceError, ServiceResult};

/// Loads one page of members matching `query`.
///
/// Pages are 1-based; page `0` is treated as the first page. The page size
/// falls back to the configured default, and the total is obtained with the
/// configured count strategy.
pub fn load_member_page<R>(
    repo: &R,
    query: &MemberSearchQuery,
    config: &AppConfig,
) -> ServiceResult<MemberSearchPage>
where
    R: MemberReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(config.default_page_size);

    if per_page > MAX_PAGE_SIZE {
        return Err(ServiceError::InvalidQuery(format!(
            "page size {per_page} exceeds the maximum of {MAX_PAGE_SIZE}"
        )));
    }

    let page_index = i64::try_from(page - 1).map_err(|_| {
        ServiceError::InvalidQuery(format!("page number {page} is out of range"))
    })?;

    let mut request = PageRequest::of(page_index, per_page);
    request.sort = query.sort.clone();

    let result = repo
        .search_members_page(&query.condition, &request, config.count_strategy)
        .map_err(|err| {
            log::error!("Failed to search members: {err}");
            err
        })?;

    let metadata = result.metadata();
    let pages = page_links(metadata.total_pages.max(0) as usize, page);

    Ok(MemberSearchPage {
        members: result.content,
        metadata,
        pages,
        page,
    })
}
