//! Offset/limit paging with an optional count-query short circuit.

use crate::domain::page::{CountStrategy, Page, PageRequest};
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Returns true when the total has to come from a count query.
///
/// A first page that is not full already holds every matching row, so its
/// length is the total.
pub fn needs_count(strategy: CountStrategy, request: &PageRequest, content_len: usize) -> bool {
    match strategy {
        CountStrategy::Always => true,
        CountStrategy::SkipOnFirstPartialPage => {
            !(request.offset == 0 && (content_len as i64) < request.limit)
        }
    }
}

/// Loads one page of results.
///
/// `load_content` receives the offset and limit of the window;
/// `count_total` returns the number of rows matching the same filter. Both
/// get `ctx`, usually the database connection, so they can share it.
/// Invalid windows are rejected before either closure runs, and a failing
/// count fails the whole page.
pub fn fetch_page<Ctx, T, L, C>(
    ctx: &mut Ctx,
    request: &PageRequest,
    strategy: CountStrategy,
    load_content: L,
    count_total: C,
) -> RepositoryResult<Page<T>>
where
    Ctx: ?Sized,
    L: FnOnce(&mut Ctx, i64, i64) -> RepositoryResult<Vec<T>>,
    C: FnOnce(&mut Ctx) -> RepositoryResult<i64>,
{
    request
        .validate()
        .map_err(RepositoryError::InvalidPageRequest)?;

    let content = load_content(ctx, request.offset, request.limit)?;

    let total = if needs_count(strategy, request, content.len()) {
        count_total(ctx)?
    } else {
        log::debug!(
            "Skipping count query, first page holds all {} rows",
            content.len()
        );
        content.len() as i64
    };

    Ok(Page::new(content, total, request.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records which queries a page fetch issued.
    #[derive(Default)]
    struct Calls {
        content: usize,
        count: usize,
    }

    fn fetch(
        rows: &[i32],
        request: PageRequest,
        strategy: CountStrategy,
    ) -> (RepositoryResult<Page<i32>>, Calls) {
        let mut calls = Calls::default();
        let result = fetch_page(
            &mut calls,
            &request,
            strategy,
            |calls, offset, limit| {
                calls.content += 1;
                Ok(rows
                    .iter()
                    .copied()
                    .skip(offset as usize)
                    .take(limit as usize)
                    .collect())
            },
            |calls| {
                calls.count += 1;
                Ok(rows.len() as i64)
            },
        );
        (result, calls)
    }

    const ROWS: [i32; 4] = [10, 20, 30, 40];

    #[test]
    fn always_strategy_counts_even_small_pages() {
        let (page, calls) = fetch(&ROWS, PageRequest::new(0, 10), CountStrategy::Always);
        let page = page.unwrap();
        assert_eq!(page.total_elements, 4);
        assert_eq!(calls.count, 1);
    }

    #[test]
    fn optimized_skips_count_on_partial_first_page() {
        let (page, calls) = fetch(
            &ROWS,
            PageRequest::new(0, 10),
            CountStrategy::SkipOnFirstPartialPage,
        );
        let page = page.unwrap();
        assert_eq!(page.content.len(), 4);
        assert_eq!(page.total_elements, 4);
        assert_eq!(calls.content, 1);
        assert_eq!(calls.count, 0);
    }

    #[test]
    fn optimized_counts_when_first_page_is_full() {
        let (page, calls) = fetch(
            &ROWS,
            PageRequest::new(0, 3),
            CountStrategy::SkipOnFirstPartialPage,
        );
        let page = page.unwrap();
        assert_eq!(page.content, vec![10, 20, 30]);
        assert_eq!(page.total_elements, 4);
        assert_eq!(calls.count, 1);
    }

    #[test]
    fn optimized_counts_past_the_first_page() {
        let (page, calls) = fetch(
            &ROWS,
            PageRequest::new(3, 3),
            CountStrategy::SkipOnFirstPartialPage,
        );
        let page = page.unwrap();
        assert_eq!(page.content, vec![40]);
        assert_eq!(page.total_elements, 4);
        assert_eq!(calls.count, 1);
    }

    #[test]
    fn invalid_requests_never_reach_the_store() {
        for strategy in [CountStrategy::Always, CountStrategy::SkipOnFirstPartialPage] {
            for request in [PageRequest::new(0, 0), PageRequest::new(-1, 5)] {
                let (page, calls) = fetch(&ROWS, request, strategy);
                assert!(matches!(page, Err(RepositoryError::InvalidPageRequest(_))));
                assert_eq!(calls.content, 0);
                assert_eq!(calls.count, 0);
            }
        }
    }

    #[test]
    fn failed_count_fails_the_page() {
        let mut ctx = ();
        let result: RepositoryResult<Page<i32>> = fetch_page(
            &mut ctx,
            &PageRequest::new(0, 2),
            CountStrategy::Always,
            |_, _, _| Ok(vec![1, 2]),
            |_| Err(RepositoryError::StoreUnavailable("gone".to_string())),
        );
        assert!(matches!(result, Err(RepositoryError::StoreUnavailable(_))));
    }

    #[test]
    fn empty_first_page_skips_count() {
        let (page, calls) = fetch(
            &[],
            PageRequest::new(0, 5),
            CountStrategy::SkipOnFirstPartialPage,
        );
        assert_eq!(page.unwrap().total_elements, 0);
        assert_eq!(calls.count, 0);
    }
}
