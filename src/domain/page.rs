//! Paging requests and paged results.

use serde::{Deserialize, Serialize};

/// Column a member search can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberSortProperty {
    Id,
    Username,
    Age,
    TeamName,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub property: MemberSortProperty,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(property: MemberSortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(property: MemberSortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Desc,
        }
    }
}

/// How the total element count of a page is obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountStrategy {
    /// Always run a dedicated count query.
    #[default]
    Always,
    /// Skip the count query when the first page is not full, since the
    /// content then holds every matching row.
    SkipOnFirstPartialPage,
}

/// Offset/limit window with an optional ordering.
///
/// Values are not checked on construction; the pager rejects negative
/// offsets and non-positive limits before touching the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: i64,
    pub limit: i64,
    #[serde(default)]
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset,
            limit,
            sort: Vec::new(),
        }
    }

    /// Zero-based page number and page size.
    pub fn of(page: i64, size: i64) -> Self {
        Self::new(page.saturating_mul(size), size)
    }

    pub fn sort_by(mut self, order: SortOrder) -> Self {
        self.sort.push(order);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.limit <= 0 {
            return Err(format!("limit must be positive, got {}", self.limit));
        }
        if self.offset < 0 {
            return Err(format!("offset must not be negative, got {}", self.offset));
        }
        Ok(())
    }
}

/// A window of results together with the total number of matching rows.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub request: PageRequest,
}

/// Values derived from the total count and the requested window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub number: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: i64, request: PageRequest) -> Self {
        Self {
            content,
            total_elements,
            request,
        }
    }

    /// Zero-based index of this page.
    pub fn number(&self) -> i64 {
        self.request.offset / self.request.limit.max(1)
    }

    pub fn total_pages(&self) -> i64 {
        let limit = self.request.limit.max(1);
        let total = self.total_elements.max(0);
        // Signed `div_ceil` is unstable; round up without adding to `total`.
        total / limit + i64::from(total % limit != 0)
    }

    pub fn has_next(&self) -> bool {
        self.request.offset.saturating_add(self.request.limit) < self.total_elements
    }

    pub fn has_previous(&self) -> bool {
        self.request.offset > 0
    }

    pub fn metadata(&self) -> PageMetadata {
        PageMetadata {
            number: self.number(),
            size: self.request.limit,
            total_elements: self.total_elements,
            total_pages: self.total_pages(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }
}
