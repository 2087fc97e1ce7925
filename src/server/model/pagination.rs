//! Pagination parameters and results shared by list endpoints.

use crate::{
    model::api::{PageQuery, PaginatedDto},
    server::error::AppError,
};

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;

/// Zero-indexed page request with a clamped page size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageParam {
    pub page: u64,
    pub per_page: u64,
}

impl PageParam {
    /// Builds a page request from query parameters.
    ///
    /// # Returns
    /// - `Ok(PageParam)` - Page size clamped to `1..=MAX_PER_PAGE`
    /// - `Err(AppError::BadRequest)` - The row offset of `page` does not fit a signed 64-bit integer
    pub fn from_query(query: &PageQuery) -> Result<Self, AppError> {
        let page = query.page.unwrap_or(0);
        let per_page = query
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);

        match page.checked_mul(per_page) {
            Some(offset) if offset <= i64::MAX as u64 => Ok(Self { page, per_page }),
            _ => Err(AppError::BadRequest("Page number is too large".to_string())),
        }
    }
}

/// One page of items with totals for building navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, param: PageParam) -> Self {
        Self {
            items,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total.div_ceil(param.per_page),
        }
    }

    pub fn into_dto<D>(self, convert: impl FnMut(T) -> D) -> PaginatedDto<D> {
        PaginatedDto {
            items: self.items.into_iter().map(convert).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
