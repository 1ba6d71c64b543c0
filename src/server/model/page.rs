//! Pagination parameters and paged results.

use crate::{model::api::PaginationDto, server::error::AppError};

/// Largest page size any list endpoint accepts.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Validated paging request. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParam {
    pub page: u64,
    pub limit: u64,
}

impl PageParam {
    /// Builds paging parameters from optional query values.
    ///
    /// # Arguments
    /// - `page` - Requested page, defaults to 1
    /// - `limit` - Requested page size, defaults to `default_limit`
    /// - `default_limit` - Page size used when `limit` is absent
    ///
    /// # Returns
    /// - `Ok(PageParam)` - Page is at least 1 and limit is within 1..=100
    /// - `Err(AppError::BadRequest)` - Either value is out of range
    pub fn new(page: Option<u64>, limit: Option<u64>, default_limit: u64) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(default_limit);

        if page < 1 {
            return Err(AppError::BadRequest("Page must be at least 1".to_string()));
        }
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "Limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }

        Ok(Self { page, limit })
    }

    /// Zero-based page index as expected by the SeaORM paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

/// One page of items together with the totals needed to navigate.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, param: PageParam) -> Self {
        Self {
            items,
            total,
            page: param.page,
            limit: param.limit,
            pages: total.div_ceil(param.limit),
        }
    }

    /// Converts every item while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            pages: self.pages,
        }
    }

    pub fn pagination_dto(&self) -> PaginationDto {
        PaginationDto {
            total: self.total,
            page: self.page,
            limit: self.limit,
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let param = PageParam::new(None, None, 20).unwrap();

        assert_eq!(param, PageParam { page: 1, limit: 20 });
        assert_eq!(param.index(), 0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(PageParam::new(Some(0), None, 20).is_err());
        assert!(PageParam::new(None, Some(0), 20).is_err());
        assert!(PageParam::new(None, Some(101), 20).is_err());
        assert!(PageParam::new(Some(3), Some(100), 20).is_ok());
    }

    #[test]
    fn page_count_rounds_up() {
        let param = PageParam::new(Some(1), Some(3), 20).unwrap();

        assert_eq!(Paginated::new(vec![1, 2, 3], 7, param).pages, 3);
        assert_eq!(Paginated::new(vec![1, 2, 3], 6, param).pages, 2);
        assert_eq!(Paginated::<i32>::new(vec![], 0, param).pages, 0);
    }

    #[test]
    fn map_keeps_metadata() {
        let param = PageParam::new(Some(2), Some(2), 20).unwrap();
        let page = Paginated::new(vec![1, 2], 5, param).map(|n| n * 10);

        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.pagination_dto().pages, 3);
        assert_eq!(page.pagination_dto().page, 2);
    }
}
