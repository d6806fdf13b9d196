use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Builds a request from raw query values; `0` means "not given".
    pub fn from_query(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: match per_page {
                0 => DEFAULT_PER_PAGE,
                n => n.min(MAX_PER_PAGE),
            },
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, page: &PageRequest, total: u64) -> Self {
        let per_page = u64::from(page.per_page.max(1));
        Self {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values_fall_back_to_defaults() {
        let page = PageRequest::from_query(0, 0);
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn per_page_is_capped() {
        let page = PageRequest::from_query(2, 500);
        assert_eq!(page.per_page, MAX_PER_PAGE);
        assert_eq!(page.offset(), 100);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = PageRequest::from_query(1, 10);
        let result = PageResult::new(vec![1, 2, 3], &page, 21);
        assert_eq!(result.total_pages, 3);

        let empty: PageResult<i32> = PageResult::new(vec![], &page, 0);
        assert_eq!(empty.total_pages, 0);
    }
}
