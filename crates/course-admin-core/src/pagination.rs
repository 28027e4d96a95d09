//! Pagination
//!
//! `PageMeta` as returned by the API and the prev/next model built on it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl PageMeta {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self { page, limit, total, total_pages: None }
    }

    /// Server value if present, else `ceil(total / limit)`; never below 1.
    pub fn total_pages(&self) -> u32 {
        let computed = || {
            if self.limit == 0 {
                1
            } else {
                self.total.div_ceil(u64::from(self.limit)) as u32
            }
        };
        self.total_pages.unwrap_or_else(computed).max(1)
    }
}

/// Prev/next state for the current page.
///
/// Out-of-range pages are not corrected here; the buttons are simply
/// disabled at the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub limit: u32,
}

impl Pager {
    pub fn new(page: u32, meta: &PageMeta) -> Self {
        Self {
            page,
            total_pages: meta.total_pages(),
            total: meta.total,
            limit: meta.limit,
        }
    }

    pub fn prev_disabled(&self) -> bool {
        self.page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.page >= self.total_pages
    }

    pub fn prev_page(&self) -> Option<u32> {
        (!self.prev_disabled()).then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        (!self.next_disabled()).then(|| self.page + 1)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    /// "Showing 11-20 of 95"
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "Showing 0 of 0".to_string();
        }
        let limit = u64::from(self.limit.max(1));
        let first = (u64::from(self.page.max(1)) - 1) * limit + 1;
        let last = (first + limit - 1).min(self.total);
        if first > self.total {
            return format!("Showing 0 of {}", self.total);
        }
        format!("Showing {}-{} of {}", first, last, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_computed() {
        let meta = PageMeta::new(1, 10, 95);
        assert_eq!(meta.total_pages(), 10);
    }

    #[test]
    fn test_total_pages_server_value_wins() {
        let meta = PageMeta { page: 1, limit: 10, total: 95, total_pages: Some(12) };
        assert_eq!(meta.total_pages(), 12);
    }

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(PageMeta::new(1, 10, 0).total_pages(), 1);
        assert_eq!(PageMeta { page: 1, limit: 10, total: 0, total_pages: Some(0) }.total_pages(), 1);
        assert_eq!(PageMeta::new(1, 0, 40).total_pages(), 1);
    }

    #[test]
    fn test_next_disabled_exactly_on_last_page() {
        let meta = PageMeta::new(1, 10, 95);
        for page in 1..=10 {
            let pager = Pager::new(page, &meta);
            assert_eq!(pager.next_disabled(), page == 10, "page {}", page);
            assert_eq!(pager.prev_disabled(), page == 1, "page {}", page);
        }
    }

    #[test]
    fn test_labels() {
        let pager = Pager::new(10, &PageMeta::new(10, 10, 95));
        assert_eq!(pager.label(), "Page 10 of 10");
        assert_eq!(pager.range_label(), "Showing 91-95 of 95");
        assert_eq!(pager.next_page(), None);
        assert_eq!(pager.prev_page(), Some(9));
    }
}
