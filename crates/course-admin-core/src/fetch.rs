//! Remote Collection Fetcher
//!
//! Requests are not cancelled; instead each one carries a generation ticket
//! and only the newest ticket may write into the collection.

use crate::api::{Api, Page, Transport};
use crate::error::{AdminError, AdminResult};
use crate::pagination::{PageMeta, Pager};
use crate::query::ListQuery;
use crate::resource::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    /// Start a request, superseding every earlier ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Applied,
    /// A newer request was started; this response was dropped
    Stale,
    Failed(AdminError),
}

/// Records of the current page plus load state
#[derive(Debug, Clone)]
pub struct Collection<T> {
    tracker: RequestTracker,
    records: Vec<T>,
    meta: Option<PageMeta>,
    loading: bool,
    error: Option<AdminError>,
    /// Rows were removed locally since the last load
    dirty: bool,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            tracker: RequestTracker::default(),
            records: Vec::new(),
            meta: None,
            loading: false,
            error: None,
            dirty: false,
        }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> RequestTicket {
        self.loading = true;
        self.dirty = false;
        self.tracker.begin()
    }

    /// Apply a response. Failures leave an empty collection, never the
    /// previous page's rows under a new query.
    pub fn finish_load(&mut self, ticket: RequestTicket, result: AdminResult<Page<T>>) -> LoadOutcome {
        if !self.tracker.is_current(ticket) {
            log::debug!("dropping stale response {:?}", ticket);
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.records = page.records;
                self.meta = Some(page.meta);
                self.error = None;
                LoadOutcome::Applied
            }
            Err(err) => {
                log::warn!("collection load failed: {}", err);
                self.records.clear();
                self.meta = None;
                self.error = Some(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn meta(&self) -> Option<&PageMeta> {
        self.meta.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&AdminError> {
        self.error.as_ref()
    }

    /// Pager for the page the URL asks for
    pub fn pager(&self, page: u32) -> Option<Pager> {
        self.meta.as_ref().map(|meta| Pager::new(page, meta))
    }

    /// Drop rows matching `pred` after a confirmed delete.
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !pred(r));
        let removed = before - self.records.len();
        if let Some(meta) = self.meta.as_mut() {
            meta.total = meta.total.saturating_sub(removed as u64);
            // a server-supplied page count may now be stale
            meta.total_pages = None;
        }
        self.dirty |= removed > 0;
        removed
    }

    /// Page to fetch again after a local removal, clamped to the shrunken
    /// page count so an emptied last page falls back to the new last page.
    pub fn reload_page(&self, page: u32) -> Option<u32> {
        if !self.dirty {
            return None;
        }
        let last = self.meta.as_ref().map_or(1, |m| m.total_pages().max(1));
        Some(page.clamp(1, last))
    }
}

impl<R: Resource> Collection<R> {
    pub fn remove_id(&mut self, id: &str) -> bool {
        self.remove_where(|r| r.id() == id) > 0
    }
}

/// Fetch one page of `R` for `query`.
pub async fn fetch_page<R: Resource, T: Transport>(api: &Api<T>, query: &ListQuery) -> AdminResult<Page<R>> {
    api.list::<R>(R::PATH, query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::records::Category;
    use serde_json::json;

    fn page(names: &[&str]) -> Page<String> {
        Page {
            records: names.iter().map(|n| n.to_string()).collect(),
            meta: PageMeta::new(1, 10, names.len() as u64),
        }
    }

    #[test]
    fn test_slow_earlier_response_is_dropped() {
        let mut collection = Collection::new();
        let first = collection.begin_load();
        let second = collection.begin_load();

        assert_eq!(collection.finish_load(second, Ok(page(&["fresh"]))), LoadOutcome::Applied);
        assert_eq!(collection.finish_load(first, Ok(page(&["stale"]))), LoadOutcome::Stale);
        assert_eq!(collection.records().to_vec(), vec!["fresh".to_string()]);
        assert!(!collection.is_loading());
    }

    #[test]
    fn test_stale_response_does_not_end_loading() {
        let mut collection: Collection<String> = Collection::new();
        let first = collection.begin_load();
        let _second = collection.begin_load();
        collection.finish_load(first, Ok(page(&["old"])));
        assert!(collection.is_loading());
        assert!(collection.records().is_empty());
    }

    #[test]
    fn test_failure_renders_empty() {
        let mut collection = Collection::new();
        let t = collection.begin_load();
        collection.finish_load(t, Ok(page(&["a", "b"])));

        let t = collection.begin_load();
        let outcome = collection.finish_load(t, Err(AdminError::Network("offline".into())));
        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert!(collection.records().is_empty());
        assert!(collection.meta().is_none());
        assert!(collection.error().is_some());
    }

    #[test]
    fn test_remove_where_adjusts_total() {
        let mut collection = Collection::new();
        let t = collection.begin_load();
        collection.finish_load(
            t,
            Ok(Page {
                records: vec!["a".to_string(), "b".to_string()],
                meta: PageMeta { page: 1, limit: 10, total: 11, total_pages: Some(2) },
            }),
        );
        assert_eq!(collection.remove_where(|r| r == "a"), 1);
        let meta = collection.meta().expect("meta");
        assert_eq!(meta.total, 10);
        assert_eq!(meta.total_pages(), 1);
    }

    #[test]
    fn test_emptied_last_page_reloads_previous_page() {
        let mut collection = Collection::new();
        let t = collection.begin_load();
        collection.finish_load(
            t,
            Ok(Page {
                records: vec!["only".to_string()],
                meta: PageMeta { page: 3, limit: 10, total: 21, total_pages: Some(3) },
            }),
        );
        assert_eq!(collection.reload_page(3), None);

        collection.remove_where(|r| r == "only");
        assert_eq!(collection.reload_page(3), Some(2));

        collection.begin_load();
        assert_eq!(collection.reload_page(3), None);
    }

    #[test]
    fn test_removal_mid_list_reloads_same_page() {
        let mut collection = Collection::new();
        let t = collection.begin_load();
        collection.finish_load(
            t,
            Ok(Page {
                records: vec!["a".to_string(), "b".to_string()],
                meta: PageMeta { page: 1, limit: 2, total: 5, total_pages: None },
            }),
        );
        assert_eq!(collection.remove_where(|r| r == "missing"), 0);
        assert_eq!(collection.reload_page(1), None);
        collection.remove_where(|r| r == "a");
        assert_eq!(collection.reload_page(1), Some(1));
    }

    #[tokio::test]
    async fn test_fetch_page_uses_resource_path() {
        let transport = RecordingTransport::default().respond(Ok(json!({
            "success": true,
            "data": [{"_id": "c1", "name": "Design", "isActive": true}],
            "meta": {"page": 1, "limit": 10, "total": 1}
        })));
        let api = Api::new(transport);

        let page: Page<Category> = fetch_page(&api, &ListQuery::new(10)).await.expect("page");
        assert_eq!(page.records[0].id, "c1");
        assert_eq!(api.transport().sent()[0].path, "categories");
    }
}
