//! Query-String State Store
//!
//! `ViewState` is the list screen's filter state as an explicit value. All
//! transitions go through one pure reducer (`ViewState::apply`); persisting
//! the result (browser URL, memory in tests) is the only side effect, done
//! by a `QueryPersistence` behind `QueryStore`.

use crate::query::{
    is_unset, ListQuery, QueryParams, SortOrder, LIMIT_KEY, PAGE_KEY, SORT_BY_KEY, SORT_ORDER_KEY,
};

/// Scroll handling requested alongside a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// In-page filter change: keep the scroll position
    Preserve,
    /// Pagination: default behavior, back to the top
    Top,
}

/// A committed change of the query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Encoded query, without the leading `?`
    pub query: String,
    pub scroll: ScrollBehavior,
}

/// Transitions a list screen can request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Set a filter; empty or `"all"` removes it. Resets the page.
    SetParam { key: String, value: String },
    /// Change page only; every other key is left untouched.
    SetPage(u32),
    /// Sort by a column, flipping the order if it is already the sort key.
    ToggleSort(String),
    /// Drop every filter, keeping only an explicit page size.
    ClearFilters,
}

impl ViewAction {
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        ViewAction::SetParam { key: key.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    params: QueryParams,
}

impl ViewState {
    pub fn from_query(query: &str) -> Self {
        Self { params: QueryParams::parse(query) }
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn query_string(&self) -> String {
        self.params.encode()
    }

    pub fn list_query(&self, default_limit: u32) -> ListQuery {
        ListQuery::from_params(&self.params, default_limit)
    }

    /// Next state for `action`, without touching persistence.
    pub fn reduce(&self, action: &ViewAction) -> ViewState {
        let mut params = self.params.clone();
        match action {
            ViewAction::SetParam { key, value } => {
                if key == PAGE_KEY {
                    return self.reduce(&ViewAction::SetPage(value.parse().unwrap_or(1)));
                }
                if is_unset(value) {
                    params.remove(key);
                } else {
                    params.set(key, value);
                }
                // Absent page reads as page 1
                params.remove(PAGE_KEY);
            }
            ViewAction::SetPage(page) => {
                params.set(PAGE_KEY, &(*page).max(1).to_string());
            }
            ViewAction::ToggleSort(field) => {
                let next = if params.get(SORT_BY_KEY) == Some(field.as_str()) {
                    params
                        .get(SORT_ORDER_KEY)
                        .and_then(SortOrder::parse)
                        .unwrap_or_default()
                        .flipped()
                } else {
                    SortOrder::Asc
                };
                params.set(SORT_BY_KEY, field);
                params.set(SORT_ORDER_KEY, next.as_str());
                params.remove(PAGE_KEY);
            }
            ViewAction::ClearFilters => {
                params.retain(|key| key == LIMIT_KEY);
            }
        }
        ViewState { params }
    }

    /// Apply `action`; `None` when the query string would not change.
    pub fn apply(&self, action: &ViewAction) -> Option<(ViewState, Navigation)> {
        let next = self.reduce(action);
        let query = next.query_string();
        if query == self.query_string() {
            return None;
        }
        let scroll = match action {
            ViewAction::SetPage(_) => ScrollBehavior::Top,
            ViewAction::SetParam { key, .. } if key == PAGE_KEY => ScrollBehavior::Top,
            _ => ScrollBehavior::Preserve,
        };
        Some((next, Navigation { query, scroll }))
    }
}

/// Where the query string lives.
pub trait QueryPersistence {
    /// Current query string, with or without leading `?`
    fn current(&self) -> String;
    /// Replace the query string. Only called when it actually changed.
    fn commit(&mut self, navigation: &Navigation);
}

/// In-memory persistence, used by tests and by screens embedded without a URL.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    query: String,
    pub history: Vec<Navigation>,
}

impl MemoryPersistence {
    pub fn new(query: &str) -> Self {
        Self { query: query.trim_start_matches('?').to_string(), history: Vec::new() }
    }
}

impl QueryPersistence for MemoryPersistence {
    fn current(&self) -> String {
        self.query.clone()
    }

    fn commit(&mut self, navigation: &Navigation) {
        self.query = navigation.query.clone();
        self.history.push(navigation.clone());
    }
}

/// Reducer plus persistence: the store every list control writes through.
#[derive(Debug, Clone)]
pub struct QueryStore<P> {
    persistence: P,
}

impl<P: QueryPersistence> QueryStore<P> {
    pub fn new(persistence: P) -> Self {
        Self { persistence }
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Always re-read: the persisted query is the source of truth.
    pub fn view_state(&self) -> ViewState {
        ViewState::from_query(&self.persistence.current())
    }

    pub fn list_query(&self, default_limit: u32) -> ListQuery {
        self.view_state().list_query(default_limit)
    }

    /// Returns whether a navigation was committed.
    pub fn dispatch(&mut self, action: &ViewAction) -> bool {
        match self.view_state().apply(action) {
            Some((_, navigation)) => {
                log::debug!("query -> ?{} ({:?})", navigation.query, navigation.scroll);
                self.persistence.commit(&navigation);
                true
            }
            None => false,
        }
    }

    pub fn set_param(&mut self, key: &str, value: &str) -> bool {
        self.dispatch(&ViewAction::set(key, value))
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        self.dispatch(&ViewAction::SetPage(page))
    }

    pub fn toggle_sort(&mut self, field: &str) -> bool {
        self.dispatch(&ViewAction::ToggleSort(field.to_string()))
    }

    pub fn clear_filters(&mut self) -> bool {
        self.dispatch(&ViewAction::ClearFilters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SEARCH_KEY, STATUS_KEY};
    use proptest::prelude::*;

    fn store(query: &str) -> QueryStore<MemoryPersistence> {
        QueryStore::new(MemoryPersistence::new(query))
    }

    #[test]
    fn test_sentinel_and_empty_remove_key() {
        let mut s = store("status=published&searchTerm=rust");
        assert!(s.set_param(STATUS_KEY, "all"));
        assert_eq!(s.persistence().current(), "searchTerm=rust");
        assert!(s.set_param(SEARCH_KEY, ""));
        assert_eq!(s.persistence().current(), "");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut s = store("page=4&status=draft");
        s.set_param(STATUS_KEY, "published");
        let query = s.list_query(10);
        assert_eq!(query.page, 1);
        assert_eq!(query.status.as_deref(), Some("published"));
        assert_eq!(s.persistence().history[0].scroll, ScrollBehavior::Preserve);
    }

    #[test]
    fn test_page_change_keeps_filters_and_scrolls() {
        let mut s = store("searchTerm=abc&status=draft&courseId=c9");
        s.set_page(2);
        assert_eq!(s.persistence().current(), "searchTerm=abc&status=draft&courseId=c9&page=2");
        assert_eq!(s.persistence().history[0].scroll, ScrollBehavior::Top);
    }

    #[test]
    fn test_redundant_mutation_is_not_committed() {
        let mut s = store("searchTerm=abc");
        assert!(!s.set_param(SEARCH_KEY, "abc"));
        assert!(!s.set_param(STATUS_KEY, "all"));
        assert!(s.persistence().history.is_empty());
    }

    #[test]
    fn test_toggle_sort_cycle() {
        let mut s = store("page=3");
        s.toggle_sort("title");
        assert_eq!(s.persistence().current(), "sortBy=title&sortOrder=asc");
        s.toggle_sort("title");
        assert_eq!(s.persistence().current(), "sortBy=title&sortOrder=desc");
        s.toggle_sort("createdAt");
        assert_eq!(s.persistence().current(), "sortBy=createdAt&sortOrder=asc");
    }

    #[test]
    fn test_clear_filters_keeps_limit() {
        let mut s = store("searchTerm=a&limit=25&page=2&status=draft");
        s.clear_filters();
        assert_eq!(s.persistence().current(), "limit=25");
    }

    #[test]
    fn test_set_param_page_is_a_page_change() {
        let mut s = store("status=draft");
        s.set_param(PAGE_KEY, "5");
        assert_eq!(s.persistence().current(), "status=draft&page=5");
        assert_eq!(s.persistence().history[0].scroll, ScrollBehavior::Top);
    }

    fn key_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("searchTerm".to_string()),
            Just("status".to_string()),
            Just("sortBy".to_string()),
            Just("courseId".to_string()),
            Just("quizId".to_string()),
        ]
    }

    fn start_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec((key_strategy(), "[a-z0-9 ]{1,8}"), 0..5)
    }

    proptest! {
        #[test]
        fn prop_unset_values_never_appear(
            start in start_strategy(),
            key in key_strategy(),
            value in prop_oneof![Just(String::new()), Just("all".to_string())],
        ) {
            let mut params = QueryParams::new();
            for (k, v) in &start {
                params.set(k, v);
            }
            let state = ViewState { params };
            let next = state.reduce(&ViewAction::set(key.clone(), value));
            prop_assert!(!next.params().contains(&key));
        }

        #[test]
        fn prop_page_change_preserves_other_keys(start in start_strategy(), page in 1u32..500) {
            let mut params = QueryParams::new();
            for (k, v) in &start {
                params.set(k, v);
            }
            let state = ViewState { params: params.clone() };
            let next = state.reduce(&ViewAction::SetPage(page));
            for (k, v) in params.iter() {
                prop_assert_eq!(next.params().get(k), Some(v));
            }
            prop_assert_eq!(next.list_query(10).page, page);
        }
    }
}
