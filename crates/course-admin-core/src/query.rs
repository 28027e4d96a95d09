//! List Query
//!
//! Raw query-string parameters and the typed `ListQuery` derived from them.
//! The `"all"` sentinel used by select controls never survives into either.

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Select-control placeholder meaning "no filter"
pub const ALL_SENTINEL: &str = "all";

pub const SEARCH_KEY: &str = "searchTerm";
pub const STATUS_KEY: &str = "status";
pub const SORT_BY_KEY: &str = "sortBy";
pub const SORT_ORDER_KEY: &str = "sortOrder";
pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";

// RFC 3986 unreserved characters stay literal
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// True when a value means "drop the key" rather than "filter by it".
pub fn is_unset(value: &str) -> bool {
    value.is_empty() || value == ALL_SENTINEL
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Ordered key/value pairs of a query string.
///
/// Keys keep their first-insertion position so that re-setting a value does
/// not reshuffle the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `?a=1&b=two` (leading `?` optional). Later duplicates win.
    pub fn parse(query: &str) -> Self {
        let mut params = QueryParams::new();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            if key.is_empty() {
                continue;
            }
            params.set(&key, &decode_component(value));
        }
        params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.0.push((key.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|(k, _)| k != key);
        self.0.len() != before
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|(k, _)| keep(k));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize without the leading `?`.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY_VALUE),
                    utf8_percent_encode(v, QUERY_VALUE)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Typed filter/sort/page state driving one collection fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub page: u32,
    pub limit: u32,
    /// Resource-specific keys such as `courseId` or `quizId`
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            search_term: None,
            status: None,
            sort_by: None,
            sort_order: SortOrder::default(),
            page: 1,
            limit: limit.max(1),
            filters: BTreeMap::new(),
        }
    }

    /// Build from URL parameters. Garbage page/limit values fall back to
    /// defaults instead of failing the screen.
    pub fn from_params(params: &QueryParams, default_limit: u32) -> Self {
        let mut query = ListQuery::new(default_limit);
        for (key, value) in params.iter() {
            if is_unset(value) {
                continue;
            }
            match key {
                SEARCH_KEY => query.search_term = Some(value.to_string()),
                STATUS_KEY => query.status = Some(value.to_string()),
                SORT_BY_KEY => query.sort_by = Some(value.to_string()),
                SORT_ORDER_KEY => {
                    if let Some(order) = SortOrder::parse(value) {
                        query.sort_order = order;
                    }
                }
                PAGE_KEY => {
                    query.page = value.parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                LIMIT_KEY => {
                    if let Some(limit) = value.parse::<u32>().ok().filter(|l| *l >= 1) {
                        query.limit = limit;
                    }
                }
                other => {
                    query.filters.insert(other.to_string(), value.to_string());
                }
            }
        }
        query
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        match key {
            SEARCH_KEY => self.search_term.as_deref(),
            STATUS_KEY => self.status.as_deref(),
            SORT_BY_KEY => self.sort_by.as_deref(),
            _ => self.filters.get(key).map(String::as_str),
        }
    }

    /// Parameters sent to the backend. Blank search terms are dropped and no
    /// value is ever the `"all"` sentinel.
    pub fn to_api_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            (PAGE_KEY.to_string(), self.page.max(1).to_string()),
            (LIMIT_KEY.to_string(), self.limit.max(1).to_string()),
        ];
        if let Some(term) = self.search_term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            params.push((SEARCH_KEY.to_string(), term.to_string()));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !is_unset(s)) {
            params.push((STATUS_KEY.to_string(), status.to_string()));
        }
        if let Some(sort_by) = self.sort_by.as_deref().filter(|s| !is_unset(s)) {
            params.push((SORT_BY_KEY.to_string(), sort_by.to_string()));
        }
        params.push((SORT_ORDER_KEY.to_string(), self.sort_order.as_str().to_string()));
        for (key, value) in &self.filters {
            if !is_unset(value) {
                params.push((key.clone(), value.clone()));
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_decodes_plus_and_percent() {
        let params = QueryParams::parse("?searchTerm=rust+basics&status=published&note=50%25");
        assert_eq!(params.get("searchTerm"), Some("rust basics"));
        assert_eq!(params.get("status"), Some("published"));
        assert_eq!(params.get("note"), Some("50%"));
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let mut params = QueryParams::new();
        params.set("searchTerm", "a&b c");
        params.set("courseId", "64f0-ab_c");
        assert_eq!(params.encode(), "searchTerm=a%26b%20c&courseId=64f0-ab_c");
    }

    #[test]
    fn test_set_keeps_first_position() {
        let mut params = QueryParams::parse("a=1&b=2");
        params.set("a", "3");
        assert_eq!(params.encode(), "a=3&b=2");
    }

    #[test]
    fn test_list_query_from_params() {
        let params = QueryParams::parse("searchTerm=intro&status=all&sortBy=title&sortOrder=asc&page=3&courseId=c1");
        let query = ListQuery::from_params(&params, 10);

        assert_eq!(query.search_term.as_deref(), Some("intro"));
        assert_eq!(query.status, None);
        assert_eq!(query.sort_by.as_deref(), Some("title"));
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, 10);
        assert_eq!(query.filter("courseId"), Some("c1"));
    }

    #[test]
    fn test_invalid_page_falls_back_to_first() {
        for raw in ["page=0", "page=-2", "page=abc"] {
            let query = ListQuery::from_params(&QueryParams::parse(raw), 10);
            assert_eq!(query.page, 1, "{}", raw);
        }
    }

    #[test]
    fn test_api_params_never_carry_sentinel() {
        let mut query = ListQuery::new(10);
        query.status = Some(ALL_SENTINEL.to_string());
        query.search_term = Some("   ".to_string());
        query.filters.insert("courseId".into(), ALL_SENTINEL.into());

        let params = query.to_api_params();
        assert!(params.iter().all(|(_, v)| v != ALL_SENTINEL));
        assert!(params.iter().all(|(k, _)| k != STATUS_KEY && k != SEARCH_KEY && k != "courseId"));
        assert_eq!(
            params,
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("sortOrder".to_string(), "desc".to_string()),
            ]
        );
    }
}
