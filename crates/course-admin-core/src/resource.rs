//! Resource Trait
//!
//! What a record type must provide for the generic list, detail and delete
//! screens to work with it.

use serde::de::DeserializeOwned;

use crate::query::{ListQuery, ALL_SENTINEL};
use crate::table::{render_table, Cell, CellFormat, Column, RenderedTable};

/// A select control over one query key. The first option is always the
/// `"all"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelect {
    pub key: &'static str,
    pub label: &'static str,
    pub options: Vec<(&'static str, &'static str)>,
}

impl FilterSelect {
    pub fn new(key: &'static str, label: &'static str, options: &[(&'static str, &'static str)]) -> Self {
        let mut all = vec![(ALL_SENTINEL, "All")];
        all.extend_from_slice(options);
        Self { key, label, options: all }
    }

    /// Value the control shows for the current query
    pub fn selected<'a>(&self, query: &'a ListQuery) -> &'a str {
        query.filter(self.key).unwrap_or(ALL_SENTINEL)
    }
}

pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// REST path segment, e.g. `courses`
    const PATH: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    fn id(&self) -> &str;

    /// Short human label used in confirmations and toasts
    fn label(&self) -> String;

    fn columns() -> Vec<Column<Self>>;

    fn filters() -> Vec<FilterSelect> {
        Vec::new()
    }

    /// Label/value pairs for the detail panel
    fn detail_fields(&self, format: &CellFormat) -> Vec<(&'static str, Cell)>;

    /// Extra per-row links shown in the action menu, as `(label, href)`
    fn row_links(_id: &str) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn title() -> String {
        format!("All {}", capitalize(Self::PLURAL))
    }

    fn empty_message() -> String {
        format!("No {} found", Self::PLURAL)
    }

    fn render(records: &[Self], query: &ListQuery, format: &CellFormat) -> RenderedTable {
        render_table(
            records,
            &Self::columns(),
            |r| r.id().to_string(),
            &Self::empty_message(),
            query,
            format,
            true,
        )
    }
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryParams;

    #[test]
    fn test_filter_select_defaults_to_all() {
        let select = FilterSelect::new("status", "Status", &[("published", "Published"), ("draft", "Draft")]);
        assert_eq!(select.options[0], ("all", "All"));
        assert_eq!(select.options.len(), 3);

        let query = ListQuery::from_params(&QueryParams::parse("status=draft"), 10);
        assert_eq!(select.selected(&query), "draft");
        assert_eq!(select.selected(&ListQuery::new(10)), "all");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("live classes"), "Live classes");
        assert_eq!(capitalize(""), "");
    }
}
