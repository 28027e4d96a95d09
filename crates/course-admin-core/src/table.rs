//! Tabular Renderer
//!
//! Pure mapping from records and column definitions to a table model the
//! UI draws as-is.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::config::AdminConfig;
use crate::query::{ListQuery, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Active / published
    Filled,
    Muted,
}

/// One rendered cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// Shortened text; `full` goes in the hover tooltip
    Truncated { display: String, full: String },
    Badge { label: String, tone: BadgeTone },
    /// Two stacked lines from one timestamp
    DateTime { date: String, time: String },
    /// Thumbnail with a tooltip naming it
    ImageWithTooltip { src: Option<String>, alt: String, tooltip: String },
    Empty,
}

impl Cell {
    /// Visible text, as a screen reader or a plain-text export would see it
    pub fn display_text(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Truncated { display, .. } => display.clone(),
            Cell::Badge { label, .. } => label.clone(),
            Cell::DateTime { date, time } => format!("{} {}", date, time),
            Cell::ImageWithTooltip { alt, .. } => alt.clone(),
            Cell::Empty => "-".to_string(),
        }
    }

    /// Hover affordance content
    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Cell::Truncated { full, .. } => Some(full),
            Cell::ImageWithTooltip { tooltip, .. } => Some(tooltip),
            _ => None,
        }
    }
}

/// Formatting rules shared by every column renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFormat {
    pub name_truncate_at: usize,
    pub description_truncate_at: usize,
    pub keep: usize,
    pub offset: FixedOffset,
}

impl Default for CellFormat {
    fn default() -> Self {
        Self::from_config(&AdminConfig::default())
    }
}

impl CellFormat {
    pub fn from_config(config: &AdminConfig) -> Self {
        let offset = FixedOffset::east_opt(config.utc_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix());
        Self {
            name_truncate_at: config.name_truncate_at,
            description_truncate_at: config.description_truncate_at,
            keep: config.truncate_keep,
            offset,
        }
    }

    pub fn name(&self, text: &str) -> Cell {
        truncate(text, self.name_truncate_at, self.keep)
    }

    pub fn description(&self, text: Option<&str>) -> Cell {
        match text.filter(|t| !t.trim().is_empty()) {
            Some(text) => truncate(text, self.description_truncate_at, self.keep),
            None => Cell::Empty,
        }
    }

    pub fn datetime(&self, at: Option<&DateTime<Utc>>) -> Cell {
        match at {
            Some(at) => split_datetime(at, self.offset),
            None => Cell::Empty,
        }
    }
}

/// Over `threshold` characters: first `keep` characters plus `"..."`.
///
/// `keep` is the same whichever threshold fired, so a 40-character
/// description stays whole while a 40-character name is cut to 16.
pub fn truncate(text: &str, threshold: usize, keep: usize) -> Cell {
    if text.chars().count() > threshold {
        let mut display: String = text.chars().take(keep).collect();
        display.push_str("...");
        Cell::Truncated { display, full: text.to_string() }
    } else {
        Cell::Text(text.to_string())
    }
}

pub fn status_badge(active: bool, active_label: &str, inactive_label: &str) -> Cell {
    if active {
        Cell::Badge { label: active_label.to_string(), tone: BadgeTone::Filled }
    } else {
        Cell::Badge { label: inactive_label.to_string(), tone: BadgeTone::Muted }
    }
}

/// Badge for enum-like status strings; `active_values` get the filled tone.
pub fn status_badge_for(status: &str, active_values: &[&str]) -> Cell {
    let active = active_values.iter().any(|v| v.eq_ignore_ascii_case(status));
    let mut label: String = status.to_string();
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    status_badge(active, &label, &label)
}

/// Date line and time line, US-style, in the given offset
pub fn split_datetime(at: &DateTime<Utc>, offset: FixedOffset) -> Cell {
    let local = at.with_timezone(&offset);
    Cell::DateTime {
        date: local.format("%-m/%-d/%Y").to_string(),
        time: local.format("%-I:%M:%S %p").to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    Static(&'static str),
    /// Clicking toggles sorting by `field` through the query store
    Sortable { label: &'static str, field: &'static str },
}

impl Header {
    pub fn label(&self) -> &'static str {
        match self {
            Header::Static(label) | Header::Sortable { label, .. } => label,
        }
    }
}

/// Column definition: a header and a cell renderer
pub struct Column<R> {
    pub key: &'static str,
    pub header: Header,
    pub render: fn(&R, &CellFormat) -> Cell,
}

impl<R> Column<R> {
    pub fn new(key: &'static str, header: Header, render: fn(&R, &CellFormat) -> Cell) -> Self {
        Self { key, header, render }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: &'static str,
    /// Present for sortable headers
    pub sort_field: Option<&'static str>,
    /// Current order when this column is the active sort key
    pub active_order: Option<SortOrder>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<RenderedRow>),
    /// One full-width row with a centered message
    Empty { message: String, colspan: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    /// Whether a trailing row-action column is drawn
    pub has_actions: bool,
}

impl RenderedTable {
    /// Columns including the action column
    pub fn column_count(&self) -> usize {
        self.headers.len() + usize::from(self.has_actions)
    }

    pub fn row(&self, id: &str) -> Option<&RenderedRow> {
        match &self.body {
            TableBody::Rows(rows) => rows.iter().find(|r| r.id == id),
            TableBody::Empty { .. } => None,
        }
    }
}

/// Render `records` through `columns`.
pub fn render_table<R>(
    records: &[R],
    columns: &[Column<R>],
    id_of: impl Fn(&R) -> String,
    empty_message: &str,
    query: &ListQuery,
    format: &CellFormat,
    has_actions: bool,
) -> RenderedTable {
    let headers: Vec<HeaderCell> = columns
        .iter()
        .map(|column| {
            let sort_field = match column.header {
                Header::Sortable { field, .. } => Some(field),
                Header::Static(_) => None,
            };
            let active_order = sort_field
                .filter(|field| query.sort_by.as_deref() == Some(*field))
                .map(|_| query.sort_order);
            HeaderCell { key: column.key, label: column.header.label(), sort_field, active_order }
        })
        .collect();

    let body = if records.is_empty() {
        TableBody::Empty {
            message: empty_message.to_string(),
            colspan: headers.len() + usize::from(has_actions),
        }
    } else {
        TableBody::Rows(
            records
                .iter()
                .map(|record| RenderedRow {
                    id: id_of(record),
                    cells: columns.iter().map(|c| (c.render)(record, format)).collect(),
                })
                .collect(),
        )
    };

    RenderedTable { headers, body, has_actions }
}
