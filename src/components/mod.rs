//! UI Components
//!
//! Reusable Leptos components and the per-resource screens built from them.

mod category_dialog;
mod cell_view;
mod data_table;
mod detail_panel;
mod diagnostics;
mod filter_select;
mod list_screen;
mod nav_link;
mod not_found;
mod pagination;
mod question_builder;
mod row_actions;
mod search_input;
mod sidebar;
mod toast_stack;

pub use category_dialog::CategoryDialog;
pub use cell_view::CellView;
pub use data_table::DataTable;
pub use detail_panel::detail_screen;
pub use diagnostics::DiagnosticsDrawer;
pub use filter_select::FilterSelectView;
pub use list_screen::list_screen;
pub use nav_link::NavLink;
pub use not_found::NotFoundPanel;
pub use pagination::PaginationBar;
pub use question_builder::QuestionBuilderScreen;
pub use row_actions::RowActions;
pub use search_input::SearchInput;
pub use sidebar::Sidebar;
pub use toast_stack::ToastStack;
