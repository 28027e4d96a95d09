//! Row Actions
//!
//! Per-table state of the row action menu and the confirmed delete flow:
//! confirm, one DELETE, loading toast, then a success or error toast in its
//! place. The menu closes only when the delete succeeded.

use crate::api::{Api, MessageResponse, Transport};
use crate::error::AdminResult;
use crate::fetch::Collection;
use crate::resource::{capitalize, Resource};
use crate::toast::{ToastCenter, ToastId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStage {
    Open,
    /// "Are you sure?" is showing
    Confirming,
    /// DELETE in flight; the menu ignores input
    Deleting,
}

/// At most one row menu is open per table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMenu {
    open: Option<(String, MenuStage)>,
}

impl RowMenu {
    pub fn stage(&self, row_id: &str) -> Option<MenuStage> {
        self.open
            .as_ref()
            .filter(|(id, _)| id == row_id)
            .map(|(_, stage)| *stage)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.open, Some((_, MenuStage::Deleting)))
    }

    /// Open the menu for a row, or close it if it is already open.
    pub fn toggle(&mut self, row_id: &str) {
        if self.is_busy() {
            return;
        }
        self.open = match self.stage(row_id) {
            Some(_) => None,
            None => Some((row_id.to_string(), MenuStage::Open)),
        };
    }

    pub fn close(&mut self) {
        if !self.is_busy() {
            self.open = None;
        }
    }

    pub fn request_delete(&mut self, row_id: &str) -> bool {
        if self.stage(row_id) == Some(MenuStage::Open) {
            self.open = Some((row_id.to_string(), MenuStage::Confirming));
            true
        } else {
            false
        }
    }

    /// Back out of the confirmation to the plain menu
    pub fn cancel_delete(&mut self) {
        if let Some((_, stage)) = self.open.as_mut() {
            if *stage == MenuStage::Confirming {
                *stage = MenuStage::Open;
            }
        }
    }

    /// Confirm the pending delete; returns the row id to delete.
    pub fn confirm(&mut self) -> Option<String> {
        match self.open.as_mut() {
            Some((id, stage)) if *stage == MenuStage::Confirming => {
                *stage = MenuStage::Deleting;
                Some(id.clone())
            }
            _ => None,
        }
    }

    pub fn finish(&mut self, succeeded: bool) {
        if succeeded {
            self.open = None;
        } else if let Some((_, stage)) = self.open.as_mut() {
            *stage = MenuStage::Open;
        }
    }
}

/// A confirmed delete waiting for its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub toast: ToastId,
}

/// Confirm the open row's delete and show the loading toast.
pub fn begin_delete<R: Resource>(menu: &mut RowMenu, toasts: &mut ToastCenter, now_ms: u64) -> Option<PendingDelete> {
    let id = menu.confirm()?;
    log::info!("deleting {} {}", R::SINGULAR, id);
    let toast = toasts.loading(&format!("Deleting {}...", R::SINGULAR), now_ms);
    Some(PendingDelete { id, toast })
}

/// Apply the DELETE response to the menu, toast and collection. On
/// success the collection is marked for a reload (see
/// `Collection::reload_page`) so later rows move up.
pub fn finish_delete<R: Resource>(
    pending: PendingDelete,
    result: &AdminResult<MessageResponse>,
    menu: &mut RowMenu,
    toasts: &mut ToastCenter,
    collection: &mut Collection<R>,
    now_ms: u64,
) -> bool {
    match result {
        Ok(response) => {
            let message = if response.message.is_empty() {
                format!("{} deleted successfully", capitalize(R::SINGULAR))
            } else {
                response.message.clone()
            };
            collection.remove_id(&pending.id);
            toasts.resolve_success(pending.toast, &message, now_ms);
            menu.finish(true);
            true
        }
        Err(err) => {
            toasts.resolve_error(pending.toast, &err.user_message(), now_ms);
            menu.finish(false);
            false
        }
    }
}

/// Whole confirmed-delete flow against `api`.
pub async fn delete_confirmed<R: Resource, T: Transport>(
    api: &Api<T>,
    menu: &mut RowMenu,
    toasts: &mut ToastCenter,
    collection: &mut Collection<R>,
    clock: impl Fn() -> u64,
) -> bool {
    let Some(pending) = begin_delete::<R>(menu, toasts, clock()) else {
        return false;
    };
    let result = api.delete(R::PATH, &pending.id).await;
    finish_delete(pending, &result, menu, toasts, collection, clock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::api::{Method, Page};
    use crate::error::AdminError;
    use crate::pagination::PageMeta;
    use crate::records::Category;
    use crate::toast::ToastKind;
    use serde_json::json;

    fn category(id: &str) -> Category {
        serde_json::from_value(json!({"_id": id, "name": id})).expect("category")
    }

    fn loaded(ids: &[&str]) -> Collection<Category> {
        let mut collection = Collection::new();
        let ticket = collection.begin_load();
        collection.finish_load(
            ticket,
            Ok(Page {
                records: ids.iter().map(|id| category(id)).collect(),
                meta: PageMeta::new(1, 10, ids.len() as u64),
            }),
        );
        collection
    }

    fn confirming(row: &str) -> RowMenu {
        let mut menu = RowMenu::default();
        menu.toggle(row);
        assert!(menu.request_delete(row));
        menu
    }

    #[test]
    fn test_menu_transitions() {
        let mut menu = RowMenu::default();
        menu.toggle("a");
        assert_eq!(menu.stage("a"), Some(MenuStage::Open));
        menu.toggle("b");
        assert_eq!(menu.stage("a"), None);
        assert_eq!(menu.stage("b"), Some(MenuStage::Open));

        assert!(!menu.request_delete("a"));
        assert!(menu.request_delete("b"));
        menu.cancel_delete();
        assert_eq!(menu.stage("b"), Some(MenuStage::Open));
        menu.toggle("b");
        assert_eq!(menu, RowMenu::default());
    }

    #[test]
    fn test_busy_menu_ignores_close() {
        let mut menu = confirming("a");
        assert_eq!(menu.confirm(), Some("a".to_string()));
        menu.close();
        menu.toggle("b");
        assert_eq!(menu.stage("a"), Some(MenuStage::Deleting));
        assert_eq!(menu.confirm(), None);
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_row() {
        let api = Api::new(RecordingTransport::default().respond(Ok(json!({
            "success": true,
            "message": "Category removed"
        }))));
        let mut menu = confirming("c2");
        let mut toasts = ToastCenter::new();
        let mut collection = loaded(&["c1", "c2", "c3"]);

        assert!(delete_confirmed(&api, &mut menu, &mut toasts, &mut collection, || 0).await);

        let sent = api.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].path, "categories/c2");

        let ids: Vec<&str> = collection.records().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
        assert_eq!(collection.meta().map(|m| m.total), Some(2));
        assert_eq!(collection.reload_page(1), Some(1));
        assert_eq!(menu.stage("c2"), None);
        assert_eq!(toasts.toasts().len(), 1);
        assert_eq!(toasts.toasts()[0].kind, ToastKind::Success);
        assert_eq!(toasts.toasts()[0].message, "Category removed");
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_row_and_menu() {
        let api = Api::new(
            RecordingTransport::default()
                .respond(Err(AdminError::Http { status: 403, message: "Forbidden".into() })),
        );
        let mut menu = confirming("c1");
        let mut toasts = ToastCenter::new();
        let mut collection = loaded(&["c1", "c2"]);

        assert!(!delete_confirmed(&api, &mut menu, &mut toasts, &mut collection, || 0).await);

        assert_eq!(api.transport().sent().len(), 1);
        assert_eq!(collection.records().len(), 2);
        assert_eq!(collection.reload_page(1), None);
        assert_eq!(menu.stage("c1"), Some(MenuStage::Open));
        assert_eq!(toasts.toasts().len(), 1);
        assert_eq!(toasts.toasts()[0].kind, ToastKind::Error);
        assert_eq!(toasts.toasts()[0].message, "Forbidden");
    }

    #[tokio::test]
    async fn test_unconfirmed_delete_sends_nothing() {
        let api = Api::new(RecordingTransport::default());
        let mut menu = RowMenu::default();
        menu.toggle("c1");
        let mut toasts = ToastCenter::new();
        let mut collection = loaded(&["c1"]);

        assert!(!delete_confirmed(&api, &mut menu, &mut toasts, &mut collection, || 0).await);
        assert!(api.transport().sent().is_empty());
        assert!(toasts.toasts().is_empty());
    }
}
