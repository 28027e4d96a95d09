//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop reordering for Leptos lists using mouse events.
//! Uses a movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget<K> {
    /// Drop on an item (take its place)
    Item(K),
    /// Drop on the gap before position `n`; `n == len` is the end of the list
    Slot(usize),
}

/// Final index of `dragged` after dropping it on `target`, or `None` when
/// the drop would not move anything.
pub fn drop_index<K: PartialEq>(order: &[K], dragged: &K, target: DropTarget<K>) -> Option<usize> {
    let from = order.iter().position(|k| k == dragged)?;
    let to = match target {
        DropTarget::Item(ref over) => order.iter().position(|k| k == over)?,
        DropTarget::Slot(slot) => {
            let slot = slot.min(order.len());
            if slot > from {
                slot - 1
            } else {
                slot
            }
        }
    };
    (to != from).then_some(to)
}

/// DnD state signals
pub struct DndSignals<K: 'static> {
    pub dragging_id_read: ReadSignal<Option<K>>,
    pub dragging_id_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<DropTarget<K>>>,
    pub drop_target_write: WriteSignal<Option<DropTarget<K>>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<K>>,
    pub pending_id_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<K: 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static> Copy for DndSignals<K> {}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<K>() -> DndSignals<K>
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    let (dragging_id_read, dragging_id_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget<K>>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<K>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl<K> DndSignals<K>
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    pub fn is_dragging(&self, id: K) -> bool {
        self.dragging_id_read.get() == Some(id)
    }

    pub fn is_target(&self, target: DropTarget<K>) -> bool {
        self.drop_target_read.get() == Some(target)
    }
}

/// End drag operation
pub fn end_drag<K>(dnd: &DndSignals<K>)
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<K>(dnd: DndSignals<K>, item_id: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(item_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for items
pub fn make_on_item_mouseenter<K>(dnd: DndSignals<K>, item_id: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != item_id {
                dnd.drop_target_write.set(Some(DropTarget::Item(item_id)));
            }
        }
    }
}

/// Create mouseenter handler for the gap before position `slot`
pub fn make_on_slot_mouseenter<K>(dnd: DndSignals<K>, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Document-level listeners; removed when dropped
pub struct DndListeners {
    on_mousemove: Closure<dyn FnMut(web_sys::MouseEvent)>,
    on_mouseup: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl Drop for DndListeners {
    fn drop(&mut self) {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc.remove_event_listener_with_callback("mousemove", self.on_mousemove.as_ref().unchecked_ref());
            let _ = doc.remove_event_listener_with_callback("mouseup", self.on_mouseup.as_ref().unchecked_ref());
        }
    }
}

/// Bind document mousemove (drag start) and mouseup (drop) handlers.
///
/// Keep the returned value alive for as long as the list is mounted.
pub fn bind_global_listeners<K, F>(dnd: DndSignals<K>, on_drop: F) -> DndListeners
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(K, DropTarget<K>) + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        dnd.pending_id_write.set(None);
        end_drag(&dnd);

        // Only a real drag drops; a click falls through to the element
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }

    DndListeners { on_mousemove, on_mouseup }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_on_item_takes_its_place() {
        let order = ['a', 'b', 'c', 'd'];
        assert_eq!(drop_index(&order, &'a', DropTarget::Item('c')), Some(2));
        assert_eq!(drop_index(&order, &'d', DropTarget::Item('a')), Some(0));
        assert_eq!(drop_index(&order, &'b', DropTarget::Item('b')), None);
    }

    #[test]
    fn test_drop_on_slot_accounts_for_removal() {
        let order = ['a', 'b', 'c', 'd'];
        // gap before 'd' while dragging 'a' lands between 'c' and 'd'
        assert_eq!(drop_index(&order, &'a', DropTarget::Slot(3)), Some(2));
        assert_eq!(drop_index(&order, &'a', DropTarget::Slot(4)), Some(3));
        assert_eq!(drop_index(&order, &'c', DropTarget::Slot(0)), Some(0));
        // gaps on either side of the dragged item are no-ops
        assert_eq!(drop_index(&order, &'b', DropTarget::Slot(1)), None);
        assert_eq!(drop_index(&order, &'b', DropTarget::Slot(2)), None);
    }

    #[test]
    fn test_unknown_ids_do_nothing() {
        let order = [1u32, 2, 3];
        assert_eq!(drop_index(&order, &9, DropTarget::Slot(0)), None);
        assert_eq!(drop_index(&order, &1, DropTarget::Item(9)), None);
    }
}
