//! Leptos DragDrop Utilities
//!
//! Mouse-driven drag-and-drop between vertical lists.
//! Uses a movement threshold to distinguish click from drag, and derives
//! the insertion index from the midpoints of the items under the pointer.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Selector for draggable rows that still count toward drop positions.
/// Rows carry `data-drag-id`; the row being dragged carries `.dragging`.
pub const DRAGGABLE_SELECTOR: &str = "[data-drag-id]:not(.dragging)";

/// The row being dragged
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragItem {
    pub list: String,
    pub id: String,
}

/// Where a drop would land: index among the list's non-dragged rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropTarget {
    pub list: String,
    pub position: usize,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragItem>>,
    pub dragging_write: WriteSignal<Option<DragItem>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Pending row (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragItem>>,
    pub pending_write: WriteSignal<Option<DragItem>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragItem>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_read, pending_write) = signal(None::<DragItem>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

impl DndSignals {
    /// Is `id` in `list` the row being dragged
    pub fn is_dragging(&self, list: &str, id: &str) -> bool {
        self.dragging_read
            .with(|d| d.as_ref().is_some_and(|d| d.list == list && d.id == id))
    }

    /// Current drop index for `list`, if the pointer is over it
    pub fn drop_position(&self, list: &str) -> Option<usize> {
        self.drop_target_read
            .with(|t| t.as_ref().filter(|t| t.list == list).map(|t| t.position))
    }
}

/// Index of the nearest row whose midpoint lies below `pointer_y`.
///
/// `midpoints` are in display order. `None` means the pointer is past every
/// midpoint (or the list is empty): drop at the end.
pub fn nearest_below(midpoints: &[f64], pointer_y: f64) -> Option<usize> {
    midpoints
        .iter()
        .enumerate()
        .map(|(i, mid)| (i, pointer_y - mid))
        .filter(|(_, offset)| *offset < 0.0)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Drop index within `container` for a pointer at `pointer_y`
pub fn drop_position(container: &web_sys::Element, pointer_y: f64) -> usize {
    let midpoints = row_midpoints(container);
    nearest_below(&midpoints, pointer_y).unwrap_or(midpoints.len())
}

fn row_midpoints(container: &web_sys::Element) -> Vec<f64> {
    let Ok(nodes) = container.query_selector_all(DRAGGABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            rect.top() + rect.height() / 2.0
        })
        .collect()
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable rows.
/// Records pending drag with start position.
pub fn make_on_mousedown(dnd: DndSignals, item: DragItem) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_write.set(Some(item.clone()));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mousemove handler for a list container.
/// Tracks the drop index while a drag is in progress.
pub fn make_on_list_mousemove(dnd: DndSignals, list: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_none) {
            return;
        }
        let Some(container) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let target = DropTarget {
            list: list.clone(),
            position: drop_position(&container, f64::from(ev.client_y())),
        };
        // Only write on change; every write re-renders the hovered list
        if dnd.drop_target_read.with_untracked(|t| t.as_ref() != Some(&target)) {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler for a list container
pub fn make_on_list_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            return;
        }
        let Some(pending) = dnd.pending_read.get_untracked() else {
            return;
        };
        let (start_x, start_y) = dnd.start_read.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();

        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_write.set(Some(pending));
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragItem, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();
        end_drag(&dnd);

        // A click never reached the threshold, so there is nothing to drop
        if let (Some(dragged), Some(target)) = (dragging, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
