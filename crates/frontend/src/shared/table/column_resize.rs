//! Draggable column widths, persisted per table in localStorage.
//!
//! Headers carrying the `resizable` class and a `data-col-key` attribute get
//! a drag handle appended. Widths are stored as a `{col_key: px}` JSON map
//! under the given storage key and restored on the next mount.
//!
//! Call from an `Effect` after the table is in the DOM:
//!
//! ```no_run
//! # use leptos::prelude::*;
//! # use frontend::shared::table::column_resize::init_column_resize;
//! Effect::new(move |_| {
//!     init_column_resize("courts-table", "courts_column_widths");
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

const MIN_COLUMN_WIDTH: i32 = 40;

/// True right after a drag-resize ended. Header click handlers check this so
/// releasing the handle over a header does not also toggle sorting.
pub fn was_just_resizing() -> bool {
    body()
        .map(|b| b.get_attribute("data-was-resizing").as_deref() == Some("true"))
        .unwrap_or(false)
}

pub fn clear_resize_flag() {
    if let Some(b) = body() {
        let _ = b.remove_attribute("data-was-resizing");
    }
}

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

fn resizable_headers(table_id: &str) -> Vec<HtmlElement> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Some(table) = document.get_element_by_id(table_id) else {
        return Vec::new();
    };
    let Ok(nodes) = table.query_selector_all("th.resizable") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i)?.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn save_widths(table_id: &str, storage_key: &str) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    let widths: HashMap<String, i32> = resizable_headers(table_id)
        .into_iter()
        .filter_map(|th| Some((th.get_attribute("data-col-key")?, th.offset_width())))
        .collect();
    if let Ok(json) = serde_json::to_string(&widths) {
        let _ = storage.set_item(storage_key, &json);
    }
}

fn restore_widths(table_id: &str, storage_key: &str) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    let Some(json) = storage.get_item(storage_key).ok().flatten() else {
        return;
    };
    let Ok(widths) = serde_json::from_str::<HashMap<String, i32>>(&json) else {
        return;
    };
    for th in resizable_headers(table_id) {
        let Some(key) = th.get_attribute("data-col-key") else {
            continue;
        };
        if let Some(width) = widths.get(&key) {
            apply_width(&th, *width);
        }
    }
}

fn apply_width(th: &HtmlElement, width: i32) {
    let _ = th.style().set_property("width", &format!("{}px", width));
    let _ = th.style().set_property("min-width", &format!("{}px", width));
}

/// Restore saved widths and attach a drag handle to every resizable header
/// of `table_id`. Idempotent: headers that already carry a handle are
/// skipped.
pub fn init_column_resize(table_id: &str, storage_key: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    restore_widths(table_id, storage_key);

    for th in resizable_headers(table_id) {
        if th.query_selector(".resize-handle").ok().flatten().is_some() {
            continue;
        }
        let Ok(handle) = document.create_element("div") else {
            continue;
        };
        handle.set_class_name("resize-handle");
        attach_drag(&document, &handle, &th, table_id, storage_key);
        let _ = th.append_child(&handle);
    }
}

/// One drag interaction: mousedown on the handle arms the state, document
/// mousemove applies the width, document mouseup saves and flags the click
/// guard. The listeners stay alive for the page's lifetime (`forget`), which
/// matches the table's lifetime in practice.
fn attach_drag(
    document: &web_sys::Document,
    handle: &Element,
    th: &HtmlElement,
    table_id: &str,
    storage_key: &str,
) {
    struct Drag {
        active: bool,
        start_x: i32,
        start_width: i32,
    }

    let drag = Rc::new(RefCell::new(Drag {
        active: false,
        start_x: 0,
        start_width: 0,
    }));
    let th = th.clone();
    let table_id = table_id.to_string();
    let storage_key = storage_key.to_string();

    let mousedown = {
        let drag = drag.clone();
        let th = th.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            *drag.borrow_mut() = Drag {
                active: true,
                start_x: e.client_x(),
                start_width: th.offset_width(),
            };
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let _ = handle.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref());
    mousedown.forget();

    let mousemove = {
        let drag = drag.clone();
        let th = th.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let state = drag.borrow();
            if !state.active {
                return;
            }
            let width = (state.start_width + e.client_x() - state.start_x).max(MIN_COLUMN_WIDTH);
            apply_width(&th, width);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let _ = document.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());
    mousemove.forget();

    let mouseup = Closure::wrap(Box::new(move |_: MouseEvent| {
        let mut state = drag.borrow_mut();
        if !state.active {
            return;
        }
        state.active = false;
        save_widths(&table_id, &storage_key);
        if let Some(b) = body() {
            let _ = b.set_attribute("data-was-resizing", "true");
        }
        leptos::task::spawn_local(async {
            gloo_timers::future::TimeoutFuture::new(50).await;
            clear_resize_flag();
        });
    }) as Box<dyn FnMut(MouseEvent)>);
    let _ = document.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref());
    mouseup.forget();
}
