//! Thin wrappers over the browser globals. Every helper degrades to a no-op
//! (or an empty answer) when the element or global it needs is missing.

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::components::nav::SectionBounds;
use crate::config;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn page_y_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn inner_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Locks or unlocks page scrolling through the body's `overflow` style.
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        debug!("no <body>, scroll lock skipped");
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        warn!("failed to set body overflow: {:?}", e);
    }
}

/// Geometry of every `section[id]` in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

/// Smooth-scrolls so the element with `id` sits just below the fixed navbar.
/// Returns false when there is no such element.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("anchor target #{} not found", id);
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(target.offset_top() as f64 - config::ANCHOR_OFFSET);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Opens `url` in a new browsing context.
pub fn open_in_new_context(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("failed to open {}: {:?}", url, e);
    }
}
