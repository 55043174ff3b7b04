//! Thin web-sys helpers shared by the components.
//!
//! Everything here is a no-op (or returns a neutral value) when the browser
//! objects are missing, so a component never fails to render because an
//! enhancement could not attach.

use crate::interaction::{scroll_target, SectionSpan};
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

const HIDDEN_TRANSFORM: &str = "translateY(20px)";
const SHOWN_TRANSFORM: &str = "translateY(0)";
const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Current vertical scroll offset in CSS pixels.
pub fn page_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// All `section` elements under `root`, as `HtmlElement`s.
pub fn sections_in(root: &Element) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all("section") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn span_of(section: &HtmlElement) -> SectionSpan {
    SectionSpan::new(
        section.id(),
        f64::from(section.offset_top()),
        f64::from(section.offset_height()),
    )
}

/// Smooth-scroll the window so its top edge lands at `top`.
pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll to the section with `id`, leaving room for the fixed navbar.
/// Returns `false` if there is no such element.
pub fn scroll_to_section(id: &str, nav_height: f64) -> bool {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    smooth_scroll_to(scroll_target(f64::from(target.offset_top()), nav_height));
    true
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Put a section in its pre-reveal state: transparent and shifted down.
pub fn hide_for_reveal(el: &HtmlElement) {
    let style = el.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", HIDDEN_TRANSFORM);
    let _ = style.set_property("transition", REVEAL_TRANSITION);
}

pub fn reveal(el: &HtmlElement) {
    let style = el.style();
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", SHOWN_TRANSFORM);
}

pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

type EntryCallback = dyn FnMut(js_sys::Array, IntersectionObserver);

/// An `IntersectionObserver` together with the closure it calls.
///
/// Dropping the value disconnects the observer, so whoever owns it bounds how
/// long the callback can fire.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<EntryCallback>,
}

impl VisibilityObserver {
    pub fn new<F>(threshold: f64, root_margin: &str, mut on_entry: F) -> Result<Self, JsValue>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::<EntryCallback>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_entry(&entry, &observer);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
