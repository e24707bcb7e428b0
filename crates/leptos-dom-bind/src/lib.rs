//! Leptos DOM Binding Utilities
//!
//! Attach behavior to server-rendered markup: event listeners on existing
//! elements, data-attribute lookup, visibility toggling and form extraction.
//! Reactive state is mirrored onto the DOM with Leptos effects.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

/// CSS class applied to controls while their action is in flight
pub const BUSY_CLASS: &str = "busy";

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else { return Vec::new() };
    let Ok(list) = doc.query_selector_all(selector) else { return Vec::new() };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element with the given id, if present
pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// `document.readyState` is past "loading"
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Run `f` once the document has been parsed
pub fn on_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else { return };
    if is_parsed(&doc.ready_state()) {
        f();
        return;
    }
    let on_loaded = Closure::once(f);
    let _ = doc.add_event_listener_with_callback("DOMContentLoaded", on_loaded.as_ref().unchecked_ref());
    on_loaded.forget();
}

/// Bind a click handler to every element matching `selector`.
///
/// The handler receives the event and the element the listener was bound to,
/// which is not necessarily the element that was clicked.
/// Returns the number of elements bound.
pub fn on_click_all<F>(selector: &str, handler: F) -> usize
where
    F: Fn(web_sys::MouseEvent, Element) + Clone + 'static,
{
    let elements = query_all(selector);
    for el in &elements {
        let bound = el.clone();
        let handler = handler.clone();
        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            handler(ev, bound.clone());
        });
        let _ = el.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
    elements.len()
}

/// Bind a submit handler to the form with the given id.
///
/// Native submission is always prevented before the handler runs.
/// Returns false if no such form exists.
pub fn on_submit<F>(form_id: &str, handler: F) -> bool
where
    F: Fn(HtmlFormElement) + 'static,
{
    let Some(form) = by_id(form_id).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) else {
        return false;
    };
    let bound = form.clone();
    let on_submit = Closure::<dyn FnMut(web_sys::SubmitEvent)>::new(move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handler(bound.clone());
    });
    let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();
    true
}

/// Plain-data view of one element: tag, classes and attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSnapshot {
    /// Lowercase tag name
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
}

impl ElementSnapshot {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn of(el: &Element) -> Self {
        let list = el.class_list();
        let classes = (0..list.length()).filter_map(|i| list.item(i)).collect();
        let attrs = el
            .get_attribute_names()
            .iter()
            .filter_map(|name| name.as_string())
            .filter_map(|name| el.get_attribute(&name).map(|value| (name, value)))
            .collect();
        Self {
            tag: el.tag_name().to_ascii_lowercase(),
            classes,
            attrs,
        }
    }
}

/// Snapshots from the event target up to the root element, innermost first
pub fn event_path(ev: &web_sys::Event) -> Vec<ElementSnapshot> {
    let mut path = Vec::new();
    let mut current = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
    while let Some(el) = current {
        path.push(ElementSnapshot::of(&el));
        current = el.parent_element();
    }
    path
}

/// Show or hide the element with the given id
pub fn set_visible(id: &str, visible: bool) {
    if let Some(el) = by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        let display = if visible { "block" } else { "none" };
        let _ = el.style().set_property("display", display);
    }
}

/// Set the value of the input with the given id
pub fn set_input_value(id: &str, value: &str) -> bool {
    match by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) {
        Some(input) => {
            input.set_value(value);
            true
        }
        None => false,
    }
}

/// Value of the first input named `name` anywhere in the document
pub fn input_value_by_name(name: &str) -> Option<String> {
    let selector = format!("input[name=\"{}\"]", name);
    let el = document()?.query_selector(&selector).ok()??;
    el.dyn_into::<HtmlInputElement>().ok().map(|input| input.value())
}

/// Successful controls of a form as ordered name/value pairs.
///
/// File inputs are skipped.
pub fn form_entries(form: &HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = web_sys::FormData::new_with_form(form) else { return Vec::new() };
    let Ok(Some(iter)) = js_sys::try_iter(data.as_ref()) else { return Vec::new() };

    iter.filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let pair: js_sys::Array = entry.dyn_into().ok()?;
            let name = pair.get(0).as_string()?;
            let value = pair.get(1).as_string()?;
            Some((name, value))
        })
        .collect()
}

/// Enable or disable every element matching `selector`
pub fn set_disabled_all(selector: &str, disabled: bool) {
    for el in query_all(selector) {
        if disabled {
            let _ = el.set_attribute("disabled", "");
            let _ = el.class_list().add_1(BUSY_CLASS);
        } else {
            let _ = el.remove_attribute("disabled");
            let _ = el.class_list().remove_1(BUSY_CLASS);
        }
    }
}

/// Keep every element matching `selector` disabled while `when` is true
pub fn bind_disabled<F>(selector: impl Into<String>, when: F)
where
    F: Fn() -> bool + 'static,
{
    let selector = selector.into();
    Effect::new(move |_| {
        set_disabled_all(&selector, when());
    });
}

/// Full reload of the current document
pub fn reload() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().reload();
    }
}

/// Navigate the browser to `url`
pub fn navigate(url: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(url);
    }
}

/// Blocking alert dialog
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Attribute of the document body
pub fn body_attr(name: &str) -> Option<String> {
    document()?.body()?.get_attribute(name)
}

/// Text content of the element with the given id
pub fn text_of(id: &str) -> Option<String> {
    by_id(id)?.text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_parsed() {
        assert!(!is_parsed("loading"));
        assert!(is_parsed("interactive"));
        assert!(is_parsed("complete"));
    }

    #[test]
    fn test_snapshot_lookup() {
        let button = ElementSnapshot::new("BUTTON")
            .class("btn")
            .class("edit-exercise-btn")
            .attr("data-exercise-id", "7");
        assert_eq!(button.tag, "button");
        assert!(button.has_class("edit-exercise-btn"));
        assert!(!button.has_class("edit"));
        assert_eq!(button.get_attr("data-exercise-id"), Some("7"));
        assert_eq!(button.get_attr("data-routine-id"), None);
    }
}
