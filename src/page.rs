//! Page Surface
//!
//! The document effects the list controller is allowed to cause.

use crate::models::{CsrfToken, CSRF_FORM_FIELD};

pub trait Page {
    /// Refetch the whole document
    fn reload(&self);
    /// Blocking notification; returns once dismissed
    fn alert(&self, message: &str);
    fn navigate(&self, url: &str);
    fn show(&self, element_id: &str);
    fn hide(&self, element_id: &str);
    /// Write an input value. Returns false if the input does not exist.
    fn set_value(&self, input_id: &str, value: &str) -> bool;
}

/// The live browser document
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl Page for BrowserPage {
    fn reload(&self) {
        leptos_dom_bind::reload();
    }

    fn alert(&self, message: &str) {
        leptos_dom_bind::alert(message);
    }

    fn navigate(&self, url: &str) {
        leptos_dom_bind::navigate(url);
    }

    fn show(&self, element_id: &str) {
        leptos_dom_bind::set_visible(element_id, true);
    }

    fn hide(&self, element_id: &str) {
        leptos_dom_bind::set_visible(element_id, false);
    }

    fn set_value(&self, input_id: &str, value: &str) -> bool {
        leptos_dom_bind::set_input_value(input_id, value)
    }
}

/// Token rendered into the page by Django, if any
pub fn read_csrf_token() -> Option<CsrfToken> {
    leptos_dom_bind::input_value_by_name(CSRF_FORM_FIELD).map(CsrfToken::new)
}
