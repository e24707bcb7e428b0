//! Click Targets
//!
//! Which entity a click refers to, decided from the element path of the
//! event (innermost first) rather than from live DOM nodes.

use leptos_dom_bind::ElementSnapshot;

use crate::config::EntityConfig;
use crate::models::EntityRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClick {
    /// Landed on an edit/delete button, which handles it
    OnAction,
    /// Informational region; the id of the enclosing row, if it has one
    Row(Option<EntityRef>),
}

/// Resolve a click inside a row's informational region
pub fn row_click(config: &EntityConfig, path: &[ElementSnapshot]) -> RowClick {
    let delete_class = config.delete_button_class();
    let edit_class = config.edit_button_class();
    let attr = config.id_attr();

    for el in path {
        if el.has_class(&delete_class) || el.has_class(&edit_class) {
            return RowClick::OnAction;
        }
        if el.tag == "tr" {
            if let Some(raw) = el.get_attr(&attr) {
                return RowClick::Row(EntityRef::parse(raw));
            }
        }
    }
    RowClick::Row(None)
}

/// Identifier carried by the element a button listener is bound to.
///
/// Nested children (icons, labels) are never consulted.
pub fn bound_id(config: &EntityConfig, bound: &ElementSnapshot) -> Option<EntityRef> {
    bound.get_attr(&config.id_attr()).and_then(EntityRef::parse)
}
