//! Browser tests: `wasm-pack test --headless --chrome crates/leptos-dom-bind`
#![cfg(target_arch = "wasm32")]

use leptos_dom_bind::{event_path, form_entries, ElementSnapshot};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> web_sys::Element {
    let doc = web_sys::window().unwrap().document().unwrap();
    let host = doc.create_element("div").unwrap();
    host.set_inner_html(html);
    doc.body().unwrap().append_child(&host).unwrap();
    host
}

#[wasm_bindgen_test]
fn form_entries_keep_document_order() {
    let host = mount(
        r#"<form id="add-exercise-form">
            <input name="csrfmiddlewaretoken" type="hidden" value="tok">
            <input name="name" value="Squat">
            <select name="unit"><option value="kg" selected>kg</option></select>
            <input name="reps" value="5">
            <button type="submit">Add</button>
        </form>"#,
    );
    let form: web_sys::HtmlFormElement = host.first_element_child().unwrap().dyn_into().unwrap();

    assert_eq!(
        form_entries(&form),
        vec![
            ("csrfmiddlewaretoken".to_string(), "tok".to_string()),
            ("name".to_string(), "Squat".to_string()),
            ("unit".to_string(), "kg".to_string()),
            ("reps".to_string(), "5".to_string()),
        ]
    );
}

#[wasm_bindgen_test]
fn event_path_runs_from_target_to_root() {
    let host = mount(
        r#"<table><tbody><tr data-exercise-id="42">
            <td class="common-info"><span id="path-target">Squat</span></td>
        </tr></tbody></table>"#,
    );
    let span = host.query_selector("#path-target").unwrap().unwrap();
    let ev = web_sys::Event::new("click").unwrap();
    span.dispatch_event(&ev).unwrap();

    let path = event_path(&ev);
    assert_eq!(path[0].tag, "span");
    assert!(path[1].has_class("common-info"));
    let row: &ElementSnapshot = &path[2];
    assert_eq!(row.tag, "tr");
    assert_eq!(row.get_attr("data-exercise-id"), Some("42"));
    assert_eq!(path.last().unwrap().tag, "html");
}
