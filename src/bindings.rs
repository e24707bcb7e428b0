//! DOM Bindings
//!
//! Hooks the server-rendered list page up to a `CrudList`.

use std::rc::Rc;

use leptos::task::spawn_local;
use leptos_dom_bind as dom;

use crate::commands::FetchTransport;
use crate::config::{EntityConfig, CLOSE_POPUP_SELECTOR, INFO_CLASS};
use crate::controller::CrudList;
use crate::models::{ActionKind, FormPayload, Popup};
use crate::page::{self, BrowserPage};
use crate::targets::{self, RowClick};

type BrowserList = CrudList<BrowserPage, FetchTransport>;

/// Capture the anti-forgery token and bind every handler of the page
pub fn initialize(config: EntityConfig) -> Rc<BrowserList> {
    let token = page::read_csrf_token();
    let list = Rc::new(CrudList::new(config, token, BrowserPage, FetchTransport));

    bind_rows(&list);
    bind_row_buttons(&list);
    bind_popups(&list);
    bind_forms(&list);
    list.owner().with(|| bind_busy_controls(&list));

    list
}

fn bind_rows(list: &Rc<BrowserList>) {
    let ctl = Rc::clone(list);
    let bound = dom::on_click_all(&format!(".{}", INFO_CLASS), move |ev, _| {
        let path = dom::event_path(&ev);
        match targets::row_click(ctl.config(), &path) {
            RowClick::OnAction => {}
            RowClick::Row(id) => ctl.navigate_to_detail(id),
        }
    });
    console_log!("[CrudList] {} row regions bound", bound);
}

fn bind_row_buttons(list: &Rc<BrowserList>) {
    let config = list.config();

    let ctl = Rc::clone(list);
    dom::on_click_all(&config.delete_button_selector(), move |_, button| {
        let id = targets::bound_id(ctl.config(), &dom::ElementSnapshot::of(&button));
        let ctl = Rc::clone(&ctl);
        spawn_local(async move {
            ctl.delete_entity(id).await;
        });
    });

    let ctl = Rc::clone(list);
    dom::on_click_all(&config.edit_button_selector(), move |_, button| {
        let id = targets::bound_id(ctl.config(), &dom::ElementSnapshot::of(&button));
        ctl.open_edit_popup(id);
    });
}

fn bind_popups(list: &Rc<BrowserList>) {
    let config = list.config();

    let ctl = Rc::clone(list);
    dom::on_click_all(&format!("#{}", config.add_button_id()), move |_, _| {
        ctl.open_add_popup();
    });

    for popup in [Popup::Add, Popup::Edit] {
        let ctl = Rc::clone(list);
        let selector = format!("#{} {}", config.popup_id(popup), CLOSE_POPUP_SELECTOR);
        dom::on_click_all(&selector, move |_, _| ctl.close_popup(popup));
    }
}

fn bind_forms(list: &Rc<BrowserList>) {
    let config = list.config();

    let ctl = Rc::clone(list);
    let add_form = config.form_id(Popup::Add);
    let bound = dom::on_submit(&add_form, move |form| {
        let payload = FormPayload::from(dom::form_entries(&form));
        let ctl = Rc::clone(&ctl);
        spawn_local(async move {
            ctl.submit_add(payload).await;
        });
    });
    if !bound {
        console_warn!("[CrudList] no #{} on page", add_form);
    }

    let ctl = Rc::clone(list);
    let edit_form = config.form_id(Popup::Edit);
    let bound = dom::on_submit(&edit_form, move |form| {
        let payload = FormPayload::from(dom::form_entries(&form));
        let ctl = Rc::clone(&ctl);
        spawn_local(async move {
            ctl.submit_edit(payload).await;
        });
    });
    if !bound {
        console_warn!("[CrudList] no #{} on page", edit_form);
    }
}

fn bind_busy_controls(list: &Rc<BrowserList>) {
    let config = list.config();
    let actions = list.actions();

    dom::bind_disabled(config.submit_controls(Popup::Add), move || actions.is_busy(ActionKind::Add));
    dom::bind_disabled(config.submit_controls(Popup::Edit), move || actions.is_busy(ActionKind::Edit));
    dom::bind_disabled(config.delete_button_selector(), move || actions.is_busy(ActionKind::Delete));
}
