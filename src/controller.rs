//! CRUD List Controller
//!
//! Row navigation, add/edit popups and deletes for one entity kind.
//! Every successful mutation reloads the page; every failure alerts and
//! leaves the page as it was.

use leptos::prelude::Owner;

use crate::commands::{self, Transport, TransportError};
use crate::config::EntityConfig;
use crate::context::ActionSignals;
use crate::models::{ActionKind, CsrfToken, DeleteFailure, DeleteResponse, EntityRef, FormPayload, Popup};
use crate::page::Page;

/// What a finished request does to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reload,
    Alert(String),
}

/// Create/update: any answer at all counts as success
pub fn interpret_submit(kind: ActionKind, result: Result<(), TransportError>) -> Outcome {
    match result {
        Ok(()) => Outcome::Reload,
        Err(_) => Outcome::Alert(kind.transport_failure_message().to_string()),
    }
}

pub fn interpret_delete(config: &EntityConfig, result: Result<DeleteResponse, TransportError>) -> Outcome {
    match result {
        Ok(resp) if resp.success => Outcome::Reload,
        Ok(resp) => {
            let failure = DeleteFailure::classify(resp.reason.as_deref(), &config.not_found_reason);
            console_warn!(
                "[CrudList] delete refused: {}",
                failure.code(&config.not_found_reason).unwrap_or("no reason given")
            );
            Outcome::Alert(failure.message(&config.entity_name))
        }
        Err(e) => {
            console_error!("[CrudList] delete failed: {}", e);
            Outcome::Alert(ActionKind::Delete.transport_failure_message().to_string())
        }
    }
}

pub struct CrudList<P, T> {
    // owns the action signals; they are disposed with the list
    owner: Owner,
    config: EntityConfig,
    token: Option<CsrfToken>,
    actions: ActionSignals,
    page: P,
    transport: T,
}

impl<P: Page, T: Transport> CrudList<P, T> {
    pub fn new(config: EntityConfig, token: Option<CsrfToken>, page: P, transport: T) -> Self {
        if token.is_none() {
            console_warn!("[CrudList] no anti-forgery token on page; deletes are disabled");
        }
        let owner = Owner::new();
        let actions = owner.with(ActionSignals::new);
        Self {
            owner,
            config,
            token,
            actions,
            page,
            transport,
        }
    }

    pub fn config(&self) -> &EntityConfig {
        &self.config
    }

    pub fn actions(&self) -> ActionSignals {
        self.actions
    }

    /// Reactive owner of this list; effects that read its state belong here
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    #[cfg(test)]
    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn navigate_to_detail(&self, id: Option<EntityRef>) {
        let Some(id) = id else {
            console_warn!("[CrudList] row without {}, not navigating", self.config.id_attr());
            return;
        };
        self.page.navigate(&self.config.detail_url(&id));
    }

    pub fn open_add_popup(&self) {
        self.page.show(&self.config.popup_id(Popup::Add));
    }

    pub fn open_edit_popup(&self, id: Option<EntityRef>) {
        let Some(id) = id else {
            console_warn!("[CrudList] edit button without {}", self.config.id_attr());
            return;
        };
        let input = self.config.edit_id_input();
        if !self.page.set_value(&input, id.as_str()) {
            console_error!("[CrudList] edit form has no #{} field", input);
            return;
        }
        self.page.show(&self.config.popup_id(Popup::Edit));
    }

    /// Hide a popup; entered values stay as they are
    pub fn close_popup(&self, popup: Popup) {
        self.page.hide(&self.config.popup_id(popup));
    }

    pub async fn submit_add(&self, payload: FormPayload) {
        self.submit(ActionKind::Add, &self.config.add_path, payload).await;
    }

    pub async fn submit_edit(&self, payload: FormPayload) {
        self.submit(ActionKind::Edit, &self.config.edit_path, payload).await;
    }

    async fn submit(&self, kind: ActionKind, path: &str, payload: FormPayload) {
        if !self.actions.try_begin(kind) {
            console_log!("[CrudList] {:?} already in flight, ignoring", kind);
            return;
        }
        console_log!("[CrudList] POST {}", path);
        let result = commands::submit_form(&self.transport, path, &payload).await;
        if let Err(e) = &result {
            console_error!("[CrudList] {:?} failed: {}", kind, e);
        }
        self.apply(kind, interpret_submit(kind, result));
    }

    pub async fn delete_entity(&self, id: Option<EntityRef>) {
        let Some(id) = id else {
            console_warn!("[CrudList] delete button without {}", self.config.id_attr());
            return;
        };
        let Some(token) = self.token.as_ref() else {
            console_warn!("[CrudList] refusing to delete {} without a token", id);
            self.page.alert(&DeleteFailure::Other(None).message(&self.config.entity_name));
            return;
        };
        if !self.actions.try_begin(ActionKind::Delete) {
            console_log!("[CrudList] delete already in flight, ignoring {}", id);
            return;
        }
        console_log!("[CrudList] POST {} ({}={})", self.config.delete_path, self.config.id_field, id);
        let result = commands::delete_entity(&self.transport, &self.config, &id, token).await;
        self.apply(ActionKind::Delete, interpret_delete(&self.config, result));
    }

    fn apply(&self, kind: ActionKind, outcome: Outcome) {
        match outcome {
            // state stays Submitting until the new document replaces this one
            Outcome::Reload => self.page.reload(),
            Outcome::Alert(message) => {
                self.page.alert(&message);
                self.actions.finish(kind);
            }
        }
    }
}
