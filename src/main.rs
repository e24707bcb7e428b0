//! Workout list page frontend entry point
//!
//! Loaded at the end of a server-rendered routine or exercise list page.

#[macro_use]
mod logging;

mod models;
mod config;
mod context;
mod commands;
mod page;
mod targets;
mod controller;
mod bindings;

use leptos::prelude::*;
use any_spawner::Executor;

fn main() {
    console_error_panic_hook::set_once();
    let _ = Executor::init_wasm_bindgen();

    // Root of the reactive tree; lives as long as the page.
    let owner = Owner::new();
    owner.set();

    leptos_dom_bind::on_ready(start);

    std::mem::forget(owner);
}

fn start() {
    let entity = leptos_dom_bind::body_attr(config::ENTITY_ATTR);
    let overrides = leptos_dom_bind::text_of(config::OVERRIDE_SCRIPT_ID);
    match config::load(entity.as_deref(), overrides.as_deref()) {
        Ok(config) => {
            let list = bindings::initialize(config);
            console_log!("[CrudList] {} list ready", list.config().entity_name);
        }
        Err(e) => console_error!("[CrudList] not started: {}", e),
    }
}
