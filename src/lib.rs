//! # sportsms-client
//!
//! Leptos + WASM frontend for the sports-management platform: role-gated
//! CRUD views over the REST API, with a client-side session subsystem
//! (token store, HTTP gateway, session state machine, route guard) as the
//! structural core.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
