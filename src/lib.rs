//! # session-gate
//!
//! Leptos + WASM front-end shell that decides, at boot and on every
//! navigation, which screen group a visitor may land on.
//!
//! A one-shot identity check (`auth::resolver`) settles the session into
//! `Authenticated` or `Unauthenticated`. The route gate (`auth::gate`) is a
//! pure function of that state and the current location; `app::RouteGate`
//! is the thin adapter that applies its decisions to the router.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
