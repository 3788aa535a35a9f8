// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for overlook.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomLayout`]: scroll offset, viewport, and section geometry read from
//!   the live document
//! - [`DomPresenter`]: class toggles and inline styles written back
//! - [`RevealObserver`]: `IntersectionObserver` notifications
//! - [`EventListener`]: listener registrations released on drop
//! - [`LandingPage`]: all of the above wired to one
//!   [`Synchronizer`](overlook_core::sync::Synchronizer)
//!
//! The [`main`] entry point attaches to the landing page once the document
//! has been parsed and fades the page in once it has loaded.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

#[cfg(feature = "trace")]
mod console;
mod layout;
mod listener;
mod menu;
mod observer;
mod page;
mod presenter;
pub mod selectors;
pub mod styles;

#[cfg(feature = "trace")]
pub use console::ConsoleSink;
pub use layout::DomLayout;
pub use listener::EventListener;
pub use menu::MenuView;
pub use observer::RevealObserver;
pub use overlook_core::backend::Presenter;
pub use page::LandingPage;
pub use presenter::DomPresenter;
pub use selectors::PageSelectors;

use overlook_core::config::SyncConfig;
use wasm_bindgen::prelude::*;
use web_sys::Event;

/// Attaches [`LandingPage`] with the shipped selectors and configuration.
///
/// Runs immediately if the document has been parsed, otherwise on
/// `DOMContentLoaded`. Also adds the page fade-in on `load`.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let load_document = document.clone();
    EventListener::new(&window, "load", move |_event: Event| {
        if let Err(e) = styles::mark_loaded(&load_document) {
            wasm_bindgen::throw_val(e);
        }
    })?
    .forget();

    if is_loading(&document.ready_state()) {
        let ready_window = window.clone();
        let ready_document = document.clone();
        EventListener::new(&document, "DOMContentLoaded", move |_event: Event| {
            if let Err(e) = attach(ready_window.clone(), ready_document.clone()) {
                wasm_bindgen::throw_val(e);
            }
        })?
        .forget();
        Ok(())
    } else {
        attach(window, document)
    }
}

/// Whether `document.readyState` says parsing is still in progress.
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn attach(window: web_sys::Window, document: web_sys::Document) -> Result<(), JsValue> {
    let page = LandingPage::attach(
        window,
        document,
        PageSelectors::landing(),
        SyncConfig::landing(),
    )?;
    core::mem::forget(page);
    Ok(())
}
