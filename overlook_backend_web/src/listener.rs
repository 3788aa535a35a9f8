// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event listener registrations that unregister on drop.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

type EventClosure = Closure<dyn FnMut(Event)>;

/// A DOM event listener bound to one target.
///
/// The JS closure lives as long as this value. Dropping it removes the
/// listener and frees the closure.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    closure: Option<EventClosure>,
}

impl EventListener {
    /// Registers `callback` for `event_type` on `target`.
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            closure: Some(closure),
        })
    }

    /// The event this listener handles.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event_type
    }

    /// Leaks the listener so it stays registered for the page's lifetime.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event_type, closure.as_ref().unchecked_ref());
        }
    }
}

impl core::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventListener")
            .field("event_type", &self.event_type)
            .field("registered", &self.closure.is_some())
            .finish()
    }
}
