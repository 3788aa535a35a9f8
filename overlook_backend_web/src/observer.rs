// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport intersection notifications.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` rooted at the viewport with no margin.
///
/// The callback receives each entry together with the observer so it can
/// stop observing elements that are done. Dropping the value disconnects
/// the observer and frees the closure.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _closure: ObserverClosure,
}

impl RevealObserver {
    /// Creates an observer that fires when an element crosses `threshold`.
    pub fn new(
        threshold: f64,
        mut callback: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        callback(&entry, &observer);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin("0px");
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _closure: closure,
        })
    }

    /// Starts watching `el`.
    pub fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl core::fmt::Debug for RevealObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RevealObserver").finish_non_exhaustive()
    }
}
