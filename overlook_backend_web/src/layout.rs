// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live layout reads from the browser.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Size;
use overlook_core::layout::{LayoutProvider, Section};
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement, Window};

/// [`LayoutProvider`] backed by the window and document.
///
/// Every call reads the DOM again; nothing is cached between scroll events,
/// so sections that grow after images load are picked up.
#[derive(Clone, Debug)]
pub struct DomLayout {
    window: Window,
    document: Document,
    sections: &'static str,
}

impl DomLayout {
    /// Creates a layout reader for sections matching `sections`.
    #[must_use]
    pub fn new(window: Window, document: Document, sections: &'static str) -> Self {
        Self {
            window,
            document,
            sections,
        }
    }

    /// The window being read.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }
}

fn js_f64(v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

impl LayoutProvider for DomLayout {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport(&self) -> Size {
        Size::new(
            js_f64(self.window.inner_width()),
            js_f64(self.window.inner_height()),
        )
    }

    fn sections(&self) -> Vec<Section> {
        let Ok(nodes) = self.document.query_selector_all(self.sections) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i)?.dyn_into::<HtmlElement>().ok())
            .map(|el| {
                let id: String = el.id();
                Section::new(
                    id,
                    f64::from(el.offset_top()),
                    f64::from(el.offset_height()),
                )
            })
            .collect()
    }

    fn element_top(&self, identifier: &str) -> Option<f64> {
        let el = self
            .document
            .get_element_by_id(identifier)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(f64::from(el.offset_top()))
    }
}
