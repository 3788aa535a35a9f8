// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout snapshots and the provider seam.
//!
//! The synchronizer never caches geometry. Every scroll sample asks the
//! [`LayoutProvider`] for a fresh snapshot, so layout changes (font loads,
//! resizes, collapsing menus) are picked up on the next event.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};

/// A named region of the page with a vertical extent.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Unique identifier (the element `id`).
    pub identifier: String,
    /// Distance from the top of the document to the section's top edge.
    pub top_offset: f64,
    /// Vertical extent of the section.
    pub height: f64,
}

impl Section {
    /// Creates a section.
    #[must_use]
    pub fn new(identifier: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Self {
            identifier: identifier.into(),
            top_offset,
            height,
        }
    }

    /// Returns `true` if `y` lies in `[top_offset, top_offset + height)`.
    #[inline]
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top_offset && y < self.top_offset + self.height
    }

    /// Returns the section's document-space bounds for a page of `width`.
    #[must_use]
    pub fn bounds(&self, width: f64) -> Rect {
        Rect::new(0.0, self.top_offset, width, self.top_offset + self.height)
    }
}

/// The scroll position at the time of one sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Vertical scroll distance from the top of the document.
    pub offset: f64,
}

impl ScrollState {
    /// Reads the current scroll offset from `layout`.
    ///
    /// Never fails: offsets that are negative (rubber-band overscroll) or not
    /// finite read as `0`.
    #[must_use]
    pub fn sample(layout: &(impl LayoutProvider + ?Sized)) -> Self {
        Self {
            offset: sanitize_offset(layout.scroll_offset()),
        }
    }
}

fn sanitize_offset(raw: f64) -> f64 {
    if raw.is_finite() { raw.max(0.0) } else { 0.0 }
}

/// Read-only view of the live page geometry.
///
/// The browser implementation reads `window.scrollY`, `innerWidth` /
/// `innerHeight`, and `section[id]` offsets. Tests use a simulated page.
pub trait LayoutProvider {
    /// Current vertical scroll distance from the top of the document.
    fn scroll_offset(&self) -> f64;

    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// All sections in document order.
    fn sections(&self) -> Vec<Section>;

    /// Document-space top offset of the element with the given id, if any.
    fn element_top(&self, identifier: &str) -> Option<f64>;
}

/// Returns the viewport rectangle in document space for a scroll offset.
#[must_use]
pub fn viewport_rect(scroll_offset: f64, viewport: Size) -> Rect {
    Rect::from_origin_size((0.0, scroll_offset), viewport)
}
