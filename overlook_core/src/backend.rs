// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for presentation media.
//!
//! Overlook splits medium-specific work into *backend* crates. Each backend
//! provides:
//!
//! - **Layout**: A [`LayoutProvider`](crate::layout::LayoutProvider) that
//!   reads scroll offset, viewport size, and section geometry.
//!
//! - **Event sources**: Scroll and intersection listeners. These are not
//!   abstracted by a trait because their setup and lifecycle are entirely
//!   medium-specific.
//!
//! - **Presenter**: Implements [`Presenter`] to write results (class
//!   toggles, transforms, opacity) into the medium.
//!
//! # Crate boundaries
//!
//! `overlook_core` owns the state model, the per-event pipeline, and this
//! contract module. Backend crates depend on it and provide glue.

use crate::reveal::RevealTransition;
use crate::sync::ScrollFrame;

/// Applies synchronizer results to a presentation medium.
///
/// Both the DOM presenter and test recorders implement this trait.
///
/// # Event handler pseudocode
///
/// ```rust,ignore
/// fn on_scroll() {
///     let frame = sync.on_scroll(&layout, &mut tracer);
///     presenter.apply(&frame);
/// }
///
/// fn on_intersection(id: RevealId, ratio: f64) {
///     if let Some(t) = sync.on_intersect(id, ratio, &mut tracer) {
///         presenter.reveal(&t);
///         // and stop observing the element
///     }
/// }
/// ```
pub trait Presenter {
    /// Applies the outcome of one scroll event.
    fn apply(&mut self, frame: &ScrollFrame);

    /// Applies a one-time reveal.
    fn reveal(&mut self, transition: &RevealTransition);
}
