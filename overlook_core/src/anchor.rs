// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth-scroll targets for in-page anchor links.

use crate::error::{ElementRole, SyncError};
use crate::layout::LayoutProvider;
use crate::nav::fragment_target;

/// Returns the scroll offset that brings the element named by `href` just
/// below the fixed header.
///
/// `href` must be an in-page fragment (`#id`). The result is the target's
/// top offset minus `header_allowance`, never negative.
///
/// # Errors
///
/// Returns [`SyncError::MissingElement`] if `href` is not a fragment or no
/// element carries that id.
pub fn scroll_target(
    href: &str,
    layout: &(impl LayoutProvider + ?Sized),
    header_allowance: f64,
) -> Result<f64, SyncError> {
    let missing = SyncError::MissingElement(ElementRole::AnchorTarget);
    let id = fragment_target(href).ok_or(missing)?;
    let top = layout.element_top(id).ok_or(missing)?;
    Ok((top - header_allowance).max(0.0))
}
