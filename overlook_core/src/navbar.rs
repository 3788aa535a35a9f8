// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navbar scrolled state.

/// Returns `true` once the page has scrolled strictly past `threshold`.
#[inline]
#[must_use]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}
