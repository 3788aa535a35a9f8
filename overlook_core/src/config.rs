// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning constants for the synchronizer.
//!
//! All distances are CSS pixels. [`SyncConfig::landing`] reproduces the
//! values the landing page was designed around; individual fields can be
//! overridden for other layouts.

/// Lookahead added to the scroll offset before section containment.
pub const LOOKAHEAD: f64 = 100.0;

/// Visible fraction at which a hidden element is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Hero content shift per scrolled pixel.
pub const PRIMARY_RATE: f64 = 0.3;

/// Decorative silhouette shift per scrolled pixel.
pub const SECONDARY_RATE: f64 = 0.1;

/// Scroll offset past which the navbar is drawn in its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Header allowance subtracted from anchor scroll targets.
pub const ANCHOR_OFFSET: f64 = 80.0;

/// Widest viewport for which a nav click closes the mobile menu.
pub const MENU_BREAKPOINT: f64 = 1024.0;

/// Configuration for the [`Synchronizer`](crate::sync::Synchronizer) and the
/// utility state machines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyncConfig {
    /// Lookahead bias for section detection.
    pub lookahead: f64,
    /// Intersection ratio at which an element reveals (0.0–1.0).
    pub reveal_threshold: f64,
    /// Parallax rate for the primary (hero) element.
    pub primary_rate: f64,
    /// Parallax rate for the secondary (decorative) element.
    pub secondary_rate: f64,
    /// Offset above which the navbar counts as scrolled (strictly greater).
    pub scrolled_threshold: f64,
    /// Distance kept clear above an anchor target after a smooth scroll.
    pub anchor_offset: f64,
    /// Viewport width at or below which the mobile menu is in use.
    pub menu_breakpoint: f64,
}

impl SyncConfig {
    /// The values the landing page ships with.
    #[must_use]
    pub const fn landing() -> Self {
        Self {
            lookahead: LOOKAHEAD,
            reveal_threshold: REVEAL_THRESHOLD,
            primary_rate: PRIMARY_RATE,
            secondary_rate: SECONDARY_RATE,
            scrolled_threshold: SCROLLED_THRESHOLD,
            anchor_offset: ANCHOR_OFFSET,
            menu_breakpoint: MENU_BREAKPOINT,
        }
    }

    /// Returns a copy with a different reveal threshold, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_reveal_threshold(self, threshold: f64) -> Self {
        Self {
            reveal_threshold: threshold.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Returns a copy with a different lookahead bias.
    #[must_use]
    pub const fn with_lookahead(self, lookahead: f64) -> Self {
        Self { lookahead, ..self }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::landing()
    }
}
