// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-proportional parallax for the hero block.
//!
//! [`compute_offsets`] is the pure mapping. [`ParallaxRenderer`] adds the
//! behavior past the first screen: once the scroll offset reaches the
//! viewport height the effect is pinned at its boundary frame (full shift,
//! zero opacity), so a fast jump past the hero never leaves it half faded.
//! The renderer also remembers the last frame it produced and returns
//! `None` when nothing changed, which keeps presenters from rewriting
//! identical styles on every scroll event below the fold.

use alloc::format;
use alloc::string::String;

/// Transform and opacity values for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    /// Vertical shift of the primary (hero content) element.
    pub primary_shift: f64,
    /// Vertical shift of the secondary (silhouette) element.
    pub secondary_shift: f64,
    /// Opacity of the primary element (0.0–1.0).
    pub primary_opacity: f64,
}

impl ParallaxFrame {
    /// CSS `transform` value for the primary element.
    #[must_use]
    pub fn primary_transform(&self) -> String {
        translate_y(self.primary_shift)
    }

    /// CSS `transform` value for the secondary element.
    #[must_use]
    pub fn secondary_transform(&self) -> String {
        translate_y(self.secondary_shift)
    }
}

/// Formats a vertical CSS translation.
#[must_use]
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

/// Per-pixel shift rates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxRates {
    /// Primary element shift per scrolled pixel.
    pub primary: f64,
    /// Secondary element shift per scrolled pixel.
    pub secondary: f64,
}

impl Default for ParallaxRates {
    fn default() -> Self {
        Self {
            primary: crate::config::PRIMARY_RATE,
            secondary: crate::config::SECONDARY_RATE,
        }
    }
}

/// Maps a scroll offset to parallax values.
///
/// Only meaningful while `scroll_offset < viewport_height`; see
/// [`ParallaxRenderer`] for what happens beyond.
#[must_use]
pub fn compute_offsets(
    scroll_offset: f64,
    viewport_height: f64,
    rates: ParallaxRates,
) -> ParallaxFrame {
    ParallaxFrame {
        primary_shift: scroll_offset * rates.primary,
        secondary_shift: scroll_offset * rates.secondary,
        primary_opacity: (1.0 - scroll_offset / viewport_height).clamp(0.0, 1.0),
    }
}

/// Stateful wrapper around [`compute_offsets`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ParallaxRenderer {
    rates: ParallaxRates,
    last: Option<ParallaxFrame>,
}

impl ParallaxRenderer {
    /// Creates a renderer with the given rates.
    #[must_use]
    pub const fn new(rates: ParallaxRates) -> Self {
        Self { rates, last: None }
    }

    /// Computes the frame for `scroll_offset`.
    ///
    /// Returns `None` if the viewport has no usable height or the frame is
    /// identical to the previous one. Offsets at or past `viewport_height`
    /// produce the boundary frame.
    pub fn update(&mut self, scroll_offset: f64, viewport_height: f64) -> Option<ParallaxFrame> {
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            return None;
        }
        let effective = scroll_offset.clamp(0.0, viewport_height);
        let frame = compute_offsets(effective, viewport_height, self.rates);
        if self.last == Some(frame) {
            return None;
        }
        self.last = Some(frame);
        Some(frame)
    }

    /// The most recently produced frame.
    #[must_use]
    pub fn last(&self) -> Option<ParallaxFrame> {
        self.last
    }

    /// Returns `true` if `scroll_offset` is past the region the effect animates.
    #[must_use]
    pub fn is_pinned(scroll_offset: f64, viewport_height: f64) -> bool {
        scroll_offset >= viewport_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(offset: f64, height: f64) -> ParallaxFrame {
        compute_offsets(offset, height, ParallaxRates::default())
    }

    #[test]
    fn top_of_page_is_opaque() {
        for h in [1.0, 480.0, 800.0, 2160.0] {
            let f = frame(0.0, h);
            assert_eq!(f.primary_opacity, 1.0);
            assert_eq!(f.primary_shift, 0.0);
            assert_eq!(f.secondary_shift, 0.0);
        }
    }

    #[test]
    fn one_screen_down_is_transparent() {
        for h in [1.0, 480.0, 800.0, 2160.0] {
            assert_eq!(frame(h, h).primary_opacity, 0.0);
        }
    }

    #[test]
    fn shifts_follow_rates() {
        let f = frame(200.0, 800.0);
        assert_eq!(f.primary_shift, 60.0);
        assert_eq!(f.secondary_shift, 20.0);
        assert_eq!(f.primary_opacity, 0.75);
    }

    #[test]
    fn transforms_are_css() {
        let f = frame(200.0, 800.0);
        assert_eq!(f.primary_transform(), "translateY(60px)");
        assert_eq!(f.secondary_transform(), "translateY(20px)");
        assert_eq!(translate_y(12.5), "translateY(12.5px)");
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(frame(1600.0, 800.0).primary_opacity, 0.0);
        assert_eq!(frame(-100.0, 800.0).primary_opacity, 1.0);
    }

    #[test]
    fn renderer_pins_to_boundary() {
        let mut r = ParallaxRenderer::default();
        let boundary = r.update(5000.0, 800.0).expect("first frame");
        assert_eq!(boundary, frame(800.0, 800.0));
        assert!(ParallaxRenderer::is_pinned(5000.0, 800.0));
    }

    #[test]
    fn renderer_skips_unchanged_frames() {
        let mut r = ParallaxRenderer::default();
        assert!(r.update(100.0, 800.0).is_some());
        assert!(r.update(100.0, 800.0).is_none());
        assert!(r.update(900.0, 800.0).is_some());
        assert!(r.update(1200.0, 800.0).is_none(), "still pinned");
        assert!(r.update(300.0, 800.0).is_some());
        assert_eq!(r.last(), Some(frame(300.0, 800.0)));
    }

    #[test]
    fn renderer_disabled_without_viewport() {
        let mut r = ParallaxRenderer::default();
        assert!(r.update(100.0, 0.0).is_none());
        assert!(r.update(100.0, f64::NAN).is_none());
        assert_eq!(r.last(), None);
    }
}
