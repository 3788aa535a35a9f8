// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-event pipeline.
//!
//! A [`Synchronizer`] is constructed once at startup with the page's
//! navigation links and the number of revealable elements. Each scroll
//! event runs, synchronously and in this order:
//!
//! 1. [`ScrollState::sample`] reads the offset.
//! 2. [`navbar::is_scrolled`] decides the navbar style.
//! 3. [`locate`] finds the active section.
//! 4. [`apply_highlight`] flips navigation links.
//! 5. [`ParallaxRenderer::update`] computes hero transforms.
//!
//! The outcome is a [`ScrollFrame`] for the presenter. Intersection
//! notifications go through [`Synchronizer::on_intersect`], which only
//! touches reveal state, so the two paths never write the same data.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::SyncConfig;
use crate::error::{PageInventory, SyncError};
use crate::layout::{LayoutProvider, ScrollState};
use crate::locate::{biased_offset, locate};
use crate::nav::{NavChanges, NavLink, apply_highlight};
use crate::navbar;
use crate::parallax::{ParallaxFrame, ParallaxRates, ParallaxRenderer};
use crate::reveal::{RevealId, RevealState, RevealTransition, RevealTrigger};
use crate::trace::{
    NavChangeEvent, ParallaxEvent, RevealEvent, ScrollSampleEvent, SectionChangeEvent, Tracer,
};

/// Everything one scroll event decided.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Monotonic scroll-event counter, starting at 0.
    pub sequence: u64,
    /// Sanitized scroll offset.
    pub offset: f64,
    /// Whether the navbar should use its scrolled style.
    pub scrolled: bool,
    /// Whether `scrolled` differs from the previous frame. Always `true` on
    /// the first frame.
    pub scrolled_changed: bool,
    /// The active section, if any.
    pub active_section: Option<String>,
    /// Navigation links whose highlight flipped.
    pub nav_changes: NavChanges,
    /// New parallax values, or `None` if unchanged or disabled.
    pub parallax: Option<ParallaxFrame>,
}

/// Owns the scroll-derived UI state for one page.
#[derive(Clone, Debug)]
pub struct Synchronizer {
    config: SyncConfig,
    links: Vec<NavLink>,
    active: Option<String>,
    scrolled: Option<bool>,
    parallax: ParallaxRenderer,
    reveal: RevealTrigger,
    sequence: u64,
}

impl Synchronizer {
    /// Creates a synchronizer for `links` and `revealables` tagged elements.
    #[must_use]
    pub fn new(config: SyncConfig, links: Vec<NavLink>, revealables: u32) -> Self {
        Self {
            config,
            links,
            active: None,
            scrolled: None,
            parallax: ParallaxRenderer::new(ParallaxRates {
                primary: config.primary_rate,
                secondary: config.secondary_rate,
            }),
            reveal: RevealTrigger::new(revealables, config.reveal_threshold),
            sequence: 0,
        }
    }

    /// Creates a synchronizer whose links are built from `href` attributes.
    #[must_use]
    pub fn from_hrefs<'h>(
        config: SyncConfig,
        hrefs: impl IntoIterator<Item = &'h str>,
        revealables: u32,
    ) -> Self {
        let links = hrefs.into_iter().map(NavLink::from_href).collect();
        Self::new(config, links, revealables)
    }

    /// Runs the scroll pipeline against a fresh layout snapshot.
    pub fn on_scroll(
        &mut self,
        layout: &(impl LayoutProvider + ?Sized),
        tracer: &mut Tracer<'_>,
    ) -> ScrollFrame {
        let sequence = self.sequence;
        self.sequence += 1;

        let state = ScrollState::sample(layout);
        let sections = layout.sections();
        tracer.scroll_sample(&ScrollSampleEvent {
            sequence,
            offset: state.offset,
            biased_offset: biased_offset(state.offset, self.config.lookahead),
            section_count: u32::try_from(sections.len()).unwrap_or(u32::MAX),
        });

        let scrolled = navbar::is_scrolled(state.offset, self.config.scrolled_threshold);
        let scrolled_changed = self.scrolled != Some(scrolled);
        self.scrolled = Some(scrolled);

        let located = locate(state.offset, self.config.lookahead, &sections)
            .map(|s| s.identifier.clone());
        if located.is_none() {
            tracer.degraded(sequence, SyncError::NoActiveSection);
        }
        if located != self.active {
            tracer.section_change(&SectionChangeEvent {
                sequence,
                previous: self.active.as_deref(),
                current: located.as_deref(),
            });
            self.active = located;
        }

        let nav_changes = apply_highlight(self.active.as_deref(), &mut self.links);
        if !nav_changes.is_empty() {
            tracer.nav_change(&NavChangeEvent {
                sequence,
                activated: count(&nav_changes.activated),
                deactivated: count(&nav_changes.deactivated),
            });
        }

        let viewport_height = layout.viewport().height;
        let parallax = self.parallax.update(state.offset, viewport_height);
        if let Some(frame) = parallax {
            tracer.parallax(&ParallaxEvent {
                sequence,
                frame,
                pinned: ParallaxRenderer::is_pinned(state.offset, viewport_height),
            });
        }

        ScrollFrame {
            sequence,
            offset: state.offset,
            scrolled,
            scrolled_changed,
            active_section: self.active.clone(),
            nav_changes,
            parallax,
        }
    }

    /// Handles one intersection notification.
    ///
    /// Returns a transition the first time `element` crosses the reveal
    /// threshold; the caller should then stop observing it.
    pub fn on_intersect(
        &mut self,
        element: RevealId,
        ratio: f64,
        tracer: &mut Tracer<'_>,
    ) -> Option<RevealTransition> {
        let transition = self.reveal.on_intersect(element, ratio)?;
        tracer.reveal(&RevealEvent {
            element,
            ratio,
            pending: u32::try_from(self.reveal.pending()).unwrap_or(u32::MAX),
        });
        Some(transition)
    }

    /// Reports every element role absent from `inventory` as degraded work.
    ///
    /// Backends call this once after looking up the page's elements.
    pub fn report_inventory(&self, inventory: &PageInventory, tracer: &mut Tracer<'_>) {
        for role in inventory.missing() {
            tracer.degraded(self.sequence, SyncError::MissingElement(role));
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Navigation links in document order, with their current highlight.
    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// The section that was active after the last scroll event.
    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Reveal state of one element.
    #[must_use]
    pub fn reveal_state(&self, element: RevealId) -> Option<RevealState> {
        self.reveal.state(element)
    }

    /// All reveal state.
    #[must_use]
    pub fn reveal(&self) -> &RevealTrigger {
        &self.reveal
    }

    /// Number of scroll events processed.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

fn count(indices: &[usize]) -> u32 {
    u32::try_from(indices.len()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use core::cell::Cell;

    use kurbo::Size;

    use super::*;
    use crate::layout::Section;

    struct Page {
        offset: Cell<f64>,
        sections: Vec<Section>,
    }

    impl Page {
        fn new() -> Self {
            Self {
                offset: Cell::new(0.0),
                sections: vec![
                    Section::new("hero", 0.0, 800.0),
                    Section::new("about", 800.0, 600.0),
                    Section::new("history", 1400.0, 900.0),
                ],
            }
        }
    }

    impl LayoutProvider for Page {
        fn scroll_offset(&self) -> f64 {
            self.offset.get()
        }

        fn viewport(&self) -> Size {
            Size::new(1280.0, 800.0)
        }

        fn sections(&self) -> Vec<Section> {
            self.sections.clone()
        }

        fn element_top(&self, identifier: &str) -> Option<f64> {
            self.sections
                .iter()
                .find(|s| s.identifier == identifier)
                .map(|s| s.top_offset)
        }
    }

    fn sync() -> Synchronizer {
        Synchronizer::from_hrefs(SyncConfig::landing(), ["#about", "#history"], 4)
    }

    #[test]
    fn first_event_at_top() {
        let page = Page::new();
        let mut sync = sync();
        let frame = sync.on_scroll(&page, &mut Tracer::none());

        assert_eq!(frame.sequence, 0);
        assert!(!frame.scrolled);
        assert_eq!(frame.active_section.as_deref(), Some("hero"));
        assert!(frame.nav_changes.is_empty(), "no link targets the hero");
        let parallax = frame.parallax.expect("first frame is always emitted");
        assert_eq!(parallax.primary_opacity, 1.0);
    }

    #[test]
    fn scrolling_into_section_highlights_link() {
        let page = Page::new();
        let mut sync = sync();
        page.offset.set(750.0);
        let frame = sync.on_scroll(&page, &mut Tracer::none());

        assert!(frame.scrolled);
        assert_eq!(frame.active_section.as_deref(), Some("about"));
        assert_eq!(frame.nav_changes.activated, [0]);
        assert!(sync.links()[0].is_active);
        assert!(!sync.links()[1].is_active);
    }

    #[test]
    fn repeated_scroll_settles() {
        let page = Page::new();
        let mut sync = sync();
        page.offset.set(1500.0);
        let first = sync.on_scroll(&page, &mut Tracer::none());
        let second = sync.on_scroll(&page, &mut Tracer::none());

        assert_eq!(first.nav_changes.activated, [1]);
        assert!(second.nav_changes.is_empty());
        assert_eq!(second.parallax, None, "pinned frame is not re-emitted");
        assert_eq!(second.sequence, 1);
        assert_eq!(sync.sequence(), 2);
    }

    #[test]
    fn leaving_all_sections_clears_highlight() {
        let page = Page::new();
        let mut sync = sync();
        page.offset.set(1500.0);
        sync.on_scroll(&page, &mut Tracer::none());
        page.offset.set(5000.0);
        let frame = sync.on_scroll(&page, &mut Tracer::none());

        assert_eq!(frame.active_section, None);
        assert_eq!(frame.nav_changes.deactivated, [1]);
        assert!(sync.links().iter().all(|l| !l.is_active));
    }

    #[test]
    fn at_most_one_link_active() {
        let page = Page::new();
        let mut sync = sync();
        let mut offset = 0.0;
        while offset < 2600.0 {
            page.offset.set(offset);
            sync.on_scroll(&page, &mut Tracer::none());
            assert!(sync.links().iter().filter(|l| l.is_active).count() <= 1);
            offset += 45.0;
        }
    }

    #[test]
    fn navbar_flag_reports_flips_only() {
        let page = Page::new();
        let mut sync = sync();
        assert!(sync.on_scroll(&page, &mut Tracer::none()).scrolled_changed);
        page.offset.set(30.0);
        assert!(!sync.on_scroll(&page, &mut Tracer::none()).scrolled_changed);
        page.offset.set(120.0);
        let frame = sync.on_scroll(&page, &mut Tracer::none());
        assert!(frame.scrolled && frame.scrolled_changed);
        page.offset.set(400.0);
        assert!(!sync.on_scroll(&page, &mut Tracer::none()).scrolled_changed);
    }

    #[test]
    fn duplicate_link_targets_light_one_link() {
        let page = Page::new();
        let mut sync =
            Synchronizer::from_hrefs(SyncConfig::landing(), ["#about", "#about"], 0);
        page.offset.set(900.0);
        let frame = sync.on_scroll(&page, &mut Tracer::none());

        assert_eq!(frame.active_section.as_deref(), Some("about"));
        assert_eq!(frame.nav_changes.activated, [0]);
        assert_eq!(sync.links().iter().filter(|l| l.is_active).count(), 1);
    }

    #[test]
    fn link_active_in_markup_is_cleared_on_first_pass() {
        let page = Page::new();
        let links = vec![
            NavLink {
                is_active: true,
                ..NavLink::from_href("#about")
            },
            NavLink::from_href("#history"),
        ];
        let mut sync = Synchronizer::new(SyncConfig::landing(), links, 0);
        let frame = sync.on_scroll(&page, &mut Tracer::none());

        assert_eq!(frame.active_section.as_deref(), Some("hero"));
        assert_eq!(frame.nav_changes.deactivated, [0]);
        assert!(sync.links().iter().all(|l| !l.is_active));
    }

    #[test]
    fn intersection_reveals_once() {
        let mut sync = sync();
        assert!(sync.on_intersect(RevealId(1), 0.05, &mut Tracer::none()).is_none());
        assert!(sync.on_intersect(RevealId(1), 0.15, &mut Tracer::none()).is_some());
        assert!(sync.on_intersect(RevealId(1), 0.9, &mut Tracer::none()).is_none());
        assert_eq!(sync.reveal_state(RevealId(1)), Some(RevealState::Revealed));
        assert_eq!(sync.reveal().pending(), 3);
    }
}
