// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless simulated page for driving the synchronizer in tests.
//!
//! - [`SimulatedPage`] implements [`LayoutProvider`] over stacked sections
//!   and computes intersection ratios for revealable boxes the way a
//!   viewport-intersection observer with no root margin would.
//! - [`RecordingPresenter`] implements [`Presenter`] and keeps the last
//!   applied value of every flag and style.
//! - [`Harness`] wires both to a [`Synchronizer`] and replays the event
//!   order a browser uses: scroll handling first, then intersection
//!   notifications.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use overlook_core::anchor::scroll_target;
use overlook_core::backend::Presenter;
use overlook_core::config::SyncConfig;
use overlook_core::error::{PageInventory, SyncError};
use overlook_core::layout::{LayoutProvider, Section, viewport_rect};
use overlook_core::menu::{HamburgerPose, MenuState};
use overlook_core::reveal::{RevealId, RevealState, RevealTransition, intersection_ratio};
use overlook_core::sync::{ScrollFrame, Synchronizer};
use overlook_core::trace::{TraceSink, Tracer};

/// A page made of vertically stacked sections.
#[derive(Clone, Debug)]
pub struct SimulatedPage {
    scroll: f64,
    viewport: Size,
    sections: Vec<Section>,
    revealables: Vec<Rect>,
    document_height: f64,
}

impl SimulatedPage {
    /// Creates an empty page.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            scroll: 0.0,
            viewport,
            sections: Vec::new(),
            revealables: Vec::new(),
            document_height: 0.0,
        }
    }

    /// Appends a section below the existing ones.
    #[must_use]
    pub fn with_section(mut self, identifier: impl Into<String>, height: f64) -> Self {
        let top = self.document_height;
        self.sections.push(Section::new(identifier, top, height));
        self.document_height += height;
        self
    }

    /// Appends a footer (content that belongs to no section).
    #[must_use]
    pub fn with_footer(mut self, height: f64) -> Self {
        self.document_height += height;
        self
    }

    /// Adds a revealable box at document-space `bounds`.
    #[must_use]
    pub fn with_revealable(mut self, bounds: Rect) -> Self {
        self.revealables.push(bounds);
        self
    }

    /// Adds `count` cards of `size` spread evenly down the named section.
    ///
    /// Unknown section names add nothing.
    #[must_use]
    pub fn with_cards(mut self, section: &str, count: u32, size: Size) -> Self {
        let Some(s) = self.sections.iter().find(|s| s.identifier == section) else {
            return self;
        };
        let step = s.height / f64::from(count + 1);
        let top = s.top_offset;
        for i in 1..=count {
            let y = top + step * f64::from(i) - size.height / 2.0;
            self.revealables
                .push(Rect::from_origin_size((40.0, y), size));
        }
        self
    }

    /// A page shaped like the shipped landing page.
    #[must_use]
    pub fn landing(viewport: Size) -> Self {
        let card = Size::new(320.0, 240.0);
        Self::new(viewport)
            .with_section("hero", viewport.height)
            .with_section("about", 900.0)
            .with_section("history", 1400.0)
            .with_section("economy", 800.0)
            .with_section("cuisine", 1000.0)
            .with_section("places", 1100.0)
            .with_section("universities", 700.0)
            .with_section("culture", 900.0)
            .with_footer(300.0)
            .with_cards("about", 3, card)
            .with_cards("history", 4, card)
            .with_cards("cuisine", 3, card)
            .with_cards("places", 3, card)
            .with_cards("culture", 2, card)
    }

    /// Hrefs of the navigation links the landing page carries.
    #[must_use]
    pub fn landing_hrefs() -> [&'static str; 7] {
        [
            "#about",
            "#history",
            "#economy",
            "#cuisine",
            "#places",
            "#universities",
            "#culture",
        ]
    }

    /// Scrolls to `offset`, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll = offset.clamp(0.0, self.max_scroll());
    }

    /// Changes the viewport size, re-clamping the scroll offset.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.scroll = self.scroll.clamp(0.0, self.max_scroll());
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }

    /// Total document height.
    #[must_use]
    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    /// Number of revealable boxes.
    #[must_use]
    pub fn revealable_count(&self) -> u32 {
        u32::try_from(self.revealables.len()).unwrap_or(u32::MAX)
    }

    /// Current intersection ratio of every revealable box, in id order.
    #[must_use]
    pub fn intersections(&self) -> Vec<(RevealId, f64)> {
        let view = viewport_rect(self.scroll, self.viewport);
        self.revealables
            .iter()
            .zip(0_u32..)
            .map(|(bounds, i)| (RevealId(i), intersection_ratio(*bounds, view)))
            .collect()
    }
}

impl LayoutProvider for SimulatedPage {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport(&self) -> Size {
        self.viewport
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

/// A [`Presenter`] that remembers what it was told.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    /// Whether the navbar carries its scrolled style.
    pub navbar_scrolled: bool,
    /// Highlight per navigation link.
    pub active_links: Vec<bool>,
    /// Last `transform` written to the hero content.
    pub hero_transform: Option<String>,
    /// Last opacity written to the hero content.
    pub hero_opacity: Option<f64>,
    /// Last `transform` written to the silhouette.
    pub mountains_transform: Option<String>,
    /// Revealed elements in the order they revealed.
    pub revealed: Vec<RevealId>,
    /// Number of frames applied.
    pub frames: usize,
    /// Number of individual style or class writes performed.
    pub writes: usize,
}

impl RecordingPresenter {
    /// Creates a presenter for `links` navigation links.
    #[must_use]
    pub fn new(links: usize) -> Self {
        Self {
            active_links: alloc::vec![false; links],
            ..Self::default()
        }
    }

    /// Indices of highlighted links.
    #[must_use]
    pub fn highlighted(&self) -> Vec<usize> {
        self.active_links
            .iter()
            .enumerate()
            .filter_map(|(i, on)| on.then_some(i))
            .collect()
    }

    fn set_link(&mut self, idx: usize, on: bool) {
        if let Some(slot) = self.active_links.get_mut(idx) {
            *slot = on;
            self.writes += 1;
        }
    }
}

impl Presenter for RecordingPresenter {
    fn apply(&mut self, frame: &ScrollFrame) {
        self.frames += 1;
        if frame.scrolled_changed {
            self.navbar_scrolled = frame.scrolled;
            self.writes += 1;
        }

        for &idx in &frame.nav_changes.deactivated {
            self.set_link(idx, false);
        }
        for &idx in &frame.nav_changes.activated {
            self.set_link(idx, true);
        }

        if let Some(p) = frame.parallax {
            self.hero_transform = Some(p.primary_transform());
            self.hero_opacity = Some(p.primary_opacity);
            self.mountains_transform = Some(p.secondary_transform());
            self.writes += 3;
        }
    }

    fn reveal(&mut self, transition: &RevealTransition) {
        self.revealed.push(transition.element);
        self.writes += 1;
    }
}

/// A synchronizer, a simulated page, and a recording presenter.
#[derive(Debug)]
pub struct Harness {
    /// The page being scrolled.
    pub page: SimulatedPage,
    /// The system under test.
    pub sync: Synchronizer,
    /// What the page would look like.
    pub presenter: RecordingPresenter,
    /// Mobile menu state.
    pub menu: MenuState,
    /// Intersection notifications delivered so far.
    pub notifications: usize,
}

impl Harness {
    /// Builds a harness for `page` with the given link hrefs.
    #[must_use]
    pub fn new<'h>(
        config: SyncConfig,
        page: SimulatedPage,
        hrefs: impl IntoIterator<Item = &'h str>,
    ) -> Self {
        let sync = Synchronizer::from_hrefs(config, hrefs, page.revealable_count());
        let presenter = RecordingPresenter::new(sync.links().len());
        Self {
            page,
            sync,
            presenter,
            menu: MenuState::new(),
            notifications: 0,
        }
    }

    /// The shipped landing page at `viewport`.
    #[must_use]
    pub fn landing(viewport: Size) -> Self {
        Self::new(
            SyncConfig::landing(),
            SimulatedPage::landing(viewport),
            SimulatedPage::landing_hrefs(),
        )
    }

    /// Scrolls and dispatches the resulting events.
    pub fn scroll_to(&mut self, offset: f64) -> ScrollFrame {
        self.scroll_to_traced(offset, &mut Tracer::none())
    }

    /// Scrolls and dispatches the resulting events, reporting to `sink`.
    pub fn scroll_to_with_sink(&mut self, offset: f64, sink: &mut dyn TraceSink) -> ScrollFrame {
        self.scroll_to_traced(offset, &mut Tracer::new(sink))
    }

    fn scroll_to_traced(&mut self, offset: f64, tracer: &mut Tracer<'_>) -> ScrollFrame {
        self.page.scroll_to(offset);
        let frame = self.sync.on_scroll(&self.page, tracer);
        self.presenter.apply(&frame);
        self.dispatch_intersections(tracer);
        frame
    }

    /// Delivers the current intersection ratios without scrolling (as an
    /// observer does right after it starts observing).
    pub fn observe(&mut self) {
        self.dispatch_intersections(&mut Tracer::none());
    }

    // Revealed elements are unobserved, so they get no further notifications.
    fn dispatch_intersections(&mut self, tracer: &mut Tracer<'_>) {
        for (id, ratio) in self.page.intersections() {
            if self.sync.reveal_state(id) != Some(RevealState::Hidden) {
                continue;
            }
            self.notifications += 1;
            if let Some(t) = self.sync.on_intersect(id, ratio, tracer) {
                self.presenter.reveal(&t);
            }
        }
    }

    /// The elements this harness stands in for: all of them, with one link
    /// per href and one revealable per page box.
    #[must_use]
    pub fn inventory(&self) -> PageInventory {
        PageInventory {
            navbar: true,
            menu_toggle: true,
            menu: true,
            nav_links: self.sync.links().len(),
            hero: true,
            mountains: true,
            revealables: self.page.revealable_count() as usize,
        }
    }

    /// Reports the roles absent from `inventory` to `sink`, as a backend
    /// does after looking up the page's elements.
    pub fn report_inventory(&self, inventory: &PageInventory, sink: &mut dyn TraceSink) {
        self.sync.report_inventory(inventory, &mut Tracer::new(sink));
    }

    /// Toggles the mobile menu.
    pub fn toggle_menu(&mut self) -> HamburgerPose {
        self.menu.toggle()
    }

    /// Follows a navigation link: scrolls to its target (if present) and
    /// closes the mobile menu on narrow viewports.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingElement`] if the link target is absent;
    /// the menu is closed regardless.
    pub fn click_link(&mut self, href: &str) -> Result<ScrollFrame, SyncError> {
        let config = *self.sync.config();
        let target = scroll_target(href, &self.page, config.anchor_offset);
        self.menu
            .close(self.page.viewport().width, config.menu_breakpoint);
        Ok(self.scroll_to(target?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_stack_without_gaps() {
        let page = SimulatedPage::landing(Size::new(1280.0, 800.0));
        let sections = page.sections();
        for pair in sections.windows(2) {
            assert_eq!(pair[0].top_offset + pair[0].height, pair[1].top_offset);
        }
        assert_eq!(page.document_height(), 800.0 + 6800.0 + 300.0);
    }

    #[test]
    fn scroll_is_clamped_to_document() {
        let mut page = SimulatedPage::landing(Size::new(1280.0, 800.0));
        page.scroll_to(1.0e9);
        assert_eq!(page.scroll_offset(), page.max_scroll());
        page.scroll_to(-50.0);
        assert_eq!(page.scroll_offset(), 0.0);
    }

    #[test]
    fn cards_start_below_the_fold() {
        let page = SimulatedPage::landing(Size::new(1280.0, 800.0));
        assert_eq!(page.revealable_count(), 15);
        assert!(page.intersections().iter().all(|&(_, r)| r == 0.0));
    }

    #[test]
    fn unknown_section_adds_no_cards() {
        let page = SimulatedPage::new(Size::new(800.0, 600.0))
            .with_section("a", 600.0)
            .with_cards("missing", 3, Size::new(10.0, 10.0));
        assert_eq!(page.revealable_count(), 0);
    }
}
