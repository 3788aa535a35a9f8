// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM presentation.
//!
//! Applies [`ScrollFrame`]s and [`RevealTransition`]s to live elements. Only
//! what a frame reports as changed is written: the navbar class follows
//! `scrolled_changed`, link classes follow the frame's
//! [`NavChanges`](overlook_core::nav::NavChanges), and the hero styles are
//! skipped when the frame carries no parallax values.

use alloc::format;
use alloc::vec::Vec;

use overlook_core::backend::Presenter;
use overlook_core::reveal::RevealTransition;
use overlook_core::sync::ScrollFrame;
use web_sys::{Element, HtmlElement};

/// Class toggled on the navbar once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Class toggled on the highlighted navigation link.
pub const ACTIVE_CLASS: &str = "active";
/// Class that starts the reveal animation.
pub const REVEAL_CLASS: &str = "animate-in";

/// Writes synchronizer results into the DOM.
///
/// Every element is optional. A page without a hero simply gets no parallax
/// writes.
pub struct DomPresenter {
    navbar: Option<Element>,
    links: Vec<Element>,
    hero: Option<HtmlElement>,
    mountains: Option<HtmlElement>,
    revealables: Vec<Element>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("navbar", &self.navbar.is_some())
            .field("links_len", &self.links.len())
            .field("hero", &self.hero.is_some())
            .field("mountains", &self.mountains.is_some())
            .field("revealables_len", &self.revealables.len())
            .finish()
    }
}

impl DomPresenter {
    /// Creates a presenter over the given elements.
    ///
    /// `links` must be in the same order as the synchronizer's links, and
    /// `revealables` in [`RevealId`](overlook_core::reveal::RevealId) order.
    #[must_use]
    pub fn new(
        navbar: Option<Element>,
        links: Vec<Element>,
        hero: Option<HtmlElement>,
        mountains: Option<HtmlElement>,
        revealables: Vec<Element>,
    ) -> Self {
        Self {
            navbar,
            links,
            hero,
            mountains,
            revealables,
        }
    }

    /// The revealable element with the given index.
    #[must_use]
    pub fn revealable(&self, idx: u32) -> Option<&Element> {
        self.revealables.get(idx as usize)
    }

    /// Index of `el` among the revealable elements.
    #[must_use]
    pub fn revealable_index(&self, el: &Element) -> Option<u32> {
        let pos = self.revealables.iter().position(|r| r == el)?;
        u32::try_from(pos).ok()
    }

    fn set_link(&self, idx: usize, on: bool) {
        if let Some(link) = self.links.get(idx) {
            let _ = link.class_list().toggle_with_force(ACTIVE_CLASS, on);
        }
    }
}

impl Presenter for DomPresenter {
    fn apply(&mut self, frame: &ScrollFrame) {
        // 1. Navbar
        if frame.scrolled_changed
            && let Some(nav) = &self.navbar
        {
            let _ = nav
                .class_list()
                .toggle_with_force(SCROLLED_CLASS, frame.scrolled);
        }

        // 2. Link highlight
        for &idx in &frame.nav_changes.deactivated {
            self.set_link(idx, false);
        }
        for &idx in &frame.nav_changes.activated {
            self.set_link(idx, true);
        }

        // 3. Parallax
        let Some(p) = frame.parallax else {
            return;
        };
        if let Some(hero) = &self.hero {
            let s = hero.style();
            let _ = s.set_property("transform", &p.primary_transform());
            let _ = s.set_property("opacity", &format!("{}", p.primary_opacity));
        }
        if let Some(m) = &self.mountains {
            let _ = m
                .style()
                .set_property("transform", &p.secondary_transform());
        }
    }

    fn reveal(&mut self, transition: &RevealTransition) {
        if let Some(el) = self.revealable(transition.element.0) {
            let _ = el.class_list().add_1(REVEAL_CLASS);
        }
    }
}
