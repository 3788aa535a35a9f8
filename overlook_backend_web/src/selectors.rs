// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the page keeps the elements the synchronizer drives.

use alloc::string::String;

/// DOM lookups for one page.
///
/// Ids are passed to `getElementById`; everything else is a CSS selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSelectors {
    /// Id of the fixed navigation bar.
    pub navbar_id: &'static str,
    /// Id of the hamburger button.
    pub toggle_id: &'static str,
    /// Selector of the collapsible menu.
    pub menu: &'static str,
    /// Bars inside the hamburger button, in order.
    pub toggle_bars: &'static str,
    /// Selector of the navigation links.
    pub links: &'static str,
    /// Selector of the tracked sections.
    pub sections: &'static str,
    /// Selectors of elements that reveal on first sight.
    pub revealables: &'static [&'static str],
    /// Selector of the hero content.
    pub hero: &'static str,
    /// Selector of the decorative silhouette behind the hero.
    pub mountains: &'static str,
}

impl PageSelectors {
    /// Selectors used by the shipped landing page.
    #[must_use]
    pub const fn landing() -> Self {
        Self {
            navbar_id: "navbar",
            toggle_id: "navToggle",
            menu: ".nav-menu",
            toggle_bars: "span",
            links: ".nav-link",
            sections: "section[id]",
            revealables: &[
                ".about-card",
                ".timeline-item",
                ".sector-card",
                ".cuisine-card",
                ".place-card",
                ".university-card",
                ".culture-feature",
            ],
            hero: ".hero-content",
            mountains: ".mountain-silhouette",
        }
    }

    /// The revealable selectors as one selector group.
    #[must_use]
    pub fn revealable_group(&self) -> String {
        self.revealables.join(", ")
    }
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self::landing()
    }
}
