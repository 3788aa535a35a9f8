// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-fatal conditions surfaced by the synchronizer.
//!
//! Nothing here ever aborts a handler. Components return `None` or skip work
//! and, when a [`Tracer`](crate::trace::Tracer) is attached, report a
//! [`SyncError`] through [`TraceSink::on_degraded`](crate::trace::TraceSink::on_degraded).

use core::fmt;

/// A page element the synchronizer expected to find.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// The fixed navigation bar.
    Navbar,
    /// The hamburger button that opens the mobile menu.
    MenuToggle,
    /// The collapsible navigation menu.
    Menu,
    /// A navigation link.
    NavLink,
    /// The hero content block that receives the primary parallax shift.
    Hero,
    /// The decorative silhouette that receives the secondary parallax shift.
    Mountains,
    /// An element tagged for reveal animation.
    Revealable,
    /// The element an anchor link points at.
    AnchorTarget,
}

impl ElementRole {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::MenuToggle => "menu-toggle",
            Self::Menu => "menu",
            Self::NavLink => "nav-link",
            Self::Hero => "hero",
            Self::Mountains => "mountains",
            Self::Revealable => "revealable",
            Self::AnchorTarget => "anchor-target",
        }
    }
}

/// Why a piece of work was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyncError {
    /// A referenced UI element is absent from the page.
    MissingElement(ElementRole),
    /// The scroll position matches no section.
    NoActiveSection,
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(role) => write!(f, "missing {} element", role.as_str()),
            Self::NoActiveSection => f.write_str("no section contains the scroll position"),
        }
    }
}

impl core::error::Error for SyncError {}

/// Which page elements a backend found when it attached.
///
/// Every element is optional: a missing one only disables the effect that
/// writes to it. [`PageInventory::missing`] lists the roles to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInventory {
    /// The fixed navigation bar.
    pub navbar: bool,
    /// The hamburger button.
    pub menu_toggle: bool,
    /// The collapsible menu.
    pub menu: bool,
    /// Number of navigation links.
    pub nav_links: usize,
    /// The hero content block.
    pub hero: bool,
    /// The decorative silhouette.
    pub mountains: bool,
    /// Number of revealable elements.
    pub revealables: usize,
}

impl PageInventory {
    /// Roles with nothing on the page, in declaration order.
    pub fn missing(&self) -> impl Iterator<Item = ElementRole> {
        [
            (ElementRole::Navbar, self.navbar),
            (ElementRole::MenuToggle, self.menu_toggle),
            (ElementRole::Menu, self.menu),
            (ElementRole::NavLink, self.nav_links > 0),
            (ElementRole::Hero, self.hero),
            (ElementRole::Mountains, self.mountains),
            (ElementRole::Revealable, self.revealables > 0),
        ]
        .into_iter()
        .filter_map(|(role, present)| (!present).then_some(role))
    }
}
