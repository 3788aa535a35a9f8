// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM side of the mobile menu.

use alloc::vec::Vec;

use overlook_core::menu::HamburgerPose;
use web_sys::{CssStyleDeclaration, Element, HtmlElement};

/// Class marking the open menu and its button.
pub const OPEN_CLASS: &str = "active";

/// The menu, its hamburger button, and the button's bars.
pub struct MenuView {
    menu: Option<Element>,
    toggle: Option<Element>,
    bars: Vec<HtmlElement>,
}

impl core::fmt::Debug for MenuView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuView")
            .field("menu", &self.menu.is_some())
            .field("toggle", &self.toggle.is_some())
            .field("bars_len", &self.bars.len())
            .finish()
    }
}

impl MenuView {
    /// Creates a view over the given elements.
    #[must_use]
    pub fn new(menu: Option<Element>, toggle: Option<Element>, bars: Vec<HtmlElement>) -> Self {
        Self { menu, toggle, bars }
    }

    /// The hamburger button, if present.
    #[must_use]
    pub fn toggle(&self) -> Option<&Element> {
        self.toggle.as_ref()
    }

    /// Shows the menu as open or closed with the given bar pose.
    pub fn apply(&self, open: bool, pose: &HamburgerPose) {
        for el in self.menu.iter().chain(self.toggle.iter()) {
            let _ = el.class_list().toggle_with_force(OPEN_CLASS, open);
        }
        for (i, bar) in self.bars.iter().take(3).enumerate() {
            let s = bar.style();
            set_or_clear(&s, "transform", pose.transforms[i]);
            set_or_clear(&s, "opacity", pose.opacities[i]);
        }
    }
}

fn set_or_clear(s: &CssStyleDeclaration, property: &str, value: Option<&str>) {
    match value {
        Some(v) => {
            let _ = s.set_property(property, v);
        }
        None => {
            let _ = s.remove_property(property);
        }
    }
}
