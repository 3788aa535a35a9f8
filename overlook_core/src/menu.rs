// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile menu state.
//!
//! The hamburger button toggles the menu. Following a navigation link closes
//! it, but only on narrow viewports: on wide layouts the menu is an inline
//! bar and has nothing to close.

/// Styles for the three hamburger bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HamburgerPose {
    /// CSS `transform` per bar; `None` clears the inline style.
    pub transforms: [Option<&'static str>; 3],
    /// CSS `opacity` per bar; `None` clears the inline style.
    pub opacities: [Option<&'static str>; 3],
}

impl HamburgerPose {
    /// The "X" shape shown while the menu is open.
    pub const OPEN: Self = Self {
        transforms: [
            Some("rotate(45deg) translateY(6px)"),
            None,
            Some("rotate(-45deg) translateY(-6px)"),
        ],
        opacities: [None, Some("0"), None],
    };

    /// Three plain bars.
    pub const CLOSED: Self = Self {
        transforms: [None; 3],
        opacities: [None; 3],
    };
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Creates a closed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Returns `true` if the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new pose.
    pub fn toggle(&mut self) -> HamburgerPose {
        self.open = !self.open;
        self.pose()
    }

    /// Closes the menu if the viewport is at or below `breakpoint`.
    ///
    /// Returns the pose to apply, or `None` on wide viewports where nothing
    /// is touched.
    pub fn close(&mut self, viewport_width: f64, breakpoint: f64) -> Option<HamburgerPose> {
        if viewport_width > breakpoint {
            return None;
        }
        self.open = false;
        Some(HamburgerPose::CLOSED)
    }

    /// Pose matching the current state.
    #[must_use]
    pub const fn pose(&self) -> HamburgerPose {
        if self.open {
            HamburgerPose::OPEN
        } else {
            HamburgerPose::CLOSED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MENU_BREAKPOINT;

    #[test]
    fn toggle_alternates() {
        let mut menu = MenuState::new();
        assert_eq!(menu.toggle(), HamburgerPose::OPEN);
        assert!(menu.is_open());
        assert_eq!(menu.toggle(), HamburgerPose::CLOSED);
        assert!(!menu.is_open());
    }

    #[test]
    fn close_respects_breakpoint() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert_eq!(menu.close(1280.0, MENU_BREAKPOINT), None);
        assert!(menu.is_open(), "wide viewport leaves the menu alone");

        assert_eq!(menu.close(1024.0, MENU_BREAKPOINT), Some(HamburgerPose::CLOSED));
        assert!(!menu.is_open());
    }

    #[test]
    fn close_on_closed_menu_still_clears_pose() {
        let mut menu = MenuState::new();
        assert_eq!(menu.close(375.0, MENU_BREAKPOINT), Some(HamburgerPose::CLOSED));
    }
}
