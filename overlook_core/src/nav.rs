// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation link highlight state.
//!
//! A link is active exactly when its target matches the active section. When
//! several links share a target, only the first in document order lights up,
//! so at most one link is ever active. [`apply_highlight`] updates a link set
//! in place and reports which indices flipped, so a presenter only touches
//! nodes whose state changed. Repeating a call with the same active section
//! yields empty [`NavChanges`].

use alloc::string::String;
use alloc::vec::Vec;

/// A navigation link pointing at a page section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Identifier of the section this link scrolls to.
    pub target_identifier: String,
    /// Whether the link is currently highlighted.
    pub is_active: bool,
}

impl NavLink {
    /// Creates an inactive link targeting `target_identifier`.
    #[must_use]
    pub fn new(target_identifier: impl Into<String>) -> Self {
        Self {
            target_identifier: target_identifier.into(),
            is_active: false,
        }
    }

    /// Creates an inactive link from an `href` attribute.
    ///
    /// Only in-page fragments (`#id`) target a section; any other href
    /// yields a link that never activates.
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        Self::new(fragment_target(href).unwrap_or_default())
    }

    /// Returns `true` if this link points at `identifier`.
    #[must_use]
    pub fn targets(&self, identifier: &str) -> bool {
        !self.target_identifier.is_empty() && self.target_identifier == identifier
    }
}

/// Returns the id named by an in-page fragment href (`"#about"` → `"about"`).
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Indices of links whose highlight flipped during one update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavChanges {
    /// Links that became active.
    pub activated: Vec<usize>,
    /// Links that became inactive.
    pub deactivated: Vec<usize>,
}

impl NavChanges {
    /// Returns `true` if no link changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activated.is_empty() && self.deactivated.is_empty()
    }
}

/// Sets `is_active = (target == active)` on every link, in place.
///
/// Only the first link targeting `active` is activated. With
/// `active == None` every link becomes inactive.
pub fn apply_highlight(active: Option<&str>, links: &mut [NavLink]) -> NavChanges {
    let mut changes = NavChanges::default();
    let mut claimed = false;
    for (idx, link) in links.iter_mut().enumerate() {
        let want = !claimed && active.is_some_and(|id| link.targets(id));
        claimed |= want;
        if want != link.is_active {
            link.is_active = want;
            if want {
                changes.activated.push(idx);
            } else {
                changes.deactivated.push(idx);
            }
        }
    }
    changes
}

/// Returns the link set as it should look with `active` highlighted.
#[must_use]
pub fn highlight(active: Option<&str>, links: &[NavLink]) -> Vec<NavLink> {
    let mut out = links.to_vec();
    apply_highlight(active, &mut out);
    out
}
