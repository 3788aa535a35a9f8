// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-way reveal animations.
//!
//! Each element tagged for reveal starts [`Hidden`](RevealState::Hidden) and
//! moves to [`Revealed`](RevealState::Revealed) the first time at least
//! `threshold` of its bounding box is inside the viewport. `Revealed` is
//! terminal: the returned [`RevealTransition`] tells the backend to stop
//! observing the element.
//!
//! Notifications may arrive in any order across elements; each one only
//! reads and writes the state of the element it names.

use alloc::vec::Vec;

use kurbo::Rect;

/// Index of a revealable element, assigned at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RevealId(pub u32);

/// Per-element reveal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RevealState {
    /// Not yet shown; still observed.
    #[default]
    Hidden,
    /// Shown; never observed again.
    Revealed,
}

/// Emitted once per element when it reveals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTransition {
    /// The element that revealed.
    pub element: RevealId,
    /// Intersection ratio that triggered the transition.
    pub ratio: f64,
}

/// An element tagged for reveal animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealableElement {
    id: RevealId,
    state: RevealState,
}

impl RevealableElement {
    /// Creates a hidden element.
    #[must_use]
    pub const fn new(id: RevealId) -> Self {
        Self {
            id,
            state: RevealState::Hidden,
        }
    }

    /// Returns the element's id.
    #[must_use]
    pub const fn id(&self) -> RevealId {
        self.id
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> RevealState {
        self.state
    }

    /// Returns `true` once the element has revealed.
    #[must_use]
    pub const fn has_revealed(&self) -> bool {
        matches!(self.state, RevealState::Revealed)
    }

    /// Handles one intersection notification.
    ///
    /// Returns a transition only if the element is hidden and
    /// `intersection_ratio >= threshold`; otherwise a no-op.
    pub fn on_intersect(
        &mut self,
        intersection_ratio: f64,
        threshold: f64,
    ) -> Option<RevealTransition> {
        if self.state == RevealState::Hidden && intersection_ratio >= threshold {
            self.state = RevealState::Revealed;
            Some(RevealTransition {
                element: self.id,
                ratio: intersection_ratio,
            })
        } else {
            None
        }
    }
}

/// The fixed set of revealable elements on a page.
#[derive(Clone, Debug, Default)]
pub struct RevealTrigger {
    elements: Vec<RevealableElement>,
    threshold: f64,
    pending: usize,
}

impl RevealTrigger {
    /// Creates `count` hidden elements with ids `0..count`.
    #[must_use]
    pub fn new(count: u32, threshold: f64) -> Self {
        Self {
            elements: (0..count).map(|i| RevealableElement::new(RevealId(i))).collect(),
            threshold,
            pending: count as usize,
        }
    }

    /// Routes a notification to the element it names.
    ///
    /// Unknown ids are ignored (the element was not present at startup).
    pub fn on_intersect(&mut self, id: RevealId, ratio: f64) -> Option<RevealTransition> {
        let el = self.elements.get_mut(id.0 as usize)?;
        let transition = el.on_intersect(ratio, self.threshold)?;
        self.pending -= 1;
        Some(transition)
    }

    /// Returns the state of one element.
    #[must_use]
    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.elements.get(id.0 as usize).map(RevealableElement::state)
    }

    /// Returns `true` if `id` names a known element.
    #[must_use]
    pub fn contains(&self, id: RevealId) -> bool {
        (id.0 as usize) < self.elements.len()
    }

    /// Number of elements still hidden (still observed).
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the page has no revealable elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Threshold applied to every notification.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Iterates over all elements in id order.
    pub fn iter(&self) -> impl Iterator<Item = &RevealableElement> {
        self.elements.iter()
    }
}

/// Fraction of `bounds` that lies inside `viewport` (0.0–1.0).
///
/// A zero-area element counts as fully visible when its origin is inside the
/// viewport and invisible otherwise.
#[must_use]
pub fn intersection_ratio(bounds: Rect, viewport: Rect) -> f64 {
    let area = bounds.area();
    if area <= 0.0 {
        return if viewport.contains(bounds.origin()) {
            1.0
        } else {
            0.0
        };
    }
    (bounds.intersect(viewport).area() / area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_stays_hidden() {
        let mut el = RevealableElement::new(RevealId(0));
        assert_eq!(el.on_intersect(0.05, 0.1), None);
        assert_eq!(el.state(), RevealState::Hidden);
    }

    #[test]
    fn at_or_above_threshold_reveals() {
        let mut el = RevealableElement::new(RevealId(3));
        let t = el.on_intersect(0.15, 0.1).expect("should reveal");
        assert_eq!(t.element, RevealId(3));
        assert!(el.has_revealed());

        let mut edge = RevealableElement::new(RevealId(4));
        assert!(edge.on_intersect(0.1, 0.1).is_some(), "threshold is inclusive");
    }

    #[test]
    fn reveal_fires_once() {
        let mut el = RevealableElement::new(RevealId(0));
        assert!(el.on_intersect(0.5, 0.1).is_some());
        assert_eq!(el.on_intersect(1.0, 0.1), None);
        assert_eq!(el.on_intersect(0.0, 0.1), None);
        assert!(el.has_revealed(), "revealed is terminal");
    }

    #[test]
    fn trigger_routes_independently() {
        let mut trigger = RevealTrigger::new(3, 0.1);
        assert_eq!(trigger.pending(), 3);

        assert!(trigger.on_intersect(RevealId(2), 0.4).is_some());
        assert!(trigger.on_intersect(RevealId(0), 0.02).is_none());
        assert!(trigger.on_intersect(RevealId(2), 0.9).is_none());

        assert_eq!(trigger.state(RevealId(0)), Some(RevealState::Hidden));
        assert_eq!(trigger.state(RevealId(1)), Some(RevealState::Hidden));
        assert_eq!(trigger.state(RevealId(2)), Some(RevealState::Revealed));
        assert_eq!(trigger.pending(), 2);
    }

    #[test]
    fn unknown_element_is_ignored() {
        let mut trigger = RevealTrigger::new(1, 0.1);
        assert!(trigger.on_intersect(RevealId(7), 1.0).is_none());
        assert_eq!(trigger.state(RevealId(7)), None);
        assert!(!trigger.contains(RevealId(7)));
        assert_eq!(trigger.pending(), 1);
    }

    #[test]
    fn ratio_of_partially_visible_box() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let card = Rect::new(100.0, 700.0, 300.0, 1100.0);
        let r = intersection_ratio(card, viewport);
        assert!(r > 0.25 - 1e-9 && r < 0.25 + 1e-9, "got {r}");
    }

    #[test]
    fn ratio_of_offscreen_and_contained_boxes() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(intersection_ratio(Rect::new(0.0, 900.0, 100.0, 1000.0), viewport), 0.0);
        assert_eq!(intersection_ratio(Rect::new(10.0, 10.0, 100.0, 100.0), viewport), 1.0);
    }

    #[test]
    fn ratio_of_zero_area_box() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(intersection_ratio(Rect::new(5.0, 5.0, 5.0, 5.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Rect::new(5.0, 900.0, 5.0, 900.0), viewport), 0.0);
    }
}
