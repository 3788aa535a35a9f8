// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scroll scenarios on a simulated landing page.

use kurbo::{Rect, Size};
use overlook_core::config::SyncConfig;
use overlook_core::error::{ElementRole, PageInventory, SyncError};
use overlook_core::layout::LayoutProvider;
use overlook_core::menu::HamburgerPose;
use overlook_core::reveal::{RevealId, RevealState};
use overlook_debug::recorder::{RecordedEvent, RecorderSink, decode};
use overlook_sim::{Harness, SimulatedPage};

const DESKTOP: Size = Size::new(1280.0, 800.0);
const PHONE: Size = Size::new(800.0, 600.0);

// Landing page at DESKTOP:
//   hero 0..800, about 800..1700, history 1700..3100, economy 3100..3900,
//   cuisine 3900..4900, places 4900..6000, universities 6000..6700,
//   culture 6700..7600, footer 7600..7900.
// Card ids: about 0..=2, history 3..=6, cuisine 7..=9, places 10..=12,
// culture 13..=14.

#[test]
fn top_of_page_highlights_nothing() {
    let mut h = Harness::landing(DESKTOP);
    let frame = h.scroll_to(0.0);

    assert_eq!(frame.active_section.as_deref(), Some("hero"));
    assert!(!frame.scrolled);
    assert!(h.presenter.highlighted().is_empty());
    assert_eq!(h.presenter.hero_opacity, Some(1.0));
    assert_eq!(h.presenter.hero_transform.as_deref(), Some("translateY(0px)"));
    assert!(h.presenter.revealed.is_empty());
}

#[test]
fn lookahead_switches_section_early() {
    let mut h = Harness::landing(DESKTOP);
    let frame = h.scroll_to(750.0);

    assert_eq!(frame.active_section.as_deref(), Some("about"));
    assert!(frame.scrolled);
    assert_eq!(h.presenter.highlighted(), [0]);
    assert!(h.presenter.navbar_scrolled);
}

#[test]
fn navbar_threshold_is_exclusive() {
    let mut h = Harness::landing(DESKTOP);
    assert!(!h.scroll_to(50.0).scrolled);
    assert!(h.scroll_to(51.0).scrolled);
    assert!(!h.scroll_to(10.0).scrolled);
}

#[test]
fn scrolling_through_the_page_keeps_one_highlight() {
    let mut h = Harness::landing(DESKTOP);
    let mut offset = 0.0;
    while offset <= h.page.max_scroll() {
        h.scroll_to(offset);
        assert!(h.presenter.highlighted().len() <= 1, "at {offset}");
        assert_eq!(
            h.presenter.highlighted(),
            h.sync
                .links()
                .iter()
                .enumerate()
                .filter_map(|(i, l)| l.is_active.then_some(i))
                .collect::<Vec<_>>(),
            "presenter and synchronizer disagree at {offset}"
        );
        offset += 37.0;
    }
}

#[test]
fn bottom_of_page_highlights_last_link() {
    let mut h = Harness::landing(DESKTOP);
    let frame = h.scroll_to(1.0e9);

    assert_eq!(frame.offset, 7100.0);
    assert_eq!(frame.active_section.as_deref(), Some("culture"));
    assert_eq!(h.presenter.highlighted(), [6]);
}

#[test]
fn cards_reveal_when_scrolled_into_view() {
    let mut h = Harness::landing(DESKTOP);
    h.scroll_to(750.0);

    assert_eq!(h.presenter.revealed, [RevealId(0), RevealId(1), RevealId(2)]);
    assert_eq!(h.sync.reveal().pending(), 12);
}

#[test]
fn reveal_happens_once() {
    let mut h = Harness::landing(DESKTOP);
    h.scroll_to(750.0);
    h.scroll_to(0.0);
    h.scroll_to(750.0);

    assert_eq!(h.presenter.revealed.len(), 3);
    assert_eq!(h.sync.reveal_state(RevealId(0)), Some(RevealState::Revealed));
}

#[test]
fn revealed_cards_stop_receiving_notifications() {
    let mut h = Harness::landing(DESKTOP);
    h.scroll_to(750.0);
    assert_eq!(h.notifications, 15);

    h.scroll_to(760.0);
    assert_eq!(h.notifications, 15 + 12);
    assert_eq!(h.presenter.revealed.len(), 3);
}

#[test]
fn small_scroll_below_hero_writes_nothing() {
    let mut h = Harness::landing(DESKTOP);
    h.scroll_to(1000.0);
    assert!(h.presenter.navbar_scrolled);
    let writes = h.presenter.writes;

    let frame = h.scroll_to(1010.0);
    assert!(frame.scrolled && !frame.scrolled_changed);
    assert_eq!(h.presenter.writes, writes);
}

#[test]
fn jumping_skips_cards_never_seen() {
    let mut h = Harness::landing(DESKTOP);
    h.scroll_to(5000.0);

    assert_eq!(
        h.presenter.revealed,
        [RevealId(10), RevealId(11), RevealId(12)]
    );
    assert_eq!(h.sync.reveal_state(RevealId(0)), Some(RevealState::Hidden));
    assert_eq!(h.sync.reveal_state(RevealId(7)), Some(RevealState::Hidden));
}

#[test]
fn parallax_is_pinned_below_the_hero() {
    let mut h = Harness::landing(DESKTOP);
    h.scroll_to(200.0);
    assert_eq!(h.presenter.hero_transform.as_deref(), Some("translateY(60px)"));
    assert_eq!(
        h.presenter.mountains_transform.as_deref(),
        Some("translateY(20px)")
    );
    assert_eq!(h.presenter.hero_opacity, Some(0.75));

    let frame = h.scroll_to(2000.0);
    assert!(frame.parallax.is_some(), "first frame past the hero");
    assert_eq!(h.presenter.hero_opacity, Some(0.0));

    let frame = h.scroll_to(4000.0);
    assert!(frame.parallax.is_none(), "pinned frame is not rewritten");
    assert_eq!(h.presenter.hero_opacity, Some(0.0));
}

#[test]
fn gap_after_last_section_clears_highlight() {
    let page = SimulatedPage::new(DESKTOP)
        .with_section("a", 1000.0)
        .with_section("b", 1000.0)
        .with_footer(1000.0);
    let mut h = Harness::new(SyncConfig::landing(), page, ["#a", "#b"]);

    h.scroll_to(1500.0);
    assert_eq!(h.presenter.highlighted(), [1]);

    let frame = h.scroll_to(2000.0);
    assert_eq!(frame.active_section, None);
    assert_eq!(frame.nav_changes.deactivated, [1]);
    assert!(h.presenter.highlighted().is_empty());
}

#[test]
fn threshold_ratio_reveals() {
    let page = SimulatedPage::new(Size::new(800.0, 800.0))
        .with_section("a", 2000.0)
        .with_revealable(Rect::new(0.0, 790.0, 100.0, 890.0))
        .with_revealable(Rect::new(0.0, 795.0, 100.0, 895.0));
    let mut h = Harness::new(SyncConfig::landing(), page, ["#a"]);
    h.observe();

    assert_eq!(h.presenter.revealed, [RevealId(0)]);
    assert_eq!(h.sync.reveal_state(RevealId(1)), Some(RevealState::Hidden));
}

#[test]
fn nav_click_scrolls_below_header_and_closes_menu() {
    // At PHONE: hero 0..600, about 600..1500, history 1500..2900.
    let mut h = Harness::landing(PHONE);
    assert_eq!(h.toggle_menu(), HamburgerPose::OPEN);
    assert!(h.menu.is_open());

    let frame = h.click_link("#history").expect("history exists");

    assert_eq!(frame.offset, 1420.0);
    assert_eq!(frame.active_section.as_deref(), Some("history"));
    assert_eq!(h.presenter.highlighted(), [1]);
    assert!(!h.menu.is_open());
}

#[test]
fn nav_click_on_wide_layout_leaves_menu_alone() {
    let mut h = Harness::landing(DESKTOP);
    h.toggle_menu();
    h.click_link("#about").expect("about exists");
    assert!(h.menu.is_open());
}

#[test]
fn nav_click_to_missing_target_fails_but_closes_menu() {
    let mut h = Harness::landing(PHONE);
    h.toggle_menu();
    h.scroll_to(300.0);

    let err = h.click_link("#nowhere").expect_err("no such section");

    assert_eq!(err, SyncError::MissingElement(ElementRole::AnchorTarget));
    assert!(!h.menu.is_open());
    assert_eq!(h.page.scroll_offset(), 300.0);
    assert_eq!(h.sync.sequence(), 1, "no scroll was dispatched");
}

#[test]
fn resize_changes_parallax_span() {
    let mut h = Harness::landing(DESKTOP);
    h.scroll_to(400.0);
    assert_eq!(h.presenter.hero_opacity, Some(0.5));

    h.page.resize(Size::new(1280.0, 1600.0));
    h.scroll_to(400.0);
    assert_eq!(h.presenter.hero_opacity, Some(0.75));
}

#[test]
fn recorded_trace_matches_frames() {
    let mut h = Harness::landing(DESKTOP);
    let mut rec = RecorderSink::new();
    h.scroll_to_with_sink(0.0, &mut rec);
    h.scroll_to_with_sink(750.0, &mut rec);

    let events: Vec<RecordedEvent> = decode(rec.as_bytes()).collect();

    let sections: Vec<(Option<String>, Option<String>)> = events
        .iter()
        .filter_map(|e| match e {
            RecordedEvent::SectionChange {
                previous, current, ..
            } => Some((previous.clone(), current.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        sections,
        [
            (None, Some("hero".to_owned())),
            (Some("hero".to_owned()), Some("about".to_owned())),
        ]
    );

    let reveals = events
        .iter()
        .filter(|e| matches!(e, RecordedEvent::Reveal(_)))
        .count();
    assert_eq!(reveals, 3);

    let samples = events
        .iter()
        .filter(|e| matches!(e, RecordedEvent::ScrollSample(_)))
        .count();
    assert_eq!(samples, 2);
}

fn missing_roles(h: &Harness, inventory: &PageInventory) -> Vec<ElementRole> {
    let mut rec = RecorderSink::new();
    h.report_inventory(inventory, &mut rec);
    decode(rec.as_bytes())
        .filter_map(|e| match e {
            RecordedEvent::Degraded {
                error: SyncError::MissingElement(role),
                ..
            } => Some(role),
            _ => None,
        })
        .collect()
}

#[test]
fn complete_page_reports_nothing_missing() {
    let h = Harness::landing(DESKTOP);
    assert!(missing_roles(&h, &h.inventory()).is_empty());
}

#[test]
fn absent_hero_is_reported() {
    let h = Harness::landing(DESKTOP);
    let inventory = PageInventory {
        hero: false,
        ..h.inventory()
    };
    assert_eq!(missing_roles(&h, &inventory), [ElementRole::Hero]);
}

#[test]
fn bare_page_reports_links_and_revealables() {
    let page = SimulatedPage::new(DESKTOP).with_section("hero", 800.0);
    let h = Harness::new(SyncConfig::landing(), page, core::iter::empty::<&str>());
    assert_eq!(
        missing_roles(&h, &h.inventory()),
        [ElementRole::NavLink, ElementRole::Revealable]
    );
}
