// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wiring a [`Synchronizer`] to a live page.
//!
//! [`LandingPage::attach`] looks up every element once, installs the
//! supporting styles, hides revealable elements, and registers:
//!
//! - a `scroll` listener on the window that runs the scroll pipeline
//! - an intersection observer over the revealable elements
//! - a `click` listener on the hamburger button
//! - a `click` listener on every navigation link (smooth scroll to the
//!   target, then close the mobile menu)
//!
//! Link highlight starts from whatever `active` classes the markup carries,
//! so the first pass clears a stale one. Element roles that are absent are
//! reported once to the trace sink.
//!
//! Shared state lives in an `Rc<RefCell<_>>`. Handlers use `try_borrow_mut`
//! and drop the event if the state is already borrowed.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use overlook_core::anchor::scroll_target;
use overlook_core::backend::Presenter as _;
use overlook_core::config::SyncConfig;
use overlook_core::layout::LayoutProvider as _;
use overlook_core::error::PageInventory;
use overlook_core::menu::MenuState;
use overlook_core::nav::NavLink;
use overlook_core::reveal::RevealId;
use overlook_core::sync::Synchronizer;
use overlook_core::trace::Tracer;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    NodeList, ScrollBehavior, ScrollToOptions, Window,
};

use crate::layout::DomLayout;
use crate::listener::EventListener;
use crate::menu::MenuView;
use crate::observer::RevealObserver;
use crate::presenter::{ACTIVE_CLASS, DomPresenter};
use crate::selectors::PageSelectors;
use crate::styles;

#[cfg(feature = "trace")]
type PageSink = crate::console::ConsoleSink;
#[cfg(not(feature = "trace"))]
type PageSink = overlook_core::trace::NoopSink;

struct PageState {
    sync: Synchronizer,
    layout: DomLayout,
    presenter: DomPresenter,
    menu: MenuState,
    menu_view: MenuView,
    sink: PageSink,
}

impl PageState {
    fn on_scroll(&mut self) {
        let mut tracer = Tracer::new(&mut self.sink);
        let frame = self.sync.on_scroll(&self.layout, &mut tracer);
        self.presenter.apply(&frame);
    }

    fn on_intersect(&mut self, entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
        let target = entry.target();
        let Some(idx) = self.presenter.revealable_index(&target) else {
            return;
        };
        let mut tracer = Tracer::new(&mut self.sink);
        if let Some(t) = self
            .sync
            .on_intersect(RevealId(idx), entry.intersection_ratio(), &mut tracer)
        {
            self.presenter.reveal(&t);
            observer.unobserve(&target);
        }
    }

    fn toggle_menu(&mut self) {
        let pose = self.menu.toggle();
        self.menu_view.apply(self.menu.is_open(), &pose);
    }

    fn follow_link(&mut self, href: &str) {
        let config = *self.sync.config();
        match scroll_target(href, &self.layout, config.anchor_offset) {
            Ok(top) => {
                let opts = ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(ScrollBehavior::Smooth);
                self.layout.window().scroll_to_with_scroll_to_options(&opts);
            }
            Err(e) => {
                Tracer::new(&mut self.sink).degraded(self.sync.sequence(), e);
            }
        }
        let width = self.layout.viewport().width;
        if let Some(pose) = self.menu.close(width, config.menu_breakpoint) {
            self.menu_view.apply(false, &pose);
        }
    }
}

/// A landing page driven by a [`Synchronizer`].
///
/// Dropping the value unregisters every listener and disconnects the
/// observer. Pages that live as long as the document can be leaked with
/// [`core::mem::forget`].
pub struct LandingPage {
    state: Rc<RefCell<PageState>>,
    _observer: RevealObserver,
    listeners: Vec<EventListener>,
}

impl core::fmt::Debug for LandingPage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut d = f.debug_struct("LandingPage");
        if let Ok(s) = self.state.try_borrow() {
            d.field("sequence", &s.sync.sequence())
                .field("active_section", &s.sync.active_section())
                .field("pending_reveals", &s.sync.reveal().pending());
        }
        d.field("listeners", &self.listeners.len()).finish()
    }
}

fn elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i)?.dyn_into::<Element>().ok())
        .collect()
}

fn html(el: Option<Element>) -> Option<HtmlElement> {
    el?.dyn_into::<HtmlElement>().ok()
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

impl LandingPage {
    /// Attaches to the current document and runs the first scroll pass.
    ///
    /// # Errors
    ///
    /// Returns the underlying JS error if a selector is rejected or a
    /// listener or observer cannot be created. Missing elements are not
    /// errors; they are reported to the trace sink.
    pub fn attach(
        window: Window,
        document: Document,
        selectors: PageSelectors,
        config: SyncConfig,
    ) -> Result<Self, JsValue> {
        styles::inject(&document, styles::REVEAL_CSS)?;
        styles::inject(&document, styles::ACTIVE_LINK_CSS)?;

        let navbar = document.get_element_by_id(selectors.navbar_id);
        let toggle = document.get_element_by_id(selectors.toggle_id);
        let bars = match &toggle {
            Some(t) => elements(&t.query_selector_all(selectors.toggle_bars)?)
                .into_iter()
                .filter_map(|b| b.dyn_into::<HtmlElement>().ok())
                .collect(),
            None => Vec::new(),
        };
        let menu = query(&document, selectors.menu);
        let hero = html(query(&document, selectors.hero));
        let mountains = html(query(&document, selectors.mountains));

        let links = elements(&document.query_selector_all(selectors.links)?);
        let hrefs: Vec<String> = links
            .iter()
            .map(|l| l.get_attribute("href").unwrap_or_default())
            .collect();
        let nav_links = links
            .iter()
            .zip(&hrefs)
            .map(|(link, href)| NavLink {
                is_active: link.class_list().contains(ACTIVE_CLASS),
                ..NavLink::from_href(href)
            })
            .collect();

        let revealables = elements(&document.query_selector_all(&selectors.revealable_group())?);
        let revealable_count = u32::try_from(revealables.len()).unwrap_or(u32::MAX);

        let inventory = PageInventory {
            navbar: navbar.is_some(),
            menu_toggle: toggle.is_some(),
            menu: menu.is_some(),
            nav_links: links.len(),
            hero: hero.is_some(),
            mountains: mountains.is_some(),
            revealables: revealables.len(),
        };

        let menu_view = MenuView::new(menu, toggle, bars);
        let sync = Synchronizer::new(config, nav_links, revealable_count);
        let presenter = DomPresenter::new(
            navbar,
            links.clone(),
            hero,
            mountains,
            revealables.clone(),
        );
        let layout = DomLayout::new(window.clone(), document, selectors.sections);

        let mut sink = PageSink::default();
        sync.report_inventory(&inventory, &mut Tracer::new(&mut sink));

        let state = Rc::new(RefCell::new(PageState {
            sync,
            layout,
            presenter,
            menu: MenuState::new(),
            menu_view,
            sink,
        }));

        let observer_state = Rc::clone(&state);
        let observer = RevealObserver::new(config.reveal_threshold, move |entry, observer| {
            if let Ok(mut s) = observer_state.try_borrow_mut() {
                s.on_intersect(entry, observer);
            }
        })?;
        for el in &revealables {
            if let Some(h) = el.dyn_ref::<HtmlElement>() {
                styles::prepare_revealable(h);
            }
            observer.observe(el);
        }

        let mut listeners = Vec::with_capacity(links.len() + 2);

        let scroll_state = Rc::clone(&state);
        listeners.push(EventListener::new(&window, "scroll", move |_event: Event| {
            if let Ok(mut s) = scroll_state.try_borrow_mut() {
                s.on_scroll();
            }
        })?);

        let toggle_target = state.borrow().menu_view.toggle().cloned();
        if let Some(t) = toggle_target {
            let toggle_state = Rc::clone(&state);
            listeners.push(EventListener::new(&t, "click", move |_event: Event| {
                if let Ok(mut s) = toggle_state.try_borrow_mut() {
                    s.toggle_menu();
                }
            })?);
        }

        for (link, href) in links.iter().zip(hrefs) {
            let link_state = Rc::clone(&state);
            listeners.push(EventListener::new(link, "click", move |event: Event| {
                event.prevent_default();
                if let Ok(mut s) = link_state.try_borrow_mut() {
                    s.follow_link(&href);
                }
            })?);
        }

        state.borrow_mut().on_scroll();

        Ok(Self {
            state,
            _observer: observer,
            listeners,
        })
    }

    /// Runs the scroll pipeline once, as if a scroll event had fired.
    pub fn refresh(&self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.on_scroll();
        }
    }

    /// The section that was active after the last scroll event.
    #[must_use]
    pub fn active_section(&self) -> Option<String> {
        let s = self.state.try_borrow().ok()?;
        s.sync.active_section().map(String::from)
    }
}
