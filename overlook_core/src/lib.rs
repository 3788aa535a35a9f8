// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure scroll-driven UI state for single-page landing sites.
//!
//! `overlook_core` decides *what* the page should look like for a given
//! scroll position and viewport; backend crates decide *how* to write that
//! into a presentation medium (the DOM, a test recorder). Nothing in this
//! crate touches a browser API. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! One scroll event flows through a fixed, synchronous pipeline:
//!
//! ```text
//!   LayoutProvider (scroll offset, viewport, sections)
//!       │
//!       ▼
//!   ScrollState::sample ──► navbar::is_scrolled
//!       │
//!       ├──► locate::locate ──► nav::apply_highlight ──► NavChanges
//!       │
//!       └──► ParallaxRenderer::update ──► ParallaxFrame
//!                                              │
//!                 ┌────────────────────────────┘
//!                 ▼
//!   ScrollFrame ──► Presenter::apply
//! ```
//!
//! Intersection notifications take an independent path:
//!
//! ```text
//!   (RevealId, ratio) ──► RevealTrigger::on_intersect ──► RevealTransition
//!                                                              │
//!                                              Presenter::reveal ◄┘
//! ```
//!
//! **[`sync`]**: The [`Synchronizer`](sync::Synchronizer) owns the per-event
//! pipeline and produces one [`ScrollFrame`](sync::ScrollFrame) per scroll.
//!
//! **[`layout`]**: Layout snapshot types and the
//! [`LayoutProvider`](layout::LayoutProvider) seam.
//!
//! **[`locate`]**: Active-section detection with a lookahead bias.
//!
//! **[`nav`]**: Navigation link highlight state.
//!
//! **[`reveal`]**: One-way reveal state machine per observed element.
//!
//! **[`parallax`]**: Scroll-proportional shifts and hero fade.
//!
//! **[`navbar`]**, **[`menu`]**, **[`anchor`]**: Navbar scrolled flag,
//! mobile menu state, and smooth-scroll anchor targets.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait backends
//! implement to apply results.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! pipeline instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod anchor;
pub mod backend;
pub mod config;
pub mod error;
pub mod layout;
pub mod locate;
pub mod menu;
pub mod nav;
pub mod navbar;
pub mod parallax;
pub mod reveal;
pub mod sync;
pub mod trace;
