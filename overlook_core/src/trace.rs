// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the scroll pipeline.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Synchronizer`](crate::sync::Synchronizer) calls at each stage. All method
//! bodies default to no-ops, so implementing only the events you care about
//! is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::error::SyncError;
use crate::parallax::ParallaxFrame;
use crate::reveal::RevealId;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per scroll event, before any component runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSampleEvent {
    /// Monotonic scroll-event counter.
    pub sequence: u64,
    /// Sanitized scroll offset.
    pub offset: f64,
    /// Offset after the lookahead bias.
    pub biased_offset: f64,
    /// Number of sections in the layout snapshot.
    pub section_count: u32,
}

/// Emitted when the active section differs from the previous event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionChangeEvent<'a> {
    /// Scroll-event counter.
    pub sequence: u64,
    /// Previously active section.
    pub previous: Option<&'a str>,
    /// Newly active section.
    pub current: Option<&'a str>,
}

/// Emitted when at least one navigation link flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavChangeEvent {
    /// Scroll-event counter.
    pub sequence: u64,
    /// Links that became active.
    pub activated: u32,
    /// Links that became inactive.
    pub deactivated: u32,
}

/// Emitted when the parallax renderer produced a new frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxEvent {
    /// Scroll-event counter.
    pub sequence: u64,
    /// The frame handed to the presenter.
    pub frame: ParallaxFrame,
    /// Whether the frame is the boundary frame past the first screen.
    pub pinned: bool,
}

/// Emitted when an element reveals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealEvent {
    /// The element that revealed.
    pub element: RevealId,
    /// Intersection ratio that triggered it.
    pub ratio: f64,
    /// Elements still hidden afterwards.
    pub pending: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the scroll pipeline.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called at the start of every scroll event.
    fn on_scroll_sample(&mut self, e: &ScrollSampleEvent) {
        _ = e;
    }

    /// Called when the active section changes.
    fn on_section_change(&mut self, e: &SectionChangeEvent<'_>) {
        _ = e;
    }

    /// Called when navigation highlights flip.
    fn on_nav_change(&mut self, e: &NavChangeEvent) {
        _ = e;
    }

    /// Called when a new parallax frame is produced.
    fn on_parallax(&mut self, e: &ParallaxEvent) {
        _ = e;
    }

    /// Called when an element reveals.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called when work is skipped for a non-fatal reason.
    fn on_degraded(&mut self, sequence: u64, error: SyncError) {
        _ = (sequence, error);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ScrollSampleEvent`].
    #[inline]
    pub fn scroll_sample(&mut self, e: &ScrollSampleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scroll_sample(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SectionChangeEvent`].
    #[inline]
    pub fn section_change(&mut self, e: &SectionChangeEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_section_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavChangeEvent`].
    #[inline]
    pub fn nav_change(&mut self, e: &NavChangeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_nav_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ParallaxEvent`].
    #[inline]
    pub fn parallax(&mut self, e: &ParallaxEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_parallax(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RevealEvent`].
    #[inline]
    pub fn reveal(&mut self, e: &RevealEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reveal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Reports skipped work.
    #[inline]
    pub fn degraded(&mut self, sequence: u64, error: SyncError) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_degraded(sequence, error);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (sequence, error);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
