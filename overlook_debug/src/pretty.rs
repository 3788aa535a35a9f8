// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use overlook_core::error::SyncError;
use overlook_core::trace::{
    NavChangeEvent, ParallaxEvent, RevealEvent, ScrollSampleEvent, SectionChangeEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    quiet_degraded: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("quiet_degraded", &self.quiet_degraded)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            quiet_degraded: false,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            quiet_degraded: false,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            quiet_degraded: false,
        }
    }

    /// Suppresses `NoActiveSection` lines, which repeat on every scroll
    /// event below the last section.
    #[must_use]
    pub fn quiet_degraded(mut self) -> Self {
        self.quiet_degraded = true;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn or_dash(id: Option<&str>) -> &str {
    id.unwrap_or("-")
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_scroll_sample(&mut self, e: &ScrollSampleEvent) {
        let _ = writeln!(
            self.writer,
            "[scroll] seq={} offset={:.1}px biased={:.1}px sections={}",
            e.sequence, e.offset, e.biased_offset, e.section_count,
        );
    }

    fn on_section_change(&mut self, e: &SectionChangeEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[section] seq={} {} -> {}",
            e.sequence,
            or_dash(e.previous),
            or_dash(e.current),
        );
    }

    fn on_nav_change(&mut self, e: &NavChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[nav] seq={} +{} -{}",
            e.sequence, e.activated, e.deactivated,
        );
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        let _ = writeln!(
            self.writer,
            "[parallax] seq={} primary={:.1}px secondary={:.1}px opacity={:.3}{}",
            e.sequence,
            e.frame.primary_shift,
            e.frame.secondary_shift,
            e.frame.primary_opacity,
            if e.pinned { " pinned" } else { "" },
        );
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        let _ = writeln!(
            self.writer,
            "[reveal] element={} ratio={:.3} pending={}",
            e.element.0, e.ratio, e.pending,
        );
    }

    fn on_degraded(&mut self, sequence: u64, error: SyncError) {
        if self.quiet_degraded && error == SyncError::NoActiveSection {
            return;
        }
        let _ = writeln!(self.writer, "[degraded] seq={sequence} {error}");
    }
}
