// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as little-endian records. Numbers are fixed-size; section
//! identifiers are length-prefixed UTF-8. [`decode`] reads them back as an
//! iterator of [`RecordedEvent`] and stops at the first truncated record.

use overlook_core::error::{ElementRole, SyncError};
use overlook_core::parallax::ParallaxFrame;
use overlook_core::reveal::RevealId;
use overlook_core::trace::{
    NavChangeEvent, ParallaxEvent, RevealEvent, ScrollSampleEvent, SectionChangeEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_SCROLL_SAMPLE: u8 = 1;
const TAG_SECTION_CHANGE: u8 = 2;
const TAG_NAV_CHANGE: u8 = 3;
const TAG_PARALLAX: u8 = 4;
const TAG_REVEAL: u8 = 5;
const TAG_DEGRADED: u8 = 6;

const ERR_NO_ACTIVE_SECTION: u8 = 0;
const ERR_MISSING_ELEMENT: u8 = 1;

const ROLES: [ElementRole; 8] = [
    ElementRole::Navbar,
    ElementRole::MenuToggle,
    ElementRole::Menu,
    ElementRole::NavLink,
    ElementRole::Hero,
    ElementRole::Mountains,
    ElementRole::Revealable,
    ElementRole::AnchorTarget,
];

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_option_str(&mut self, v: Option<&str>) {
        match v {
            Some(s) => {
                self.write_u8(1);
                let len = u32::try_from(s.len()).unwrap_or(u32::MAX);
                self.write_u32(len);
                self.buf.extend_from_slice(&s.as_bytes()[..len as usize]);
            }
            None => self.write_u8(0),
        }
    }

    fn write_error(&mut self, error: SyncError) {
        match error {
            SyncError::NoActiveSection => {
                self.write_u8(ERR_NO_ACTIVE_SECTION);
                self.write_u8(0);
            }
            SyncError::MissingElement(role) => {
                self.write_u8(ERR_MISSING_ELEMENT);
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "ROLES has fewer than 256 entries"
                )]
                let idx = ROLES.iter().position(|r| *r == role).unwrap_or(0) as u8;
                self.write_u8(idx);
            }
        }
    }
}

impl TraceSink for RecorderSink {
    fn on_scroll_sample(&mut self, e: &ScrollSampleEvent) {
        self.write_u8(TAG_SCROLL_SAMPLE);
        self.write_u64(e.sequence);
        self.write_f64(e.offset);
        self.write_f64(e.biased_offset);
        self.write_u32(e.section_count);
    }

    fn on_section_change(&mut self, e: &SectionChangeEvent<'_>) {
        self.write_u8(TAG_SECTION_CHANGE);
        self.write_u64(e.sequence);
        self.write_option_str(e.previous);
        self.write_option_str(e.current);
    }

    fn on_nav_change(&mut self, e: &NavChangeEvent) {
        self.write_u8(TAG_NAV_CHANGE);
        self.write_u64(e.sequence);
        self.write_u32(e.activated);
        self.write_u32(e.deactivated);
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        self.write_u8(TAG_PARALLAX);
        self.write_u64(e.sequence);
        self.write_f64(e.frame.primary_shift);
        self.write_f64(e.frame.secondary_shift);
        self.write_f64(e.frame.primary_opacity);
        self.write_u8(u8::from(e.pinned));
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        self.write_u8(TAG_REVEAL);
        self.write_u32(e.element.0);
        self.write_f64(e.ratio);
        self.write_u32(e.pending);
    }

    fn on_degraded(&mut self, sequence: u64, error: SyncError) {
        self.write_u8(TAG_DEGRADED);
        self.write_u64(sequence);
        self.write_error(error);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`ScrollSampleEvent`].
    ScrollSample(ScrollSampleEvent),
    /// A section change, with owned identifiers.
    SectionChange {
        /// Scroll-event counter.
        sequence: u64,
        /// Previously active section.
        previous: Option<String>,
        /// Newly active section.
        current: Option<String>,
    },
    /// A [`NavChangeEvent`].
    NavChange(NavChangeEvent),
    /// A [`ParallaxEvent`].
    Parallax(ParallaxEvent),
    /// A [`RevealEvent`].
    Reveal(RevealEvent),
    /// Skipped work.
    Degraded {
        /// Scroll-event counter.
        sequence: u64,
        /// Why the work was skipped.
        error: SyncError,
    },
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take(&mut self, n: usize) -> Option<&[u8]> {
        let end = self.pos.checked_add(n)?;
        let slice = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    fn read_u8(&mut self) -> Option<u8> {
        Some(self.take(1)?[0])
    }

    fn read_u32(&mut self) -> Option<u32> {
        Some(u32::from_le_bytes(self.take(4)?.try_into().ok()?))
    }

    fn read_u64(&mut self) -> Option<u64> {
        Some(u64::from_le_bytes(self.take(8)?.try_into().ok()?))
    }

    fn read_f64(&mut self) -> Option<f64> {
        Some(f64::from_le_bytes(self.take(8)?.try_into().ok()?))
    }

    fn read_option_str(&mut self) -> Option<Option<String>> {
        if self.read_u8()? == 0 {
            return Some(None);
        }
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        Some(Some(String::from_utf8_lossy(bytes).into_owned()))
    }

    fn read_error(&mut self) -> Option<SyncError> {
        let kind = self.read_u8()?;
        let role = self.read_u8()?;
        Some(match kind {
            ERR_NO_ACTIVE_SECTION => SyncError::NoActiveSection,
            _ => SyncError::MissingElement(*ROLES.get(role as usize)?),
        })
    }

    fn decode_scroll_sample(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ScrollSample(ScrollSampleEvent {
            sequence: self.read_u64()?,
            offset: self.read_f64()?,
            biased_offset: self.read_f64()?,
            section_count: self.read_u32()?,
        }))
    }

    fn decode_section_change(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::SectionChange {
            sequence: self.read_u64()?,
            previous: self.read_option_str()?,
            current: self.read_option_str()?,
        })
    }

    fn decode_nav_change(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::NavChange(NavChangeEvent {
            sequence: self.read_u64()?,
            activated: self.read_u32()?,
            deactivated: self.read_u32()?,
        }))
    }

    fn decode_parallax(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Parallax(ParallaxEvent {
            sequence: self.read_u64()?,
            frame: ParallaxFrame {
                primary_shift: self.read_f64()?,
                secondary_shift: self.read_f64()?,
                primary_opacity: self.read_f64()?,
            },
            pinned: self.read_u8()? != 0,
        }))
    }

    fn decode_reveal(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Reveal(RevealEvent {
            element: RevealId(self.read_u32()?),
            ratio: self.read_f64()?,
            pending: self.read_u32()?,
        }))
    }

    fn decode_degraded(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Degraded {
            sequence: self.read_u64()?,
            error: self.read_error()?,
        })
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_SCROLL_SAMPLE => self.decode_scroll_sample(),
            TAG_SECTION_CHANGE => self.decode_section_change(),
            TAG_NAV_CHANGE => self.decode_nav_change(),
            TAG_PARALLAX => self.decode_parallax(),
            TAG_REVEAL => self.decode_reveal(),
            TAG_DEGRADED => self.decode_degraded(),
            _ => None,
        }
    }
}
