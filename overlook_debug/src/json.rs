// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded sessions.
//!
//! [`export`] reads recorded bytes from a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes a JSON array
//! with one object per event. Every object carries a `"type"` field; the
//! remaining fields mirror the event struct.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Converts one decoded event into a JSON object.
#[must_use]
pub fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::ScrollSample(e) => json!({
            "type": "scroll",
            "sequence": e.sequence,
            "offset": e.offset,
            "biased_offset": e.biased_offset,
            "section_count": e.section_count,
        }),
        RecordedEvent::SectionChange {
            sequence,
            previous,
            current,
        } => json!({
            "type": "section",
            "sequence": sequence,
            "previous": previous,
            "current": current,
        }),
        RecordedEvent::NavChange(e) => json!({
            "type": "nav",
            "sequence": e.sequence,
            "activated": e.activated,
            "deactivated": e.deactivated,
        }),
        RecordedEvent::Parallax(e) => json!({
            "type": "parallax",
            "sequence": e.sequence,
            "primary_shift": e.frame.primary_shift,
            "secondary_shift": e.frame.secondary_shift,
            "primary_opacity": e.frame.primary_opacity,
            "pinned": e.pinned,
        }),
        RecordedEvent::Reveal(e) => json!({
            "type": "reveal",
            "element": e.element.0,
            "ratio": e.ratio,
            "pending": e.pending,
        }),
        RecordedEvent::Degraded { sequence, error } => json!({
            "type": "degraded",
            "sequence": sequence,
            "reason": error.to_string(),
        }),
    }
}

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = decode(bytes).map(|e| to_value(&e)).collect();
    serde_json::to_writer_pretty(&mut *writer, &Value::Array(events))?;
    writeln!(writer)
}
