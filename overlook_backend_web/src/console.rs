// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use alloc::format;
use alloc::string::String;

use overlook_core::error::SyncError;
use overlook_core::trace::{
    NavChangeEvent, ParallaxEvent, RevealEvent, ScrollSampleEvent, SectionChangeEvent, TraceSink,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// A [`TraceSink`] that writes one `console.debug` line per event.
///
/// Degraded events go to `console.warn`, except `NoActiveSection`, which
/// repeats on every scroll event below the last section and stays at debug
/// level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

fn debug(line: String) {
    console::debug_1(&JsValue::from_str(&line));
}

fn or_dash(id: Option<&str>) -> &str {
    id.unwrap_or("-")
}

impl TraceSink for ConsoleSink {
    fn on_scroll_sample(&mut self, e: &ScrollSampleEvent) {
        debug(format!(
            "[overlook] scroll seq={} offset={:.1}px biased={:.1}px sections={}",
            e.sequence, e.offset, e.biased_offset, e.section_count
        ));
    }

    fn on_section_change(&mut self, e: &SectionChangeEvent<'_>) {
        debug(format!(
            "[overlook] section seq={} {} -> {}",
            e.sequence,
            or_dash(e.previous),
            or_dash(e.current)
        ));
    }

    fn on_nav_change(&mut self, e: &NavChangeEvent) {
        debug(format!(
            "[overlook] nav seq={} +{} -{}",
            e.sequence, e.activated, e.deactivated
        ));
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        debug(format!(
            "[overlook] parallax seq={} primary={:.1}px secondary={:.1}px opacity={:.3}{}",
            e.sequence,
            e.frame.primary_shift,
            e.frame.secondary_shift,
            e.frame.primary_opacity,
            if e.pinned { " pinned" } else { "" }
        ));
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        debug(format!(
            "[overlook] reveal element={} ratio={:.3} pending={}",
            e.element.0, e.ratio, e.pending
        ));
    }

    fn on_degraded(&mut self, sequence: u64, error: SyncError) {
        let line = format!("[overlook] degraded seq={sequence} {error}");
        if error == SyncError::NoActiveSection {
            debug(line);
        } else {
            console::warn_1(&JsValue::from_str(&line));
        }
    }
}
