// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stylesheets the page depends on but does not ship.

use web_sys::{Document, HtmlElement};

use wasm_bindgen::JsValue;

/// Entry animation for revealed elements.
pub const REVEAL_CSS: &str = "
.animate-in {
    animation: fadeInUp 0.6s ease forwards;
}

@keyframes fadeInUp {
    from {
        opacity: 0;
        transform: translateY(20px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}
";

/// Highlight for the active navigation link.
pub const ACTIVE_LINK_CSS: &str = "
.nav-link.active {
    color: var(--color-primary) !important;
}
.nav-link.active::after {
    width: 100% !important;
}
";

/// Whole-page fade once every resource has loaded.
pub const LOADED_CSS: &str = "
body {
    opacity: 0;
    transition: opacity 0.5s ease;
}
body.loaded {
    opacity: 1;
}
";

/// Class added to `<body>` after the `load` event.
pub const LOADED_CLASS: &str = "loaded";

/// Appends a `<style>` element with `css` to the document head.
///
/// Does nothing if the document has no head.
pub fn inject(document: &Document, css: &str) -> Result<(), JsValue> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}

/// Hides a revealable element until its animation runs.
pub fn prepare_revealable(el: &HtmlElement) {
    let s = el.style();
    let _ = s.set_property("opacity", "0");
    let _ = s.set_property("transform", "translateY(20px)");
}

/// Marks the page as loaded and installs the fade styles.
pub fn mark_loaded(document: &Document) -> Result<(), JsValue> {
    if let Some(body) = document.body() {
        body.class_list().add_1(LOADED_CLASS)?;
    }
    inject(document, LOADED_CSS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_animation_ends_in_place() {
        assert!(REVEAL_CSS.contains("animation: fadeInUp 0.6s ease forwards"));
        assert!(REVEAL_CSS.contains("transform: translateY(0);"));
    }

    #[test]
    fn loaded_rule_targets_the_class() {
        assert!(LOADED_CSS.contains(&alloc::format!("body.{LOADED_CLASS}")));
    }
}
