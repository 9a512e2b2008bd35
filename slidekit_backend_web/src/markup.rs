// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selectors and class names shared with the page stylesheet.

use alloc::format;
use alloc::string::String;

/// Names the elements a carousel discovers and the classes it creates.
///
/// The grid and item entries are CSS selectors. Every other entry is a bare
/// class (or attribute) name applied to elements the presenter builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markup {
    /// Selector of the sliding container.
    pub grid: &'static str,
    /// Selector of one item, matched inside the grid.
    pub item: &'static str,
    /// Class of the wrapper built around the grid in compact mode.
    pub wrapper_class: &'static str,
    /// Class shared by both navigation buttons.
    pub nav_class: &'static str,
    /// Class of the "previous" button.
    pub previous_class: &'static str,
    /// Class of the "next" button.
    pub next_class: &'static str,
    /// Class of the indicator dot container.
    pub dots_class: &'static str,
    /// Class of one indicator dot.
    pub dot_class: &'static str,
    /// Class toggled on the active dot.
    pub active_class: &'static str,
    /// Attribute carrying a dot's zero-based item index.
    pub index_attribute: &'static str,
}

impl Markup {
    /// Class names used by the stills section of the site.
    pub const STILLS: Self = Self {
        grid: ".stills-grid",
        item: ".still-item",
        wrapper_class: "mobile-carousel-wrapper",
        nav_class: "mobile-carousel-nav",
        previous_class: "mobile-carousel-prev",
        next_class: "mobile-carousel-next",
        dots_class: "mobile-carousel-dots",
        dot_class: "mobile-carousel-dot",
        active_class: "active",
        index_attribute: "data-slide-index",
    };

    /// Returns a `.class` selector for one of the class names.
    #[must_use]
    pub fn class_selector(class: &str) -> String {
        format!(".{class}")
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::STILLS
    }
}
