// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport classification.
//!
//! The carousel only takes over on narrow viewports. On wide viewports the
//! items stay in their native grid flow and every navigation command is
//! ignored. [`ViewportClassifier`] reduces a stream of window widths to the
//! [`ModeChange`] edges the component has to react to.

/// Default widest viewport, in CSS pixels, that uses the compact presentation.
pub const COMPACT_MAX_WIDTH: f64 = 768.0;

/// Returns `true` if `width` falls in compact mode.
///
/// The comparison is inclusive, so a viewport exactly `compact_max_width`
/// wide is compact. A NaN width is never compact.
#[inline]
#[must_use]
pub fn classify(width: f64, compact_max_width: f64) -> bool {
    width <= compact_max_width
}

/// Presentation mode selected by the viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewportMode {
    /// Multi-column grid; the carousel is inert.
    #[default]
    Wide,
    /// One item at a time with swipe, keyboard and dot navigation.
    Compact,
}

impl ViewportMode {
    /// Returns `true` for [`ViewportMode::Compact`].
    #[inline]
    #[must_use]
    pub const fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }
}

/// An edge between the two [`ViewportMode`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeChange {
    /// Wide to compact: the compact presentation must be materialized.
    EnteredCompact,
    /// Compact to wide: index and transform must be reset.
    LeftCompact,
}

/// Tracks the current [`ViewportMode`] across resize events.
///
/// The classifier starts out [`Wide`](ViewportMode::Wide), so the very first
/// observation of a narrow viewport reports
/// [`EnteredCompact`](ModeChange::EnteredCompact). Hosts feed the initial
/// window width through [`observe`](Self::observe) just like any later resize.
#[derive(Clone, Copy, Debug)]
pub struct ViewportClassifier {
    compact_max_width: f64,
    mode: ViewportMode,
}

impl ViewportClassifier {
    /// Creates a classifier with the given breakpoint.
    #[must_use]
    pub const fn new(compact_max_width: f64) -> Self {
        Self {
            compact_max_width,
            mode: ViewportMode::Wide,
        }
    }

    /// Returns the current mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> ViewportMode {
        self.mode
    }

    /// Re-classifies the viewport and reports a transition, if any.
    pub fn observe(&mut self, width: f64) -> Option<ModeChange> {
        let mode = if classify(width, self.compact_max_width) {
            ViewportMode::Compact
        } else {
            ViewportMode::Wide
        };
        if mode == self.mode {
            return None;
        }
        self.mode = mode;
        Some(match mode {
            ViewportMode::Compact => ModeChange::EnteredCompact,
            ViewportMode::Wide => ModeChange::LeftCompact,
        })
    }
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self::new(COMPACT_MAX_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(classify(768.0, COMPACT_MAX_WIDTH));
        assert!(classify(320.0, COMPACT_MAX_WIDTH));
        assert!(!classify(768.5, COMPACT_MAX_WIDTH));
        assert!(!classify(f64::NAN, COMPACT_MAX_WIDTH));
    }

    #[test]
    fn reports_only_edges() {
        let mut vc = ViewportClassifier::default();
        assert_eq!(vc.observe(1280.0), None, "starts wide");
        assert_eq!(vc.observe(600.0), Some(ModeChange::EnteredCompact));
        assert_eq!(vc.observe(500.0), None);
        assert!(vc.mode().is_compact());
        assert_eq!(vc.observe(1024.0), Some(ModeChange::LeftCompact));
        assert_eq!(vc.observe(1100.0), None);
    }

    #[test]
    fn first_narrow_observation_enters_compact() {
        let mut vc = ViewportClassifier::new(480.0);
        assert_eq!(vc.observe(480.0), Some(ModeChange::EnteredCompact));
    }
}
