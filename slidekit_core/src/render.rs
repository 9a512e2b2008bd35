// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render sync: from state to visual properties.
//!
//! [`SlideFrame::compute`] is a pure function of the current index, the item
//! count and compact mode. A [`Presenter`] applies the frame to whatever
//! native tree the host owns. Applying the same frame twice must leave the
//! native tree unchanged.

use alloc::format;
use alloc::string::String;

/// Visual weight of a navigation button.
///
/// Index wrapping is circular, but the buttons dim at either end of the
/// sequence to hint where it starts and stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Affordance {
    /// Normal emphasis.
    #[default]
    Full,
    /// De-emphasized (first item for "previous", last item for "next").
    Dimmed,
}

/// Everything a presenter needs to draw one carousel state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideFrame {
    /// Index of the visible item.
    pub index: usize,
    /// Number of items (and indicator dots).
    pub item_count: usize,
    /// Horizontal offset of the sliding container, in percent of its width.
    /// Zero outside compact mode.
    pub offset_percent: f64,
    /// Emphasis of the "previous" button.
    pub previous: Affordance,
    /// Emphasis of the "next" button.
    pub next: Affordance,
}

impl SlideFrame {
    /// Computes the frame for `index` out of `item_count` items.
    ///
    /// Outside compact mode the frame describes the native grid flow: no
    /// offset and both buttons at full emphasis.
    #[must_use]
    pub fn compute(index: usize, item_count: usize, compact: bool) -> Self {
        if !compact || item_count == 0 {
            return Self {
                index,
                item_count,
                offset_percent: 0.0,
                previous: Affordance::Full,
                next: Affordance::Full,
            };
        }
        let offset_percent = -(index as f64) * 100.0;
        Self {
            index,
            item_count,
            offset_percent,
            previous: if index == 0 {
                Affordance::Dimmed
            } else {
                Affordance::Full
            },
            next: if index + 1 == item_count {
                Affordance::Dimmed
            } else {
                Affordance::Full
            },
        }
    }

    /// Returns `true` if indicator dot `dot` should be marked active.
    #[inline]
    #[must_use]
    pub const fn is_dot_active(&self, dot: usize) -> bool {
        dot == self.index
    }

    /// CSS `transform` value for the sliding container.
    ///
    /// Empty when the frame has no offset, which removes the property and
    /// returns the container to its native flow.
    #[must_use]
    pub fn transform(&self) -> String {
        if self.offset_percent == 0.0 {
            String::new()
        } else {
            format!("translateX({}%)", self.offset_percent)
        }
    }
}

/// Applies [`SlideFrame`]s to a platform-native presentation.
///
/// The DOM presenter implements this trait, and tests use recording doubles.
pub trait Presenter {
    /// Builds the compact presentation (wrapper, buttons, `item_count` dots)
    /// if it does not exist yet. Calling it again must not duplicate anything.
    fn materialize(&mut self, item_count: usize);

    /// Applies `frame` to the compact presentation.
    fn apply(&mut self, frame: &SlideFrame);

    /// Tears down the compact presentation and clears the applied offset,
    /// returning the items to their native layout.
    fn restore(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_negative_index_times_hundred() {
        let f = SlideFrame::compute(2, 4, true);
        assert_eq!(f.offset_percent, -200.0);
        assert_eq!(f.transform(), "translateX(-200%)");
    }

    #[test]
    fn first_slide_has_no_transform() {
        let f = SlideFrame::compute(0, 4, true);
        assert_eq!(f.transform(), "");
        assert_eq!(f.previous, Affordance::Dimmed);
        assert_eq!(f.next, Affordance::Full);
    }

    #[test]
    fn last_slide_dims_next() {
        let f = SlideFrame::compute(3, 4, true);
        assert_eq!(f.previous, Affordance::Full);
        assert_eq!(f.next, Affordance::Dimmed);
    }

    #[test]
    fn single_item_dims_both() {
        let f = SlideFrame::compute(0, 1, true);
        assert_eq!((f.previous, f.next), (Affordance::Dimmed, Affordance::Dimmed));
    }

    #[test]
    fn wide_mode_is_native_flow() {
        let f = SlideFrame::compute(3, 4, false);
        assert_eq!(f.offset_percent, 0.0);
        assert_eq!(f.transform(), "");
        assert_eq!(f.next, Affordance::Full);
    }

    #[test]
    fn dots_track_index() {
        let f = SlideFrame::compute(1, 3, true);
        let active: alloc::vec::Vec<bool> = (0..3).map(|i| f.is_dot_active(i)).collect();
        assert_eq!(active, [false, true, false]);
    }

    #[test]
    fn compute_is_idempotent() {
        assert_eq!(SlideFrame::compute(2, 5, true), SlideFrame::compute(2, 5, true));
    }
}
