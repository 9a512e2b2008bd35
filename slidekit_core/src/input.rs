// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-independent input decoding.
//!
//! Raw pointer and keyboard input is reduced to a [`Command`] here. The host
//! backend only extracts coordinates and key names from its native events;
//! every decision about whether a gesture is a swipe or a scroll lives in this
//! module so it can be tested without a browser.

use bitflags::bitflags;
use kurbo::Point;

use crate::config::SwipeConfig;

/// A navigation request for the [`Carousel`](crate::carousel::Carousel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advance one item, wrapping after the last.
    Next,
    /// Step back one item, wrapping before the first.
    Previous,
    /// Jump directly to an item.
    GoTo(usize),
}

/// Decides whether a touch from `start` to `end` is a horizontal swipe.
///
/// A leftward drag (finger moving towards smaller x) advances, a rightward
/// drag goes back. Gestures whose vertical travel reaches
/// [`SwipeConfig::vertical_limit`] are scrolls and never produce a command,
/// whatever their horizontal travel.
#[must_use]
pub fn classify_swipe(start: Point, end: Point, config: &SwipeConfig) -> Option<Command> {
    let diff = start - end;
    let vertical = if diff.y < 0.0 { -diff.y } else { diff.y };
    if vertical.is_nan() || vertical >= config.vertical_limit {
        return None;
    }
    if diff.x > config.threshold {
        Some(Command::Next)
    } else if diff.x < -config.threshold {
        Some(Command::Previous)
    } else {
        None
    }
}

/// Pairs touch-start and touch-end positions into swipe [`Command`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    config: SwipeConfig,
    start: Option<Point>,
}

impl SwipeTracker {
    /// Creates a tracker with the given thresholds.
    #[must_use]
    pub const fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    /// Records where a touch began, replacing any unfinished gesture.
    pub fn begin(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Completes the gesture started by [`begin`](Self::begin).
    ///
    /// A touch-end with no recorded start is ignored.
    pub fn end(&mut self, at: Point) -> Option<Command> {
        let start = self.start.take()?;
        classify_swipe(start, at, &self.config)
    }

    /// Discards an unfinished gesture (e.g. on `touchcancel`).
    pub fn cancel(&mut self) {
        self.start = None;
    }
}

bitflags! {
    /// Modifier keys held during a keyboard event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0001;
        /// Alt / Option.
        const ALT   = 0b0010;
        /// Control.
        const CTRL  = 0b0100;
        /// Meta / Command / Windows.
        const META  = 0b1000;
    }
}

impl Modifiers {
    /// Builds a modifier set from the four DOM boolean flags.
    #[must_use]
    pub fn from_flags(shift: bool, alt: bool, ctrl: bool, meta: bool) -> Self {
        let mut mods = Self::empty();
        mods.set(Self::SHIFT, shift);
        mods.set(Self::ALT, alt);
        mods.set(Self::CTRL, ctrl);
        mods.set(Self::META, meta);
        mods
    }
}

/// A normalized key identity.
///
/// Single printable characters are lower-cased so that `"I"` and `"i"`
/// compare equal; the modifier state carries the shift information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `F12`.
    F12,
    /// A single printable character, lower-cased.
    Char(char),
    /// Anything else.
    Other,
}

impl Key {
    /// Normalizes a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "F12" => Self::F12,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c.to_ascii_lowercase()),
                    _ => Self::Other,
                }
            }
        }
    }

    /// Normalizes a legacy `KeyboardEvent.keyCode` value, for hosts that
    /// report an empty `key`.
    #[must_use]
    pub fn from_key_code(code: u32) -> Self {
        match code {
            37 => Self::ArrowLeft,
            39 => Self::ArrowRight,
            123 => Self::F12,
            _ => match char::from_u32(code) {
                Some(c) if c.is_ascii_alphanumeric() => Self::Char(c.to_ascii_lowercase()),
                _ => Self::Other,
            },
        }
    }
}

/// Maps arrow keys to navigation commands.
#[must_use]
pub fn key_command(key: Key) -> Option<Command> {
    match key {
        Key::ArrowLeft => Some(Command::Previous),
        Key::ArrowRight => Some(Command::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRICT: SwipeConfig = SwipeConfig::STRICT;

    fn swipe(dx: f64, dy: f64, cfg: &SwipeConfig) -> Option<Command> {
        let start = Point::new(200.0, 300.0);
        classify_swipe(start, Point::new(start.x - dx, start.y - dy), cfg)
    }

    #[test]
    fn horizontal_swipe_follows_sign() {
        assert_eq!(swipe(60.0, 10.0, &STRICT), Some(Command::Next));
        assert_eq!(swipe(-60.0, 10.0, &STRICT), Some(Command::Previous));
        assert_eq!(swipe(60.0, -10.0, &STRICT), Some(Command::Next));
    }

    #[test]
    fn vertical_scroll_never_slides() {
        assert_eq!(swipe(60.0, 120.0, &STRICT), None);
        assert_eq!(swipe(-60.0, 120.0, &STRICT), None);
        assert_eq!(swipe(300.0, -50.0, &STRICT), None, "limit is exclusive");
    }

    #[test]
    fn short_drags_are_ignored() {
        assert_eq!(swipe(50.0, 0.0, &STRICT), None, "threshold is exclusive");
        assert_eq!(swipe(-20.0, 0.0, &STRICT), None);
    }

    #[test]
    fn lenient_variant_tolerates_more_drift() {
        assert_eq!(swipe(60.0, 80.0, &STRICT), None);
        assert_eq!(swipe(60.0, 80.0, &SwipeConfig::LENIENT), Some(Command::Next));
        assert_eq!(swipe(60.0, 120.0, &SwipeConfig::LENIENT), None);
    }

    #[test]
    fn tracker_requires_a_start() {
        let mut t = SwipeTracker::new(STRICT);
        assert_eq!(t.end(Point::new(0.0, 0.0)), None);

        t.begin(Point::new(100.0, 100.0));
        assert_eq!(t.end(Point::new(20.0, 105.0)), Some(Command::Next));
        assert_eq!(t.end(Point::new(20.0, 105.0)), None, "start is consumed");

        t.begin(Point::new(100.0, 100.0));
        t.cancel();
        assert_eq!(t.end(Point::new(20.0, 100.0)), None);
    }

    #[test]
    fn keys_normalize() {
        assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_dom("I"), Key::Char('i'));
        assert_eq!(Key::from_dom("Enter"), Key::Other);
        assert_eq!(Key::from_dom(""), Key::Other);
        assert_eq!(Key::from_key_code(39), Key::ArrowRight);
        assert_eq!(Key::from_key_code(85), Key::Char('u'));
    }

    #[test]
    fn arrows_map_to_commands() {
        assert_eq!(key_command(Key::ArrowLeft), Some(Command::Previous));
        assert_eq!(key_command(Key::ArrowRight), Some(Command::Next));
        assert_eq!(key_command(Key::Char('a')), None);
    }

    #[test]
    fn modifiers_from_flags() {
        let mods = Modifiers::from_flags(true, false, true, false);
        assert_eq!(mods, Modifiers::SHIFT | Modifiers::CTRL);
    }
}
