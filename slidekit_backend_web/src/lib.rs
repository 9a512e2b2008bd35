// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for slidekit.
//!
//! This crate binds the platform-free carousel in `slidekit_core` to browser
//! APIs:
//!
//! - [`MountedCarousel`]: discovers the grid, subscribes input listeners and
//!   drives the cooldown and auto-play timers
//! - [`DomPresenter`]: builds the compact chrome and applies frames to it
//! - [`Markup`]: selectors and class names shared with the stylesheet
//! - [`EventListener`], [`Timeout`], [`Interval`]: handles that unsubscribe
//!   or clear on drop
//!
//! # Crate features
//!
//! - `trace` forwards core tracing and provides `ConsoleSink`.
//! - `deterrent` provides `Deterrent`, a cosmetic devtools-shortcut blocker.

#![no_std]

extern crate alloc;

#[cfg(feature = "trace")]
mod console;
#[cfg(feature = "deterrent")]
mod deterrent;
mod listener;
mod markup;
mod mount;
mod presenter;
mod timer;

#[cfg(feature = "trace")]
pub use console::ConsoleSink;
#[cfg(feature = "deterrent")]
pub use deterrent::Deterrent;
pub use listener::{EventListener, ListenerOptions};
pub use markup::Markup;
pub use mount::MountedCarousel;
pub use presenter::DomPresenter;
pub use slidekit_core::render::Presenter;
pub use timer::{Interval, Timeout};

use slidekit_core::input::{Key, Modifiers};
use web_sys::{KeyboardEvent, Window};

/// Returns the viewport width in CSS pixels.
///
/// An unreadable width reads as infinite, which classifies as wide.
#[must_use]
pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::INFINITY)
}

/// Reads the pressed key, falling back to the legacy key code when the
/// browser leaves `key` empty.
pub(crate) fn read_key(event: &KeyboardEvent) -> Key {
    let key = event.key();
    if !key.is_empty() {
        return Key::from_dom(&key);
    }
    #[allow(deprecated, reason = "older engines only report keyCode")]
    let code = event.key_code();
    Key::from_key_code(code)
}

/// Reads the modifier state of a keyboard event.
#[cfg_attr(
    not(feature = "deterrent"),
    expect(dead_code, reason = "only the deterrent inspects modifiers")
)]
pub(crate) fn read_modifiers(event: &KeyboardEvent) -> Modifiers {
    Modifiers::from_flags(
        event.shift_key(),
        event.alt_key(),
        event.ctrl_key(),
        event.meta_key(),
    )
}
