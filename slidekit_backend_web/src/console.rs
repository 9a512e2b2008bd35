// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace sink that logs to the browser console.

use alloc::format;

use slidekit_core::trace::{
    AutoplayEvent, ModeChangeEvent, SettleEvent, SlideEvent, TraceSink,
};
use web_sys::console;

/// A [`TraceSink`] that writes one `console.debug` line per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    fn log(line: &str) {
        console::debug_1(&line.into());
    }
}

impl TraceSink for ConsoleSink {
    fn on_slide(&mut self, e: &SlideEvent) {
        Self::log(&format!(
            "[slidekit] {:?}: {} -> {} of {}",
            e.command, e.from, e.to, e.item_count
        ));
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        Self::log(&format!("[slidekit] settled at {}", e.index));
    }

    fn on_mode_change(&mut self, e: &ModeChangeEvent) {
        Self::log(&format!("[slidekit] {:?} at width {}", e.change, e.width));
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        Self::log(&format!("[slidekit] autoplay {:?} -> {:?}", e.from, e.to));
    }
}
