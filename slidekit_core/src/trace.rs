// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for carousel state changes.
//!
//! This module provides a [`TraceSink`] trait with one method per event kind.
//! Every method defaults to a no-op, so sinks only implement what they need.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! Only accepted state changes are traced. Rejected commands are absorbed
//! silently and never reach a sink.
//!
//! # Crate features
//!
//! - `trace` enables the `Tracer` method bodies.

use crate::autoplay::AutoplayState;
use crate::input::Command;
use crate::viewport::ModeChange;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a command is accepted and the index changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideEvent {
    /// The command that caused the change.
    pub command: Command,
    /// Index before the command.
    pub from: usize,
    /// Index after the command.
    pub to: usize,
    /// Number of items in the carousel.
    pub item_count: usize,
}

/// Emitted when a cooldown ends and the carousel accepts commands again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleEvent {
    /// Index the carousel settled on.
    pub index: usize,
}

/// Emitted when the viewport crosses the compact-mode breakpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeChangeEvent {
    /// Direction of the crossing.
    pub change: ModeChange,
    /// Viewport width that triggered it.
    pub width: f64,
}

/// Emitted when auto-play changes state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoplayEvent {
    /// State before the change.
    pub from: AutoplayState,
    /// State after the change.
    pub to: AutoplayState,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives carousel trace events.
///
/// All methods have default no-op implementations.
pub trait TraceSink {
    /// Called after an accepted command has been rendered.
    fn on_slide(&mut self, e: &SlideEvent) {
        _ = e;
    }

    /// Called when a cooldown ends.
    fn on_settle(&mut self, e: &SettleEvent) {
        _ = e;
    }

    /// Called when compact mode is entered or left.
    fn on_mode_change(&mut self, e: &ModeChangeEvent) {
        _ = e;
    }

    /// Called when auto-play starts, stops, suspends or resumes.
    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`SlideEvent`].
    #[inline]
    pub fn slide(&mut self, e: &SlideEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_slide(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SettleEvent`].
    #[inline]
    pub fn settle(&mut self, e: &SettleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_settle(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ModeChangeEvent`].
    #[inline]
    pub fn mode_change(&mut self, e: &ModeChangeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mode_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AutoplayEvent`].
    #[inline]
    pub fn autoplay(&mut self, e: &AutoplayEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_autoplay(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
