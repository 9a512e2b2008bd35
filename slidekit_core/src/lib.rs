// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-independent core of a responsive slide carousel.
//!
//! `slidekit_core` holds every decision a carousel makes, free of any DOM or
//! windowing dependency. It is `no_std` compatible (with `alloc`). Platform
//! backends extract widths, touch points and key names from native events,
//! hand them to the core, and apply the resulting frames.
//!
//! # Architecture
//!
//! ```text
//!   resize ──► ViewportClassifier ──► ModeChange ──┐
//!                                                  ▼
//!   touch / key / click ──► input ──► Command ──► Carousel ──► SlideMachine
//!                                                  │
//!                       ┌──────────────────────────┘
//!                       ▼
//!   SlideFrame ──► Presenter::apply()      Settle ──► host timer ──► Carousel::settle()
//! ```
//!
//! **[`viewport`]**: reduces the window width to wide/compact mode and
//! reports transitions.
//!
//! **[`machine`]**: index plus an `Idle`/`Transitioning` phase; cooldowns are
//! ended by token so stale timers cannot unlock a newer transition.
//!
//! **[`input`]**: swipe recognition, key normalization and the [`Command`]
//! type every input adapter produces.
//!
//! **[`render`]**: the pure [`SlideFrame`] computation and the [`Presenter`]
//! trait backends implement.
//!
//! **[`autoplay`]**: when to arm and clear an auto-advance timer.
//!
//! **[`carousel`]**: the component that ties the above together.
//!
//! **[`config`]**: presets and builders for every tunable constant.
//!
//! **[`deterrent`]**: an opt-in, cosmetic shortcut-suppression policy.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//!
//! [`Command`]: input::Command
//! [`SlideFrame`]: render::SlideFrame
//! [`Presenter`]: render::Presenter

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod deterrent;
pub mod input;
pub mod machine;
pub mod render;
pub mod trace;
pub mod viewport;
