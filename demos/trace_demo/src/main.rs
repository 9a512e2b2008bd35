// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated carousel session that exercises the tracing and diagnostics
//! pipeline.
//!
//! Drives a five-item carousel through a resize into compact mode, a burst of
//! navigation (some of it rejected by the cooldown), auto-play across a hidden
//! page and a resize back to wide. Events go to both a
//! [`PrettyPrintSink`](slidekit_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](slidekit_debug::recorder::RecorderSink), and the recording
//! is exported as `slidekit_trace.json`.

use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;

use slidekit_core::carousel::{Carousel, Settle};
use slidekit_core::config::CarouselConfig;
use slidekit_core::input::Command;
use slidekit_core::render::{Presenter, SlideFrame};
use slidekit_core::trace::{
    AutoplayEvent, ModeChangeEvent, SettleEvent, SlideEvent, TraceSink, Tracer,
};

use slidekit_debug::pretty::PrettyPrintSink;
use slidekit_debug::recorder::RecorderSink;

const ITEM_COUNT: usize = 5;

/// Forwards every event to two sinks.
struct Tee<'a> {
    a: &'a mut dyn TraceSink,
    b: &'a mut dyn TraceSink,
}

impl TraceSink for Tee<'_> {
    fn on_slide(&mut self, e: &SlideEvent) {
        self.a.on_slide(e);
        self.b.on_slide(e);
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        self.a.on_settle(e);
        self.b.on_settle(e);
    }

    fn on_mode_change(&mut self, e: &ModeChangeEvent) {
        self.a.on_mode_change(e);
        self.b.on_mode_change(e);
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.a.on_autoplay(e);
        self.b.on_autoplay(e);
    }
}

/// Prints each applied transform instead of touching a page.
struct Headless;

impl Presenter for Headless {
    fn materialize(&mut self, item_count: usize) {
        println!("  materialize: {item_count} dots");
    }

    fn apply(&mut self, frame: &SlideFrame) {
        println!("  apply: transform={:?}", frame.transform());
    }

    fn restore(&mut self) {
        println!("  restore");
    }
}

fn main() {
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();
    let mut presenter = Headless;

    let config = CarouselConfig::stills().with_autoplay(Duration::from_secs(5));
    let mut carousel = Carousel::new(ITEM_COUNT, config);

    {
        let mut tee = Tee {
            a: &mut pretty,
            b: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);

        // Wide first: nothing happens.
        carousel.resize(1280.0, &mut presenter, &mut tracer);
        carousel.resize(390.0, &mut presenter, &mut tracer);

        let mut pending: Option<Settle> = None;
        let script = [
            Command::Next,
            Command::Next, // inside the cooldown
            Command::Previous,
            Command::Previous,
            Command::GoTo(3),
            Command::GoTo(3), // already current
            Command::GoTo(ITEM_COUNT),
        ];
        for command in script {
            match carousel.dispatch(command, &mut presenter, &mut tracer) {
                Some(settle) => pending = Some(settle),
                None => {
                    println!("  rejected: {command:?}");
                    // Let the cooldown elapse before the next command.
                    if let Some(settle) = pending.take() {
                        carousel.settle(settle.token, &mut tracer);
                    }
                }
            }
        }
        if let Some(settle) = pending.take() {
            carousel.settle(settle.token, &mut tracer);
        }

        let _ = carousel.start_autoplay(&mut tracer);
        let _ = carousel.visibility_changed(false, &mut tracer);
        let _ = carousel.visibility_changed(true, &mut tracer);
        let _ = carousel.stop_autoplay(&mut tracer);

        carousel.resize(1024.0, &mut presenter, &mut tracer);
    }

    let path = "slidekit_trace.json";
    let result = File::create(path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        slidekit_debug::json::export(recorder.records(), &mut writer)
    });
    match result {
        Ok(()) => println!("wrote {} events to {path}", recorder.len()),
        Err(err) => eprintln!("failed to write {path}: {err}"),
    }
}
