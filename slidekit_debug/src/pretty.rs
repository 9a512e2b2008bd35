// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use slidekit_core::autoplay::AutoplayState;
use slidekit_core::input::Command;
use slidekit_core::trace::{AutoplayEvent, ModeChangeEvent, SettleEvent, SlideEvent, TraceSink};
use slidekit_core::viewport::ModeChange;

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub(crate) fn command_name(command: Command) -> String {
    match command {
        Command::Next => "next".to_owned(),
        Command::Previous => "previous".to_owned(),
        Command::GoTo(i) => format!("go_to({i})"),
    }
}

pub(crate) fn mode_change_name(change: ModeChange) -> &'static str {
    match change {
        ModeChange::EnteredCompact => "entered-compact",
        ModeChange::LeftCompact => "left-compact",
    }
}

pub(crate) fn autoplay_name(state: AutoplayState) -> &'static str {
    match state {
        AutoplayState::Stopped => "stopped",
        AutoplayState::Running => "running",
        AutoplayState::Suspended => "suspended",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_slide(&mut self, e: &SlideEvent) {
        let _ = writeln!(
            self.writer,
            "[slide] {} {}->{} of {}",
            command_name(e.command),
            e.from,
            e.to,
            e.item_count,
        );
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        let _ = writeln!(self.writer, "[settle] index={}", e.index);
    }

    fn on_mode_change(&mut self, e: &ModeChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[mode] {} width={:.0}px",
            mode_change_name(e.change),
            e.width,
        );
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        let _ = writeln!(
            self.writer,
            "[autoplay] {}->{}",
            autoplay_name(e.from),
            autoplay_name(e.to),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_print_slide() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_slide(&SlideEvent {
            command: Command::GoTo(3),
            from: 0,
            to: 3,
            item_count: 5,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[slide] go_to(3) 0->3 of 5\n");
    }

    #[test]
    fn pretty_print_mode_and_autoplay() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_mode_change(&ModeChangeEvent {
            change: ModeChange::EnteredCompact,
            width: 375.0,
        });
        sink.on_autoplay(&AutoplayEvent {
            from: AutoplayState::Running,
            to: AutoplayState::Suspended,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(
            output.contains("[mode] entered-compact width=375px"),
            "got: {output}"
        );
        assert!(
            output.contains("[autoplay] running->suspended"),
            "got: {output}"
        );
    }
}
