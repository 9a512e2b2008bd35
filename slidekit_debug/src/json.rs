// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter for recorded sessions.
//!
//! [`export`] writes the records of a
//! [`RecorderSink`](super::recorder::RecorderSink) as one JSON array, one
//! object per event, each carrying `seq` and `kind` plus the event fields.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::pretty::{autoplay_name, command_name, mode_change_name};
use crate::recorder::{Record, RecordedEvent};

fn to_value(record: &Record) -> Value {
    let seq = record.seq;
    match record.event {
        RecordedEvent::Slide(e) => json!({
            "seq": seq,
            "kind": "slide",
            "command": command_name(e.command),
            "from": e.from,
            "to": e.to,
            "item_count": e.item_count,
        }),
        RecordedEvent::Settle(e) => json!({
            "seq": seq,
            "kind": "settle",
            "index": e.index,
        }),
        RecordedEvent::ModeChange(e) => json!({
            "seq": seq,
            "kind": "mode_change",
            "change": mode_change_name(e.change),
            "width": e.width,
        }),
        RecordedEvent::Autoplay(e) => json!({
            "seq": seq,
            "kind": "autoplay",
            "from": autoplay_name(e.from),
            "to": autoplay_name(e.to),
        }),
    }
}

/// Exports recorded events as a JSON array.
///
/// A non-finite mode-change width is written as `null`.
pub fn export(records: &[Record], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = records.iter().map(to_value).collect();
    serde_json::to_writer_pretty(&mut *writer, &events)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use slidekit_core::autoplay::AutoplayState;
    use slidekit_core::input::Command;
    use slidekit_core::trace::{AutoplayEvent, ModeChangeEvent, SettleEvent, SlideEvent, TraceSink};
    use slidekit_core::viewport::ModeChange;

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_mode_change(&ModeChangeEvent {
            change: ModeChange::EnteredCompact,
            width: 390.0,
        });
        rec.on_slide(&SlideEvent {
            command: Command::Previous,
            from: 0,
            to: 4,
            item_count: 5,
        });
        rec.on_settle(&SettleEvent { index: 4 });
        rec.on_autoplay(&AutoplayEvent {
            from: AutoplayState::Stopped,
            to: AutoplayState::Running,
        });

        let mut out = Vec::new();
        export(rec.records(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 4, "one object per event");

        assert_eq!(parsed[0]["kind"], "mode_change");
        assert_eq!(parsed[0]["change"], "entered-compact");
        assert_eq!(parsed[0]["width"], 390.0);

        // Wrap-around from the first item.
        assert_eq!(parsed[1]["kind"], "slide");
        assert_eq!(parsed[1]["command"], "previous");
        assert_eq!(parsed[1]["to"], 4);

        assert_eq!(parsed[2]["index"], 4);
        assert_eq!(parsed[3]["to"], "running");
        assert_eq!(parsed[3]["seq"], 3);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty(), "got: {json_str}");
    }

    #[test]
    fn infinite_width_exports_as_null() {
        let mut rec = RecorderSink::new();
        rec.on_mode_change(&ModeChangeEvent {
            change: ModeChange::LeftCompact,
            width: f64::INFINITY,
        });
        let mut out = Vec::new();
        export(rec.records(), &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        assert!(parsed[0]["width"].is_null(), "got: {}", parsed[0]);
    }
}
