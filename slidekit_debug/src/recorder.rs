// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event it
//! receives, tagged with a sequence number, for later inspection or
//! [export](crate::json::export).

use slidekit_core::trace::{AutoplayEvent, ModeChangeEvent, SettleEvent, SlideEvent, TraceSink};

/// One recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`SlideEvent`].
    Slide(SlideEvent),
    /// A [`SettleEvent`].
    Settle(SettleEvent),
    /// A [`ModeChangeEvent`].
    ModeChange(ModeChangeEvent),
    /// An [`AutoplayEvent`].
    Autoplay(AutoplayEvent),
}

/// A recorded event and its position in the recording.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    /// Zero-based arrival order.
    pub seq: u64,
    /// The event.
    pub event: RecordedEvent,
}

/// A [`TraceSink`] that stores events in arrival order.
#[derive(Debug, Default)]
pub struct RecorderSink {
    records: Vec<Record>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every recorded event. Sequence numbers restart at zero.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn push(&mut self, event: RecordedEvent) {
        let seq = self.records.len() as u64;
        self.records.push(Record { seq, event });
    }
}

impl TraceSink for RecorderSink {
    fn on_slide(&mut self, e: &SlideEvent) {
        self.push(RecordedEvent::Slide(*e));
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        self.push(RecordedEvent::Settle(*e));
    }

    fn on_mode_change(&mut self, e: &ModeChangeEvent) {
        self.push(RecordedEvent::ModeChange(*e));
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.push(RecordedEvent::Autoplay(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;
    use slidekit_core::carousel::Carousel;
    use slidekit_core::config::CarouselConfig;
    use slidekit_core::input::Command;
    use slidekit_core::render::{Presenter, SlideFrame};
    use slidekit_core::trace::Tracer;
    use slidekit_core::viewport::ModeChange;

    struct Null;

    impl Presenter for Null {
        fn materialize(&mut self, _item_count: usize) {}
        fn apply(&mut self, _frame: &SlideFrame) {}
        fn restore(&mut self) {}
    }

    #[test]
    fn records_a_carousel_session_in_order() {
        let mut rec = RecorderSink::new();
        let mut presenter = Null;
        let config = CarouselConfig::stills().with_autoplay(Duration::from_secs(5));
        let mut carousel = Carousel::new(3, config);

        {
            let mut tracer = Tracer::new(&mut rec);
            carousel.resize(375.0, &mut presenter, &mut tracer);
            let settle = carousel
                .dispatch(Command::Next, &mut presenter, &mut tracer)
                .expect("compact carousel accepts next");
            // Rejected during the cooldown; never recorded.
            assert!(
                carousel
                    .dispatch(Command::Next, &mut presenter, &mut tracer)
                    .is_none(),
                "second command inside the cooldown must be rejected"
            );
            assert!(carousel.settle(settle.token, &mut tracer), "token is current");
            let _ = carousel.start_autoplay(&mut tracer);
        }

        let kinds: Vec<_> = rec.records().iter().map(|r| r.event).collect();
        assert_eq!(kinds.len(), 4, "got: {kinds:?}");
        assert!(matches!(
            kinds[0],
            RecordedEvent::ModeChange(ModeChangeEvent {
                change: ModeChange::EnteredCompact,
                ..
            })
        ));
        assert!(matches!(
            kinds[1],
            RecordedEvent::Slide(SlideEvent { from: 0, to: 1, .. })
        ));
        assert!(matches!(kinds[2], RecordedEvent::Settle(SettleEvent { index: 1 })));
        assert!(matches!(kinds[3], RecordedEvent::Autoplay(_)));
        assert_eq!(rec.records()[3].seq, 3, "sequence follows arrival order");
    }

    #[test]
    fn clear_restarts_sequence() {
        let mut rec = RecorderSink::new();
        rec.on_settle(&SettleEvent { index: 0 });
        rec.on_settle(&SettleEvent { index: 1 });
        rec.clear();
        assert!(rec.is_empty(), "cleared recorder is empty");
        rec.on_settle(&SettleEvent { index: 2 });
        assert_eq!(rec.len(), 1, "one event after clear");
        assert_eq!(rec.records()[0].seq, 0, "sequence restarts");
    }
}
