// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel component.
//!
//! [`Carousel`] wires the [viewport classifier](crate::viewport), the
//! [slide machine](crate::machine) and [auto-play](crate::autoplay) to a
//! [`Presenter`]. Hosts construct one instance per carousel on the page and
//! route every input adapter through it:
//!
//! ```rust,ignore
//! let mut carousel = Carousel::new(items.len(), CarouselConfig::stills());
//! carousel.resize(window_width, &mut presenter, &mut Tracer::none());
//!
//! // On a click, key press or swipe:
//! if let Some(settle) = carousel.dispatch(Command::Next, &mut presenter, &mut tracer) {
//!     set_timeout(settle.after, move || carousel.settle(settle.token, &mut tracer));
//! }
//! ```

use core::time::Duration;

use crate::autoplay::{Autoplay, AutoplayState, TimerAction};
use crate::config::CarouselConfig;
use crate::input::{Command, SwipeTracker};
use crate::machine::{Phase, SettleToken, SlideMachine};
use crate::render::{Presenter, SlideFrame};
use crate::trace::{AutoplayEvent, ModeChangeEvent, SettleEvent, SlideEvent, Tracer};
use crate::viewport::{ModeChange, ViewportClassifier};

/// A cooldown the host must schedule after an accepted command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "the carousel stays locked until the token is settled"]
pub struct Settle {
    /// Token to pass back to [`Carousel::settle`].
    pub token: SettleToken,
    /// Delay before settling.
    pub after: Duration,
}

/// A viewport mode change reported by [`Carousel::resize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resized {
    /// Direction of the crossing.
    pub change: ModeChange,
    /// What to do with the auto-play timer: suspended outside compact mode,
    /// resumed on the way back in.
    pub timer: TimerAction,
}

/// A responsive slide carousel over a fixed number of items.
#[derive(Clone, Debug)]
pub struct Carousel {
    config: CarouselConfig,
    viewport: ViewportClassifier,
    machine: SlideMachine,
    autoplay: Autoplay,
}

impl Carousel {
    /// Creates a carousel over `item_count` items.
    ///
    /// The carousel starts in wide mode. Feed the initial viewport width
    /// through [`resize`](Self::resize) to materialize the compact
    /// presentation on narrow screens.
    #[must_use]
    pub fn new(item_count: usize, config: CarouselConfig) -> Self {
        let mut autoplay = Autoplay::new(config.autoplay);
        autoplay.compact_changed(false);
        Self {
            viewport: ViewportClassifier::new(config.compact_max_width),
            machine: SlideMachine::new(item_count),
            autoplay,
            config,
        }
    }

    /// The configuration this carousel was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Number of items.
    #[inline]
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.machine.item_count()
    }

    /// Index of the visible item.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.machine.index()
    }

    /// Current machine phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Returns `true` while compact mode is active.
    #[inline]
    #[must_use]
    pub const fn is_compact(&self) -> bool {
        self.machine.is_compact()
    }

    /// Returns `true` if keyboard arrows should be consumed.
    ///
    /// Hosts additionally require focus inside the carousel before
    /// suppressing the key's default action.
    #[inline]
    #[must_use]
    pub const fn accepts_keys(&self) -> bool {
        self.machine.is_compact()
    }

    /// Current auto-play state.
    #[inline]
    #[must_use]
    pub const fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    /// A swipe tracker using this carousel's thresholds.
    #[must_use]
    pub const fn swipe_tracker(&self) -> SwipeTracker {
        SwipeTracker::new(self.config.swipe)
    }

    /// The frame describing the current state.
    #[must_use]
    pub fn frame(&self) -> SlideFrame {
        SlideFrame::compute(self.index(), self.item_count(), self.is_compact())
    }

    /// Re-classifies the viewport and reacts to a mode change.
    ///
    /// Entering compact mode materializes the compact presentation, applies
    /// the current frame and resumes a suspended auto-play. Leaving it resets
    /// the index to 0, drops any pending cooldown, restores the native layout
    /// and suspends auto-play.
    pub fn resize<P: Presenter + ?Sized>(
        &mut self,
        width: f64,
        presenter: &mut P,
        tracer: &mut Tracer<'_>,
    ) -> Option<Resized> {
        let change = self.viewport.observe(width)?;
        let compact = match change {
            ModeChange::EnteredCompact => {
                self.machine.set_compact(true);
                presenter.materialize(self.item_count());
                presenter.apply(&self.frame());
                true
            }
            ModeChange::LeftCompact => {
                self.machine.reset();
                self.machine.set_compact(false);
                presenter.restore();
                false
            }
        };
        tracer.mode_change(&ModeChangeEvent { change, width });
        let from = self.autoplay.state();
        let timer = self.autoplay.compact_changed(compact);
        self.trace_autoplay(from, tracer);
        Some(Resized { change, timer })
    }

    /// Re-applies the current state without arming a cooldown.
    ///
    /// Materializing is idempotent, so this is safe to call at any time. It
    /// does nothing outside compact mode.
    pub fn refresh<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        if !self.is_compact() {
            return;
        }
        presenter.materialize(self.item_count());
        presenter.apply(&self.frame());
    }

    /// Executes a navigation command.
    ///
    /// On acceptance the new frame is applied synchronously and the returned
    /// [`Settle`] tells the host when to call [`settle`](Self::settle).
    /// Rejected commands return `None` and have no effect.
    pub fn dispatch<P: Presenter + ?Sized>(
        &mut self,
        command: Command,
        presenter: &mut P,
        tracer: &mut Tracer<'_>,
    ) -> Option<Settle> {
        let from = self.index();
        let token = match command {
            Command::Next => self.machine.next(),
            Command::Previous => self.machine.previous(),
            Command::GoTo(index) => self.machine.go_to(index),
        }?;
        presenter.apply(&self.frame());
        tracer.slide(&SlideEvent {
            command,
            from,
            to: self.index(),
            item_count: self.item_count(),
        });
        Some(Settle {
            token,
            after: self.config.cooldown,
        })
    }

    /// Ends the cooldown started by the command that produced `token`.
    pub fn settle(&mut self, token: SettleToken, tracer: &mut Tracer<'_>) -> bool {
        let settled = self.machine.settle(token);
        if settled {
            tracer.settle(&SettleEvent {
                index: self.index(),
            });
        }
        settled
    }

    /// Starts auto-play, if an interval is configured.
    ///
    /// Outside compact mode, or while the page is hidden, auto-play is only
    /// marked [`Suspended`](AutoplayState::Suspended) and the timer is armed
    /// once both conditions hold.
    pub fn start_autoplay(&mut self, tracer: &mut Tracer<'_>) -> TimerAction {
        let from = self.autoplay.state();
        let action = self.autoplay.start();
        self.trace_autoplay(from, tracer);
        action
    }

    /// Stops auto-play.
    pub fn stop_autoplay(&mut self, tracer: &mut Tracer<'_>) -> TimerAction {
        let from = self.autoplay.state();
        let action = self.autoplay.stop();
        self.trace_autoplay(from, tracer);
        action
    }

    /// Suspends or resumes auto-play as the page is hidden or shown.
    pub fn visibility_changed(&mut self, visible: bool, tracer: &mut Tracer<'_>) -> TimerAction {
        let from = self.autoplay.state();
        let action = self.autoplay.visibility_changed(visible);
        self.trace_autoplay(from, tracer);
        action
    }

    fn trace_autoplay(&self, from: AutoplayState, tracer: &mut Tracer<'_>) {
        let to = self.autoplay.state();
        if from != to {
            tracer.autoplay(&AutoplayEvent { from, to });
        }
    }
}
