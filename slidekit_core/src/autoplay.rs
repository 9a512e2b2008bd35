// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-advance policy.
//!
//! [`Autoplay`] decides when the host's repeating timer should be armed or
//! cleared. It never owns a timer itself; each transition returns a
//! [`TimerAction`] for the backend to carry out. While the page is hidden, or
//! the carousel is not in compact mode, the timer is cleared and the state
//! becomes [`Suspended`](AutoplayState::Suspended), so no work is done for a
//! carousel that could not show or accept the next item.

use core::time::Duration;

/// Auto-play lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AutoplayState {
    /// Not advancing.
    #[default]
    Stopped,
    /// Advancing at the configured interval.
    Running,
    /// Started, but paused because the page is hidden or the carousel is
    /// not in compact mode.
    Suspended,
}

/// What the host should do with its interval timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerAction {
    /// (Re)arm a repeating timer with this interval.
    Arm(Duration),
    /// Clear the repeating timer.
    Cancel,
    /// Leave the timer as it is.
    Keep,
}

/// Auto-advance state for one carousel.
#[derive(Clone, Copy, Debug)]
pub struct Autoplay {
    interval: Option<Duration>,
    state: AutoplayState,
    visible: bool,
    compact: bool,
}

impl Autoplay {
    /// Creates a stopped auto-play with the given interval. `None` (or a zero
    /// interval) makes [`start`](Self::start) a no-op.
    ///
    /// The page is assumed visible and the carousel compact until told
    /// otherwise.
    #[must_use]
    pub const fn new(interval: Option<Duration>) -> Self {
        Self {
            interval,
            state: AutoplayState::Stopped,
            visible: true,
            compact: true,
        }
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> AutoplayState {
        self.state
    }

    /// Configured interval, if any.
    #[inline]
    #[must_use]
    pub const fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Starts advancing. Arms the timer only if the page is visible and the
    /// carousel compact; otherwise the start is remembered as suspended.
    pub fn start(&mut self) -> TimerAction {
        let Some(interval) = self.interval.filter(|i| !i.is_zero()) else {
            return TimerAction::Keep;
        };
        if self.state != AutoplayState::Stopped {
            return TimerAction::Keep;
        }
        if self.can_run() {
            self.state = AutoplayState::Running;
            TimerAction::Arm(interval)
        } else {
            self.state = AutoplayState::Suspended;
            TimerAction::Keep
        }
    }

    /// Stops advancing.
    pub fn stop(&mut self) -> TimerAction {
        let was = self.state;
        self.state = AutoplayState::Stopped;
        match was {
            AutoplayState::Running => TimerAction::Cancel,
            AutoplayState::Stopped | AutoplayState::Suspended => TimerAction::Keep,
        }
    }

    /// Reacts to the page becoming visible or hidden.
    pub fn visibility_changed(&mut self, visible: bool) -> TimerAction {
        self.visible = visible;
        self.reconcile()
    }

    /// Reacts to the carousel entering or leaving compact mode.
    pub fn compact_changed(&mut self, compact: bool) -> TimerAction {
        self.compact = compact;
        self.reconcile()
    }

    fn can_run(&self) -> bool {
        self.visible && self.compact
    }

    fn reconcile(&mut self) -> TimerAction {
        match (self.state, self.can_run(), self.interval) {
            (AutoplayState::Running, false, _) => {
                self.state = AutoplayState::Suspended;
                TimerAction::Cancel
            }
            (AutoplayState::Suspended, true, Some(interval)) => {
                self.state = AutoplayState::Running;
                TimerAction::Arm(interval)
            }
            _ => TimerAction::Keep,
        }
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn start_without_interval_is_noop() {
        let mut a = Autoplay::new(None);
        assert_eq!(a.start(), TimerAction::Keep);
        assert_eq!(a.state(), AutoplayState::Stopped);

        let mut z = Autoplay::new(Some(Duration::ZERO));
        assert_eq!(z.start(), TimerAction::Keep);
        assert_eq!(z.state(), AutoplayState::Stopped);
    }

    #[test]
    fn start_and_stop() {
        let mut a = Autoplay::new(Some(SECOND));
        assert_eq!(a.start(), TimerAction::Arm(SECOND));
        assert_eq!(a.start(), TimerAction::Keep, "already running");
        assert_eq!(a.stop(), TimerAction::Cancel);
        assert_eq!(a.stop(), TimerAction::Keep);
        assert_eq!(a.state(), AutoplayState::Stopped);
    }

    #[test]
    fn hidden_page_suspends_and_resumes() {
        let mut a = Autoplay::new(Some(SECOND));
        a.start();
        assert_eq!(a.visibility_changed(false), TimerAction::Cancel);
        assert_eq!(a.state(), AutoplayState::Suspended);
        assert_eq!(a.visibility_changed(true), TimerAction::Arm(SECOND));
        assert_eq!(a.state(), AutoplayState::Running);
    }

    #[test]
    fn stopped_stays_stopped_on_visibility() {
        let mut a = Autoplay::new(Some(SECOND));
        assert_eq!(a.visibility_changed(false), TimerAction::Keep);
        assert_eq!(a.visibility_changed(true), TimerAction::Keep);
        assert_eq!(a.state(), AutoplayState::Stopped);
    }

    #[test]
    fn start_while_hidden_defers_arming() {
        let mut a = Autoplay::new(Some(SECOND));
        a.visibility_changed(false);
        assert_eq!(a.start(), TimerAction::Keep);
        assert_eq!(a.state(), AutoplayState::Suspended);
        assert_eq!(a.visibility_changed(true), TimerAction::Arm(SECOND));
    }

    #[test]
    fn leaving_compact_suspends_until_reentered() {
        let mut a = Autoplay::new(Some(SECOND));
        a.start();
        assert_eq!(a.compact_changed(false), TimerAction::Cancel);
        assert_eq!(a.state(), AutoplayState::Suspended);
        assert_eq!(a.compact_changed(true), TimerAction::Arm(SECOND));
        assert_eq!(a.state(), AutoplayState::Running);
    }

    #[test]
    fn runs_only_when_visible_and_compact() {
        let mut a = Autoplay::new(Some(SECOND));
        a.compact_changed(false);
        a.visibility_changed(false);
        assert_eq!(a.start(), TimerAction::Keep);
        assert_eq!(a.compact_changed(true), TimerAction::Keep, "still hidden");
        assert_eq!(a.state(), AutoplayState::Suspended);
        assert_eq!(a.visibility_changed(true), TimerAction::Arm(SECOND));
    }

    #[test]
    fn stop_while_suspended_does_not_resume() {
        let mut a = Autoplay::new(Some(SECOND));
        a.start();
        a.visibility_changed(false);
        assert_eq!(a.stop(), TimerAction::Keep);
        assert_eq!(a.visibility_changed(true), TimerAction::Keep);
    }
}
