// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide index state machine.
//!
//! [`SlideMachine`] owns the current index and a two-state [`Phase`]. An
//! accepted command moves the machine to
//! [`Transitioning`](Phase::Transitioning) and hands back a [`SettleToken`].
//! The host arms a timer for the configured cooldown and, when it fires,
//! passes the token back to [`SlideMachine::settle`]. Tokens from timers armed
//! before a [`reset`](SlideMachine::reset) no longer match and are ignored.
//!
//! Commands that cannot be honoured (outside compact mode, mid-transition,
//! out-of-range index, no items) return `None` and leave the state untouched.

/// Identifies one pending transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SettleToken(u32);

impl SettleToken {
    /// Returns the raw token value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Whether the machine accepts commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Accepting commands.
    #[default]
    Idle,
    /// Cooling down after an accepted command; commands are rejected until
    /// the matching token is settled.
    Transitioning(SettleToken),
}

/// Current slide index plus the cooldown phase.
#[derive(Clone, Debug)]
pub struct SlideMachine {
    item_count: usize,
    index: usize,
    compact: bool,
    phase: Phase,
    next_token: u32,
}

impl SlideMachine {
    /// Creates an idle machine at index 0 over `item_count` items.
    ///
    /// The machine starts outside compact mode and rejects every command
    /// until [`set_compact(true)`](Self::set_compact).
    #[must_use]
    pub const fn new(item_count: usize) -> Self {
        Self {
            item_count,
            index: 0,
            compact: false,
            phase: Phase::Idle,
            next_token: 0,
        }
    }

    /// Number of items, fixed at construction.
    #[inline]
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Current slide index. Always `< item_count` when there are items.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while a cooldown is pending.
    #[inline]
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    /// Returns `true` if compact mode is active.
    #[inline]
    #[must_use]
    pub const fn is_compact(&self) -> bool {
        self.compact
    }

    /// Enables or disables command handling.
    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
    }

    /// Advances to the next slide, wrapping to 0 after the last.
    pub fn next(&mut self) -> Option<SettleToken> {
        if !self.accepts() {
            return None;
        }
        let target = (self.index + 1) % self.item_count;
        Some(self.begin(target))
    }

    /// Steps back to the previous slide, wrapping to the last from 0.
    pub fn previous(&mut self) -> Option<SettleToken> {
        if !self.accepts() {
            return None;
        }
        let target = if self.index == 0 {
            self.item_count - 1
        } else {
            self.index - 1
        };
        Some(self.begin(target))
    }

    /// Jumps to `index`. Out-of-range and same-index requests are ignored.
    pub fn go_to(&mut self, index: usize) -> Option<SettleToken> {
        if !self.accepts() || index >= self.item_count || index == self.index {
            return None;
        }
        Some(self.begin(index))
    }

    /// Ends the cooldown identified by `token`.
    ///
    /// Returns `false` (and changes nothing) if `token` is not the pending
    /// one.
    pub fn settle(&mut self, token: SettleToken) -> bool {
        if self.phase != Phase::Transitioning(token) {
            return false;
        }
        self.phase = Phase::Idle;
        true
    }

    /// Returns to index 0 and `Idle`, invalidating any pending token.
    pub fn reset(&mut self) {
        self.index = 0;
        self.phase = Phase::Idle;
    }

    fn accepts(&self) -> bool {
        self.compact && self.item_count > 0 && self.phase == Phase::Idle
    }

    fn begin(&mut self, target: usize) -> SettleToken {
        let token = SettleToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.index = target;
        self.phase = Phase::Transitioning(token);
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact(n: usize) -> SlideMachine {
        let mut m = SlideMachine::new(n);
        m.set_compact(true);
        m
    }

    /// Runs `f` and immediately settles the resulting transition.
    fn step(m: &mut SlideMachine, f: impl FnOnce(&mut SlideMachine) -> Option<SettleToken>) {
        let token = f(m).expect("command should be accepted");
        assert!(m.settle(token), "fresh token should settle");
    }

    #[test]
    fn next_cycles_through_every_index() {
        for n in 1..=6 {
            let mut m = compact(n);
            let mut seen = alloc::vec::Vec::new();
            for _ in 0..n {
                seen.push(m.index());
                step(&mut m, SlideMachine::next);
            }
            assert_eq!(m.index(), 0, "n={n}: full cycle returns home");
            assert_eq!(seen, (0..n).collect::<alloc::vec::Vec<_>>());
        }
    }

    #[test]
    fn previous_inverts_next() {
        for n in 1..=5 {
            for start in 0..n {
                let mut m = compact(n);
                if start != 0 {
                    step(&mut m, |m| m.go_to(start));
                }
                step(&mut m, SlideMachine::next);
                step(&mut m, SlideMachine::previous);
                assert_eq!(m.index(), start, "n={n}");
            }
        }
    }

    #[test]
    fn four_items_wrap_after_three_steps() {
        let mut m = compact(4);
        for _ in 0..3 {
            step(&mut m, SlideMachine::next);
        }
        assert_eq!(m.index(), 3);
        step(&mut m, SlideMachine::next);
        assert_eq!(m.index(), 0);
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut m = compact(4);
        step(&mut m, SlideMachine::previous);
        assert_eq!(m.index(), 3);
    }

    #[test]
    fn go_to_rejects_current_and_out_of_range() {
        let mut m = compact(4);
        assert_eq!(m.go_to(0), None);
        assert_eq!(m.go_to(5), None);
        assert_eq!(m.go_to(4), None);
        assert_eq!(m.index(), 0);
        assert_eq!(m.phase(), Phase::Idle, "no transition triggered");
    }

    #[test]
    fn commands_rejected_while_transitioning() {
        let mut m = compact(4);
        let token = m.next().unwrap();
        assert!(m.is_transitioning());
        assert_eq!(m.next(), None);
        assert_eq!(m.previous(), None);
        assert_eq!(m.go_to(3), None);
        assert_eq!(m.index(), 1);
        assert!(m.settle(token));
        assert_eq!(m.go_to(3).map(|_| m.index()), Some(3));
    }

    #[test]
    fn commands_rejected_outside_compact_mode() {
        let mut m = SlideMachine::new(4);
        assert_eq!(m.next(), None);
        assert_eq!(m.previous(), None);
        assert_eq!(m.go_to(2), None);
        assert_eq!(m.index(), 0);
    }

    #[test]
    fn empty_machine_rejects_everything() {
        let mut m = compact(0);
        assert_eq!(m.next(), None);
        assert_eq!(m.previous(), None);
        assert_eq!(m.go_to(0), None);
    }

    #[test]
    fn stale_token_after_reset_is_ignored() {
        let mut m = compact(4);
        let stale = m.next().unwrap();
        m.reset();
        assert_eq!(m.index(), 0);
        let fresh = m.next().unwrap();
        assert_ne!(stale, fresh);
        assert!(!m.settle(stale), "stale timer must not end the new cooldown");
        assert!(m.is_transitioning());
        assert!(m.settle(fresh));
        assert!(!m.settle(fresh), "settling twice is a no-op");
    }
}
