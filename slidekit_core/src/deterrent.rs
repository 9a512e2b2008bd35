// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shortcut-suppression policy for the optional inspection deterrent.
//!
//! This is cosmetic only. Browsers offer many other routes to their developer
//! tools and page source, and none of them can be closed from page script.
//! The guard exists so a site can opt into discouraging casual use of the
//! common shortcuts, and it can be switched off at any time.

use crate::input::{Key, Modifiers};

/// Decides which key presses and context-menu requests to suppress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortcutGuard {
    enabled: bool,
}

impl ShortcutGuard {
    /// Creates an enabled guard.
    #[must_use]
    pub const fn new() -> Self {
        Self { enabled: true }
    }

    /// Returns `true` while the guard suppresses anything.
    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turns suppression on.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Turns suppression off.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Returns `true` if the key press should have its default action
    /// prevented and its propagation stopped.
    ///
    /// Blocks F12, Ctrl+Shift+I, Ctrl+Shift+J, Ctrl+U and Ctrl+S.
    #[must_use]
    pub fn blocks_key(&self, key: Key, mods: Modifiers) -> bool {
        if !self.enabled {
            return false;
        }
        let ctrl = mods.contains(Modifiers::CTRL);
        let shift = mods.contains(Modifiers::SHIFT);
        match key {
            Key::F12 => true,
            Key::Char('i' | 'j') => ctrl && shift,
            Key::Char('u' | 's') => ctrl,
            _ => false,
        }
    }

    /// Returns `true` if the context menu should be suppressed.
    #[inline]
    #[must_use]
    pub const fn blocks_context_menu(&self) -> bool {
        self.enabled
    }
}

impl Default for ShortcutGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTRL: Modifiers = Modifiers::CTRL;
    const CTRL_SHIFT: Modifiers = Modifiers::CTRL.union(Modifiers::SHIFT);

    #[test]
    fn blocks_devtools_shortcuts() {
        let g = ShortcutGuard::new();
        assert!(g.blocks_key(Key::F12, Modifiers::empty()));
        assert!(g.blocks_key(Key::from_dom("I"), CTRL_SHIFT));
        assert!(g.blocks_key(Key::from_dom("j"), CTRL_SHIFT));
        assert!(g.blocks_key(Key::from_dom("u"), CTRL));
        assert!(g.blocks_key(Key::from_dom("S"), CTRL_SHIFT));
        assert!(g.blocks_context_menu());
    }

    #[test]
    fn leaves_ordinary_keys_alone() {
        let g = ShortcutGuard::new();
        assert!(!g.blocks_key(Key::from_dom("i"), CTRL), "Ctrl+I needs Shift");
        assert!(!g.blocks_key(Key::from_dom("u"), Modifiers::empty()));
        assert!(!g.blocks_key(Key::ArrowLeft, Modifiers::empty()));
        assert!(!g.blocks_key(Key::from_dom("c"), CTRL));
    }

    #[test]
    fn disabled_guard_blocks_nothing() {
        let mut g = ShortcutGuard::new();
        g.disable();
        assert!(!g.is_enabled());
        assert!(!g.blocks_key(Key::F12, Modifiers::empty()));
        assert!(!g.blocks_context_menu());
        g.enable();
        assert!(g.blocks_key(Key::F12, Modifiers::empty()));
    }
}
