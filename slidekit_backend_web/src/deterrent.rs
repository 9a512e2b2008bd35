// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window-level devtools-shortcut blocker.
//!
//! This only suppresses the default action of a few shortcuts and the context
//! menu. It offers no protection for page content.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use slidekit_core::deterrent::ShortcutGuard;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{KeyboardEvent, Window};

use crate::listener::{EventListener, ListenerOptions};
use crate::{read_key, read_modifiers};

/// Capture-phase `keydown` and `contextmenu` listeners on the window.
///
/// Listeners exist only while enabled. Dropping the handle removes them.
pub struct Deterrent {
    window: Window,
    guard: Rc<Cell<ShortcutGuard>>,
    listeners: Vec<EventListener>,
}

impl core::fmt::Debug for Deterrent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Deterrent")
            .field("guard", &self.guard.get())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Deterrent {
    /// Creates an enabled deterrent on `window`.
    pub fn attach(window: &Window) -> Result<Self, JsValue> {
        let mut deterrent = Self {
            window: window.clone(),
            guard: Rc::new(Cell::new(ShortcutGuard::new())),
            listeners: Vec::new(),
        };
        deterrent.subscribe()?;
        Ok(deterrent)
    }

    /// Returns `true` while shortcuts are being blocked.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.guard.get().is_enabled()
    }

    /// Starts blocking. No effect if already enabled.
    pub fn enable(&mut self) -> Result<(), JsValue> {
        let mut guard = self.guard.get();
        guard.enable();
        self.guard.set(guard);
        if self.listeners.is_empty() {
            self.subscribe()?;
        }
        Ok(())
    }

    /// Stops blocking and removes the listeners.
    pub fn disable(&mut self) {
        let mut guard = self.guard.get();
        guard.disable();
        self.guard.set(guard);
        self.listeners.clear();
    }

    fn subscribe(&mut self) -> Result<(), JsValue> {
        let keys = Rc::clone(&self.guard);
        let keydown =
            EventListener::new(&self.window, "keydown", ListenerOptions::CAPTURE, move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if keys.get().blocks_key(read_key(event), read_modifiers(event)) {
                    event.prevent_default();
                    event.stop_propagation();
                }
            })?;

        let menu = Rc::clone(&self.guard);
        let contextmenu = EventListener::new(
            &self.window,
            "contextmenu",
            ListenerOptions::CAPTURE,
            move |event| {
                if menu.get().blocks_context_menu() {
                    event.prevent_default();
                    event.stop_propagation();
                }
            },
        )?;

        self.listeners = alloc::vec![keydown, contextmenu];
        Ok(())
    }
}
