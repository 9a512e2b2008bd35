// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM event subscriptions that unsubscribe on drop.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// How a listener is registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// The handler never calls `preventDefault`, letting the browser scroll
    /// without waiting for it.
    pub passive: bool,
    /// Register for the capture phase instead of the bubble phase.
    pub capture: bool,
}

impl ListenerOptions {
    /// Bubble phase, non-passive.
    pub const BUBBLE: Self = Self {
        passive: false,
        capture: false,
    };

    /// Bubble phase, passive. Used for touch tracking.
    pub const PASSIVE: Self = Self {
        passive: true,
        capture: false,
    };

    /// Capture phase, non-passive. Used to intercept events before page
    /// handlers see them.
    pub const CAPTURE: Self = Self {
        passive: false,
        capture: true,
    };
}

/// An `addEventListener` registration that is removed when dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Subscribes `callback` to `event_type` events on `target`.
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        options: ListenerOptions,
        mut callback: impl FnMut(&Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure =
            Closure::wrap(Box::new(move |event: Event| callback(&event)) as Box<dyn FnMut(Event)>);

        let opts = AddEventListenerOptions::new();
        opts.set_passive(options.passive);
        opts.set_capture(options.capture);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &opts,
        )?;

        Ok(Self {
            target: target.clone(),
            event_type,
            capture: options.capture,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event_type,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

impl core::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventListener")
            .field("event_type", &self.event_type)
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}
