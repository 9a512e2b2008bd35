// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout` / `setInterval` handles.
//!
//! [`Timeout`] and [`Interval`] own the JS closure registered with the
//! browser and clear the pending timer when dropped. Neither
//! handle may be dropped from inside its own callback; the carousel only ever
//! replaces a timer from a different event callback.

use alloc::boxed::Box;
use core::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods, so timers can
// be armed without fetching (and unwrapping) the Window object.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

/// Converts a duration to the whole milliseconds the timer APIs expect,
/// saturating at `i32::MAX`.
pub(crate) fn millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// A one-shot `setTimeout` registration.
pub struct Timeout {
    id: i32,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Timeout {
    /// Schedules `callback` to run once after `delay`.
    pub fn new(delay: Duration, callback: impl FnOnce() + 'static) -> Self {
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        }) as Box<dyn FnMut()>);
        let id = set_timeout(closure.as_ref(), millis(delay));
        Self {
            id,
            closure: Some(closure),
        }
    }

    /// Clears the timer if it has not fired yet. Idempotent.
    fn cancel(&mut self) {
        if self.closure.take().is_some() {
            clear_timeout(self.id);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl core::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeout")
            .field("id", &self.id)
            .field("armed", &self.closure.is_some())
            .finish()
    }
}

/// A repeating `setInterval` registration.
pub struct Interval {
    id: i32,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Interval {
    /// Runs `callback` every `period` until dropped.
    pub fn new(period: Duration, callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = set_interval(closure.as_ref(), millis(period));
        Self {
            id,
            closure: Some(closure),
        }
    }

    /// Clears the interval. Idempotent.
    fn cancel(&mut self) {
        if self.closure.take().is_some() {
            clear_interval(self.id);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl core::fmt::Debug for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interval")
            .field("id", &self.id)
            .field("running", &self.closure.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_truncates_and_saturates() {
        assert_eq!(millis(Duration::from_millis(350)), 350);
        assert_eq!(millis(Duration::from_micros(400_900)), 400);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), i32::MAX);
    }
}
