// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: the stills grid as a compact-mode carousel.
//!
//! On narrow viewports the `.stills-grid` section of the page becomes a
//! one-item-at-a-time carousel with buttons, dots, swipe and arrow keys. On
//! wide viewports the page keeps its native grid.
//!
//! Build with: `wasm-pack build --target web demos/stills_page`
//!
//! Then serve `demos/stills_page/` and open `index.html` in a browser. The
//! page script calls [`mount_page`] once the DOM is ready and keeps the
//! returned handle alive.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use core::time::Duration;

use slidekit_backend_web::{Markup, MountedCarousel};
use slidekit_core::config::CarouselConfig;
use wasm_bindgen::prelude::*;

/// A mounted page. Dropping it detaches every listener and timer.
#[wasm_bindgen]
#[derive(Debug)]
pub struct PageHandle {
    carousel: MountedCarousel,
    #[cfg(feature = "deterrent")]
    deterrent: Option<slidekit_backend_web::Deterrent>,
}

/// Mounts the stills carousel.
///
/// Returns `undefined` if the page has no stills grid. `autoplay_ms` of zero
/// leaves auto-play off.
#[wasm_bindgen]
pub fn mount_page(autoplay_ms: u32) -> Result<Option<PageHandle>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let mut config = CarouselConfig::stills();
    if autoplay_ms > 0 {
        config = config.with_autoplay(Duration::from_millis(u64::from(autoplay_ms)));
    }

    #[cfg(feature = "trace")]
    let carousel = MountedCarousel::mount_traced(
        &window,
        &document,
        config,
        Markup::STILLS,
        Some(alloc::boxed::Box::new(slidekit_backend_web::ConsoleSink)),
    )?;
    #[cfg(not(feature = "trace"))]
    let carousel = MountedCarousel::mount(&window, &document, config, Markup::STILLS)?;

    let Some(carousel) = carousel else {
        return Ok(None);
    };
    carousel.start_autoplay();

    Ok(Some(PageHandle {
        carousel,
        #[cfg(feature = "deterrent")]
        deterrent: None,
    }))
}

#[wasm_bindgen]
impl PageHandle {
    /// Advances one item.
    pub fn next(&self) {
        self.carousel.next();
    }

    /// Goes back one item.
    pub fn previous(&self) {
        self.carousel.previous();
    }

    /// Jumps to a zero-based item index.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: usize) {
        self.carousel.go_to(index);
    }

    /// Index of the visible item.
    #[wasm_bindgen(getter)]
    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    /// Re-applies the carousel state after the page changed the grid.
    pub fn refresh(&self) {
        self.carousel.refresh();
    }

    /// Starts auto-play if an interval was given at mount time.
    #[wasm_bindgen(js_name = startAutoplay)]
    pub fn start_autoplay(&self) {
        self.carousel.start_autoplay();
    }

    /// Stops auto-play.
    #[wasm_bindgen(js_name = stopAutoplay)]
    pub fn stop_autoplay(&self) {
        self.carousel.stop_autoplay();
    }

    /// Switches the devtools-shortcut deterrent on or off.
    ///
    /// This is cosmetic and protects nothing.
    #[cfg(feature = "deterrent")]
    #[wasm_bindgen(js_name = setDeterrent)]
    pub fn set_deterrent(&mut self, enabled: bool) -> Result<(), JsValue> {
        match (&mut self.deterrent, enabled) {
            (Some(deterrent), true) => deterrent.enable()?,
            (Some(deterrent), false) => deterrent.disable(),
            (None, true) => {
                let window =
                    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
                self.deterrent = Some(slidekit_backend_web::Deterrent::attach(&window)?);
            }
            (None, false) => {}
        }
        Ok(())
    }
}
