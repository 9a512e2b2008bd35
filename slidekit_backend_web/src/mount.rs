// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding a [`Carousel`] to a live page.
//!
//! [`MountedCarousel::mount`] discovers the grid and its items, builds a
//! [`DomPresenter`] and subscribes the input adapters:
//!
//! | Event | Target | Adapter |
//! |---|---|---|
//! | `resize` | window | viewport classification, auto-play pause outside compact mode |
//! | `keydown` | document | arrow keys, only with focus inside the carousel |
//! | `touchstart` / `touchend` / `touchcancel` | grid (passive) | swipe |
//! | `click` | document (delegated) | previous / next buttons, dots |
//! | `visibilitychange` | document | auto-play suspend / resume |
//!
//! Every handler swallows its own failures. A re-entrant event (one that
//! arrives while the carousel state is already borrowed) is dropped.
//!
//! [`Carousel`]: slidekit_core::carousel::Carousel

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::Point;
use slidekit_core::autoplay::{AutoplayState, TimerAction};
use slidekit_core::carousel::Carousel;
use slidekit_core::config::CarouselConfig;
use slidekit_core::input::{Command, SwipeTracker, key_command};
use slidekit_core::trace::{TraceSink, Tracer};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, TouchEvent, TouchList, Window};

use crate::listener::{EventListener, ListenerOptions};
use crate::markup::Markup;
use crate::presenter::DomPresenter;
use crate::timer::{Interval, Timeout};
use crate::{read_key, viewport_width};

/// Everything the event handlers share.
struct Shared {
    carousel: Carousel,
    presenter: DomPresenter,
    swipe: SwipeTracker,
    settle_timer: Option<Timeout>,
    autoplay_timer: Option<Interval>,
    sink: Option<Box<dyn TraceSink>>,
}

type SharedRef = Rc<RefCell<Shared>>;

fn sink_tracer(sink: &mut Option<Box<dyn TraceSink>>) -> Tracer<'_> {
    match sink {
        Some(sink) => Tracer::new(&mut **sink),
        None => Tracer::none(),
    }
}

/// Runs `command` and arms the cooldown timer if it was accepted.
fn dispatch(shared: &SharedRef, command: Command) {
    let Ok(mut guard) = shared.try_borrow_mut() else {
        return;
    };
    let state = &mut *guard;
    let mut tracer = sink_tracer(&mut state.sink);
    let Some(settle) = state
        .carousel
        .dispatch(command, &mut state.presenter, &mut tracer)
    else {
        return;
    };
    let weak = Rc::downgrade(shared);
    state.settle_timer = Some(Timeout::new(settle.after, move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let Ok(mut guard) = shared.try_borrow_mut() else {
            return;
        };
        let state = &mut *guard;
        let mut tracer = sink_tracer(&mut state.sink);
        state.carousel.settle(settle.token, &mut tracer);
    }));
}

fn resize(shared: &SharedRef, width: f64) {
    let Ok(mut guard) = shared.try_borrow_mut() else {
        return;
    };
    let state = &mut *guard;
    let resized = state
        .carousel
        .resize(width, &mut state.presenter, &mut sink_tracer(&mut state.sink));
    if let Some(resized) = resized {
        apply_timer_action(state, resized.timer, Rc::downgrade(shared));
    }
}

/// Suspends or resumes auto-play as the page is hidden or shown.
fn set_visibility(shared: &SharedRef, visible: bool) {
    let Ok(mut guard) = shared.try_borrow_mut() else {
        return;
    };
    let state = &mut *guard;
    let action = state
        .carousel
        .visibility_changed(visible, &mut sink_tracer(&mut state.sink));
    apply_timer_action(state, action, Rc::downgrade(shared));
}

/// Carries out an auto-play [`TimerAction`].
fn apply_timer_action(state: &mut Shared, action: TimerAction, shared: Weak<RefCell<Shared>>) {
    match action {
        TimerAction::Arm(period) => {
            state.autoplay_timer = Some(Interval::new(period, move || {
                if let Some(shared) = shared.upgrade() {
                    dispatch(&shared, Command::Next);
                }
            }));
        }
        TimerAction::Cancel => state.autoplay_timer = None,
        TimerAction::Keep => {}
    }
}

fn first_point(touches: &TouchList) -> Option<Point> {
    let touch = touches.get(0)?;
    Some(Point::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    ))
}

/// Maps a click target to the command of the button or dot it is inside.
fn click_command(target: &Element, markup: &Markup) -> Option<Command> {
    let inside = |class: &str| {
        target
            .closest(&Markup::class_selector(class))
            .ok()
            .flatten()
    };
    if inside(markup.previous_class).is_some() {
        return Some(Command::Previous);
    }
    if inside(markup.next_class).is_some() {
        return Some(Command::Next);
    }
    let dot = inside(markup.dot_class)?;
    let index: String = dot.get_attribute(markup.index_attribute)?;
    index.parse().ok().map(Command::GoTo)
}

/// A carousel bound to page elements and events.
///
/// Dropping the handle unsubscribes every listener, cancels pending timers
/// and leaves the page in whatever layout it currently has.
pub struct MountedCarousel {
    shared: SharedRef,
    listeners: Vec<EventListener>,
}

impl core::fmt::Debug for MountedCarousel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut d = f.debug_struct("MountedCarousel");
        if let Ok(state) = self.shared.try_borrow() {
            d.field("carousel", &state.carousel)
                .field("presenter", &state.presenter);
        }
        d.field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl MountedCarousel {
    /// Mounts a carousel on the first element matching `markup.grid`.
    ///
    /// Returns `Ok(None)` if the page has no such element. DOM failures while
    /// subscribing are returned as errors.
    pub fn mount(
        window: &Window,
        document: &Document,
        config: CarouselConfig,
        markup: Markup,
    ) -> Result<Option<Self>, JsValue> {
        Self::mount_traced(window, document, config, markup, None)
    }

    /// Like [`mount`](Self::mount), reporting state changes to `sink`.
    pub fn mount_traced(
        window: &Window,
        document: &Document,
        config: CarouselConfig,
        markup: Markup,
        sink: Option<Box<dyn TraceSink>>,
    ) -> Result<Option<Self>, JsValue> {
        let Some(grid) = document.query_selector(markup.grid)? else {
            return Ok(None);
        };
        let grid: HtmlElement = grid.dyn_into().map_err(JsValue::from)?;
        let item_count = grid.query_selector_all(markup.item)?.length() as usize;

        let carousel = Carousel::new(item_count, config);
        let shared = Rc::new(RefCell::new(Shared {
            swipe: carousel.swipe_tracker(),
            carousel,
            presenter: DomPresenter::new(document.clone(), grid.clone(), markup, config.dimmed_opacity),
            settle_timer: None,
            autoplay_timer: None,
            sink,
        }));

        let listeners = vec![
            Self::on_resize(window, &shared)?,
            Self::on_keydown(document, &shared)?,
            Self::on_touchstart(&grid, &shared)?,
            Self::on_touchend(&grid, &shared)?,
            Self::on_touchcancel(&grid, &shared)?,
            Self::on_click(document, &shared, markup)?,
            Self::on_visibility(document, &shared)?,
        ];

        resize(&shared, viewport_width(window));
        // A page opened in a background tab sends no `visibilitychange`
        // until it is first shown.
        set_visibility(&shared, !document.hidden());

        Ok(Some(Self { shared, listeners }))
    }

    fn on_resize(window: &Window, shared: &SharedRef) -> Result<EventListener, JsValue> {
        let shared = Rc::clone(shared);
        let win = window.clone();
        EventListener::new(window, "resize", ListenerOptions::PASSIVE, move |_| {
            resize(&shared, viewport_width(&win));
        })
    }

    fn on_keydown(document: &Document, shared: &SharedRef) -> Result<EventListener, JsValue> {
        let shared = Rc::clone(shared);
        let doc = document.clone();
        EventListener::new(document, "keydown", ListenerOptions::BUBBLE, move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(command) = key_command(read_key(event)) else {
                return;
            };
            let focused = {
                let Ok(state) = shared.try_borrow() else {
                    return;
                };
                state.carousel.accepts_keys()
                    && doc
                        .active_element()
                        .is_some_and(|el| state.presenter.contains(&el))
            };
            if focused {
                event.prevent_default();
                dispatch(&shared, command);
            }
        })
    }

    fn on_touchstart(grid: &HtmlElement, shared: &SharedRef) -> Result<EventListener, JsValue> {
        let shared = Rc::clone(shared);
        EventListener::new(grid, "touchstart", ListenerOptions::PASSIVE, move |event| {
            let Some(point) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|e| first_point(&e.touches()))
            else {
                return;
            };
            if let Ok(mut state) = shared.try_borrow_mut() {
                state.swipe.begin(point);
            }
        })
    }

    fn on_touchend(grid: &HtmlElement, shared: &SharedRef) -> Result<EventListener, JsValue> {
        let shared = Rc::clone(shared);
        EventListener::new(grid, "touchend", ListenerOptions::PASSIVE, move |event| {
            let Some(point) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|e| first_point(&e.changed_touches()))
            else {
                return;
            };
            let command = match shared.try_borrow_mut() {
                Ok(mut state) => state.swipe.end(point),
                Err(_) => return,
            };
            if let Some(command) = command {
                dispatch(&shared, command);
            }
        })
    }

    fn on_touchcancel(grid: &HtmlElement, shared: &SharedRef) -> Result<EventListener, JsValue> {
        let shared = Rc::clone(shared);
        EventListener::new(grid, "touchcancel", ListenerOptions::PASSIVE, move |_| {
            if let Ok(mut state) = shared.try_borrow_mut() {
                state.swipe.cancel();
            }
        })
    }

    fn on_click(
        document: &Document,
        shared: &SharedRef,
        markup: Markup,
    ) -> Result<EventListener, JsValue> {
        let shared = Rc::clone(shared);
        EventListener::new(document, "click", ListenerOptions::BUBBLE, move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let command = {
                let Ok(state) = shared.try_borrow() else {
                    return;
                };
                if !state.presenter.contains(&target) {
                    return;
                }
                click_command(&target, &markup)
            };
            if let Some(command) = command {
                dispatch(&shared, command);
            }
        })
    }

    fn on_visibility(document: &Document, shared: &SharedRef) -> Result<EventListener, JsValue> {
        let shared = Rc::clone(shared);
        let doc = document.clone();
        EventListener::new(
            document,
            "visibilitychange",
            ListenerOptions::PASSIVE,
            move |_: &Event| set_visibility(&shared, !doc.hidden()),
        )
    }

    /// Advances one item.
    pub fn next(&self) {
        dispatch(&self.shared, Command::Next);
    }

    /// Goes back one item.
    pub fn previous(&self) {
        dispatch(&self.shared, Command::Previous);
    }

    /// Jumps to `index`. Ignored if out of range or already current.
    pub fn go_to(&self, index: usize) {
        dispatch(&self.shared, Command::GoTo(index));
    }

    /// Re-applies the current state to the page.
    pub fn refresh(&self) {
        if let Ok(mut guard) = self.shared.try_borrow_mut() {
            let state = &mut *guard;
            state.carousel.refresh(&mut state.presenter);
        }
    }

    /// Starts auto-play, if the configuration has an interval.
    pub fn start_autoplay(&self) {
        self.autoplay(|carousel, tracer| carousel.start_autoplay(tracer));
    }

    /// Stops auto-play and clears its timer.
    pub fn stop_autoplay(&self) {
        self.autoplay(|carousel, tracer| carousel.stop_autoplay(tracer));
    }

    fn autoplay(&self, f: impl FnOnce(&mut Carousel, &mut Tracer<'_>) -> TimerAction) {
        let Ok(mut guard) = self.shared.try_borrow_mut() else {
            return;
        };
        let state = &mut *guard;
        let action = f(&mut state.carousel, &mut sink_tracer(&mut state.sink));
        apply_timer_action(state, action, Rc::downgrade(&self.shared));
    }

    /// Current auto-play state.
    #[must_use]
    pub fn autoplay_state(&self) -> AutoplayState {
        self.shared
            .try_borrow()
            .map_or(AutoplayState::Stopped, |state| state.carousel.autoplay_state())
    }

    /// Index of the visible item.
    #[must_use]
    pub fn index(&self) -> usize {
        self.shared
            .try_borrow()
            .map_or(0, |state| state.carousel.index())
    }

    /// Returns `true` while compact mode is active.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.shared
            .try_borrow()
            .is_ok_and(|state| state.carousel.is_compact())
    }
}
