// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM presentation of a carousel.
//!
//! Builds the compact chrome (wrapper, buttons, indicator dots) around an
//! existing grid element and applies [`SlideFrame`]s to it.
//!
//! [`SlideFrame`]: slidekit_core::render::SlideFrame

use alloc::format;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;

use slidekit_core::render::{Affordance, Presenter, SlideFrame};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Node};

use crate::markup::Markup;

/// Elements created for compact mode.
struct Chrome {
    wrapper: HtmlElement,
    previous: HtmlElement,
    next: HtmlElement,
    dots: Vec<HtmlElement>,
}

/// Maps carousel frames onto a live grid element.
///
/// In wide mode the grid sits in the page untouched. On
/// [`materialize`](Presenter::materialize) the presenter inserts a wrapper in
/// the grid's place, moves the grid inside it between two navigation buttons
/// and appends one indicator dot per item. [`restore`](Presenter::restore)
/// reverses this.
pub struct DomPresenter {
    document: Document,
    grid: HtmlElement,
    markup: Markup,
    dimmed_opacity: f32,
    chrome: Option<Chrome>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("grid", &"HtmlElement")
            .field("markup", &self.markup)
            .field("dimmed_opacity", &self.dimmed_opacity)
            .field("materialized", &self.chrome.is_some())
            .finish_non_exhaustive()
    }
}

impl DomPresenter {
    /// Creates a presenter for `grid`, owned by `document`.
    #[must_use]
    pub fn new(document: Document, grid: HtmlElement, markup: Markup, dimmed_opacity: f32) -> Self {
        Self {
            document,
            grid,
            markup,
            dimmed_opacity,
            chrome: None,
        }
    }

    /// Returns `true` if `node` is inside this carousel's compact chrome.
    #[must_use]
    pub fn contains(&self, node: &Node) -> bool {
        self.chrome
            .as_ref()
            .is_some_and(|chrome| chrome.wrapper.contains(Some(node)))
    }

    fn create(&self, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
        let el: HtmlElement = self.document.create_element(tag)?.unchecked_into();
        el.set_class_name(class);
        Ok(el)
    }

    fn create_button(&self, class: &str, label: &str) -> Result<HtmlElement, JsValue> {
        let button = self.create("button", class)?;
        button.set_attribute("type", "button")?;
        button.set_attribute("aria-label", label)?;
        Ok(button)
    }

    /// Builds the chrome detached, then splices it into the page. A failure
    /// leaves the grid where it was and no wrapper behind.
    fn build(&self, item_count: usize) -> Result<Chrome, JsValue> {
        let m = &self.markup;
        let wrapper = self.create("div", m.wrapper_class)?;

        let previous = self.create_button(
            &format!("{} {}", m.nav_class, m.previous_class),
            "Previous image",
        )?;
        previous.set_text_content(Some("\u{2039}"));
        let next = self.create_button(&format!("{} {}", m.nav_class, m.next_class), "Next image")?;
        next.set_text_content(Some("\u{203a}"));

        let dots_container = self.create("div", m.dots_class)?;
        let mut dots = Vec::with_capacity(item_count);
        for i in 0..item_count {
            let dot = self.create_button(m.dot_class, &format!("Go to image {}", i + 1))?;
            dot.set_attribute(m.index_attribute, &i.to_string())?;
            dots_container.append_child(&dot)?;
            dots.push(dot);
        }

        wrapper.append_child(&previous)?;
        wrapper.append_child(&next)?;
        wrapper.append_child(&dots_container)?;

        let parent = self
            .grid
            .parent_node()
            .ok_or_else(|| JsValue::from_str("carousel grid has no parent"))?;
        let grid: &Node = &self.grid;
        let next_node: &Node = &next;
        splice(
            || parent.insert_before(&wrapper, Some(grid)).map(drop),
            || wrapper.insert_before(grid, Some(next_node)).map(drop),
            || wrapper.remove(),
        )?;

        Ok(Chrome {
            wrapper,
            previous,
            next,
            dots,
        })
    }

    fn opacity(&self, affordance: Affordance) -> String {
        match affordance {
            Affordance::Full => "1".to_string(),
            Affordance::Dimmed => format!("{}", self.dimmed_opacity),
        }
    }
}

/// Runs the two page mutations that put the chrome in place. If moving the
/// grid fails, `rollback` takes the already inserted wrapper out again.
fn splice<E>(
    insert_wrapper: impl FnOnce() -> Result<(), E>,
    move_grid: impl FnOnce() -> Result<(), E>,
    rollback: impl FnOnce(),
) -> Result<(), E> {
    insert_wrapper()?;
    move_grid().inspect_err(|_| rollback())
}

impl Presenter for DomPresenter {
    fn materialize(&mut self, item_count: usize) {
        if self.chrome.is_some() {
            return;
        }
        // Without chrome the carousel still slides; only buttons and dots
        // are missing.
        self.chrome = self.build(item_count).ok();
    }

    fn apply(&mut self, frame: &SlideFrame) {
        let style = self.grid.style();
        let transform = frame.transform();
        if transform.is_empty() {
            let _ = style.remove_property("transform");
        } else {
            let _ = style.set_property("transform", &transform);
        }

        let Some(chrome) = &self.chrome else {
            return;
        };
        for (i, dot) in chrome.dots.iter().enumerate() {
            let _ = dot
                .class_list()
                .toggle_with_force(self.markup.active_class, frame.is_dot_active(i));
        }
        let _ = chrome
            .previous
            .style()
            .set_property("opacity", &self.opacity(frame.previous));
        let _ = chrome
            .next
            .style()
            .set_property("opacity", &self.opacity(frame.next));
    }

    fn restore(&mut self) {
        if let Some(chrome) = self.chrome.take() {
            if let Some(parent) = chrome.wrapper.parent_node() {
                let wrapper: &Node = &chrome.wrapper;
                let _ = parent.insert_before(&self.grid, Some(wrapper));
            }
            chrome.wrapper.remove();
        }
        let _ = self.grid.style().remove_property("transform");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    fn run(wrapper_ok: bool, grid_ok: bool) -> (Result<(), &'static str>, Vec<&'static str>) {
        let log = RefCell::new(Vec::new());
        let result = splice(
            || {
                log.borrow_mut().push("insert wrapper");
                if wrapper_ok { Ok(()) } else { Err("wrapper") }
            },
            || {
                log.borrow_mut().push("move grid");
                if grid_ok { Ok(()) } else { Err("grid") }
            },
            || log.borrow_mut().push("remove wrapper"),
        );
        (result, log.into_inner())
    }

    #[test]
    fn splice_success_keeps_wrapper() {
        let (result, log) = run(true, true);
        assert_eq!(result, Ok(()));
        assert_eq!(log, ["insert wrapper", "move grid"]);
    }

    #[test]
    fn failed_grid_move_removes_inserted_wrapper() {
        let (result, log) = run(true, false);
        assert_eq!(result, Err("grid"));
        assert_eq!(
            log,
            ["insert wrapper", "move grid", "remove wrapper"],
            "no empty wrapper may stay in the page"
        );
    }

    #[test]
    fn failed_wrapper_insert_touches_nothing_else() {
        let (result, log) = run(false, true);
        assert_eq!(result, Err("wrapper"));
        assert_eq!(log, ["insert wrapper"]);
    }
}
