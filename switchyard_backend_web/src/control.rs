// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM checkbox panel driving a [`VisibilitySwitcher`].
//!
//! [`SwitcherControl`] owns the switcher, renders its widget projection as
//! a `<div>` of checkbox rows, and wires the map's one-shot `load` event to
//! [`VisibilitySwitcher::style_loaded`]. The panel element is returned by
//! [`root`](SwitcherControl::root) for the application to place; a common
//! choice is appending it to the map container.
//!
//! The tree is fixed at construction, so rows and their change handlers
//! are built once. After every mutation the projection is pushed back
//! into the checkboxes, so the panel always shows post-reconciliation
//! state.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use switchyard_core::layer::LayerTree;
use switchyard_core::style::StyleDocument;
use switchyard_core::switcher::VisibilitySwitcher;
use switchyard_core::widget::WidgetItem;

use crate::bindings::MapHandle;
use crate::surface::MapSurface;

type EventClosure = Closure<dyn FnMut()>;

/// A layer-visibility checkbox panel bound to a MapLibre map.
///
/// Create with [`new`](Self::new), then [`attach`](Self::attach) a map.
/// Dropping the control detaches it and removes its panel from the DOM.
pub struct SwitcherControl {
    inner: Rc<Inner>,
}

struct Inner {
    /// The panel element the application places.
    root: HtmlElement,

    /// The state machine. Borrowed mutably from event closures, so no
    /// method may call back into user code while holding the borrow.
    switcher: RefCell<VisibilitySwitcher<MapSurface>>,

    /// Checkbox per layer row, in display order.
    rows: RefCell<Vec<(String, HtmlInputElement)>>,

    /// Change handlers, kept alive for the lifetime of their rows.
    row_closures: RefCell<Vec<EventClosure>>,

    /// The map currently attached, for unregistering the load handler.
    map: RefCell<Option<MapHandle>>,

    /// The pending `load` handler, present only while a not-yet-loaded
    /// map is attached.
    load_closure: RefCell<Option<EventClosure>>,
}

impl SwitcherControl {
    /// Creates the panel and its rows from a layer tree.
    ///
    /// The control starts detached; visibility is applied once a map is
    /// [`attach`](Self::attach)ed.
    pub fn new(document: &Document, tree: LayerTree, title: &str) -> Result<Self, JsValue> {
        let root: HtmlElement = document.create_element("div")?.unchecked_into();
        root.set_class_name("switchyard-control");

        let heading: HtmlElement = document.create_element("div")?.unchecked_into();
        heading.set_class_name("switchyard-control-title");
        heading.set_text_content(Some(title));
        root.append_child(&heading)?;

        let list: HtmlElement = document.create_element("div")?.unchecked_into();
        list.set_class_name("switchyard-control-list");
        root.append_child(&list)?;

        let control = Self {
            inner: Rc::new(Inner {
                root,
                switcher: RefCell::new(VisibilitySwitcher::new(tree, title)),
                rows: RefCell::new(Vec::new()),
                row_closures: RefCell::new(Vec::new()),
                map: RefCell::new(None),
                load_closure: RefCell::new(None),
            }),
        };
        control.build_rows(document, &list)?;
        Ok(control)
    }

    fn build_rows(&self, document: &Document, list: &HtmlElement) -> Result<(), JsValue> {
        let items = self.inner.switcher.borrow().widget_items();
        for item in items {
            match item {
                WidgetItem::Heading(text) => {
                    let heading: HtmlElement = document.create_element("div")?.unchecked_into();
                    heading.set_class_name("switchyard-control-heading");
                    heading.set_text_content(Some(&text));
                    list.append_child(&heading)?;
                }
                WidgetItem::Row {
                    layer_id,
                    title,
                    checked,
                } => {
                    let label: HtmlElement = document.create_element("label")?.unchecked_into();
                    label.set_class_name("switchyard-control-row");

                    let input: HtmlInputElement =
                        document.create_element("input")?.unchecked_into();
                    input.set_type("checkbox");
                    input.set_checked(checked);

                    let weak = Rc::downgrade(&self.inner);
                    let id = layer_id.clone();
                    let checkbox = input.clone();
                    let closure = Closure::wrap(Box::new(move || {
                        let Some(inner) = weak.upgrade() else {
                            return;
                        };
                        inner.switcher.borrow_mut().toggle(&id, checkbox.checked());
                        inner.sync_checkboxes();
                    }) as Box<dyn FnMut()>);
                    input.add_event_listener_with_callback(
                        "change",
                        closure.as_ref().unchecked_ref(),
                    )?;
                    self.inner.row_closures.borrow_mut().push(closure);

                    let text: HtmlElement = document.create_element("span")?.unchecked_into();
                    text.set_text_content(Some(&title));

                    label.append_child(&input)?;
                    label.append_child(&text)?;
                    list.append_child(&label)?;
                    self.inner.rows.borrow_mut().push((layer_id, input));
                }
            }
        }
        Ok(())
    }

    /// Returns the panel element for the application to place.
    #[must_use]
    pub fn root(&self) -> &HtmlElement {
        &self.inner.root
    }

    /// Binds the control to a map.
    ///
    /// If the map's style is not loaded yet, a one-shot `load` handler is
    /// registered and visibility is applied when it fires; otherwise it is
    /// applied immediately. A previously attached map is detached first.
    pub fn attach(&self, map: &MapHandle) {
        self.detach();

        self.inner
            .switcher
            .borrow_mut()
            .attach(MapSurface::new(map.clone()));
        *self.inner.map.borrow_mut() = Some(map.clone());

        if !map.is_style_loaded() {
            let weak = Rc::downgrade(&self.inner);
            let closure = Closure::wrap(Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                inner.switcher.borrow_mut().style_loaded();
                // One-shot: unregister without dropping the closure, which
                // is still executing. It is freed on detach or drop.
                if let (Some(map), Some(closure)) = (
                    inner.map.borrow().as_ref(),
                    inner.load_closure.borrow().as_ref(),
                ) {
                    map.off("load", closure);
                }
            }) as Box<dyn FnMut()>);
            map.on("load", &closure);
            *self.inner.load_closure.borrow_mut() = Some(closure);
        }
    }

    /// Unbinds the control from its map, if any. The visible set is kept;
    /// toggles while detached accumulate and replay on the next attach.
    pub fn detach(&self) {
        if let Some(map) = self.inner.map.borrow_mut().take()
            && let Some(closure) = self.inner.load_closure.borrow_mut().take()
        {
            map.off("load", &closure);
        }
        let _ = self.inner.switcher.borrow_mut().detach();
    }

    /// Restores the default visible set and updates the checkboxes.
    pub fn reset_to_default(&self) {
        self.inner.switcher.borrow_mut().reset_to_default();
        self.inner.sync_checkboxes();
    }

    /// Patches a style document before handing it to the map constructor.
    pub fn apply_to_style(&self, style: &mut StyleDocument) {
        self.inner.switcher.borrow_mut().apply_to_style(style);
    }

    /// Returns whether the given logical layer is currently switched on.
    #[must_use]
    pub fn is_visible(&self, layer_id: &str) -> bool {
        self.inner.switcher.borrow().is_visible(layer_id)
    }

}

impl Inner {
    /// Pushes the projection back into the DOM so the panel always shows
    /// post-reconciliation state.
    fn sync_checkboxes(&self) {
        let switcher = self.switcher.borrow();
        for (layer_id, input) in self.rows.borrow().iter() {
            input.set_checked(switcher.is_visible(layer_id));
        }
    }
}

impl Drop for SwitcherControl {
    fn drop(&mut self) {
        self.detach();
        self.inner.root.remove();
    }
}

impl core::fmt::Debug for SwitcherControl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwitcherControl")
            .field("rows", &self.inner.rows.borrow().len())
            .field("attached", &self.inner.map.borrow().is_some())
            .finish_non_exhaustive()
    }
}
