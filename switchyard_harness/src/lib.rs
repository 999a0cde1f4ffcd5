// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted render surface for switcher tests and demos.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use switchyard_core::surface::{RenderSurface, Visibility};

/// One recorded visibility write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityWrite {
    /// The physical layer id the write targeted.
    pub physical_id: String,
    /// The value written.
    pub visibility: Visibility,
}

#[derive(Debug, Default)]
struct Inner {
    style_loaded: bool,
    layer_order: Vec<String>,
    writes: Vec<VisibilityWrite>,
}

/// A scripted [`RenderSurface`] that records every visibility write.
///
/// Clones share state, so a test can attach one handle to a switcher and
/// keep another for scripting load transitions and inspecting the write
/// log. Not thread-safe; intended for single-threaded tests and demos.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSurface {
    inner: Rc<RefCell<Inner>>,
}

impl ScriptedSurface {
    /// Creates a surface whose style has not loaded yet and which reports
    /// the given physical layer ids once asked.
    #[must_use]
    pub fn pending(layer_ids: &[&str]) -> Self {
        let surface = Self::default();
        surface.set_layer_order(layer_ids);
        surface
    }

    /// Creates a surface whose style is already loaded.
    #[must_use]
    pub fn loaded(layer_ids: &[&str]) -> Self {
        let surface = Self::pending(layer_ids);
        surface.finish_loading();
        surface
    }

    /// Marks the style as loaded. The caller still has to deliver
    /// `style_loaded` to an attached switcher, mirroring how a real
    /// engine's load event reaches the switcher through backend glue.
    pub fn finish_loading(&self) {
        self.inner.borrow_mut().style_loaded = true;
    }

    /// Replaces the scripted physical layer order.
    pub fn set_layer_order(&self, layer_ids: &[&str]) {
        self.inner.borrow_mut().layer_order =
            layer_ids.iter().map(ToString::to_string).collect();
    }

    /// Returns all recorded writes in order.
    #[must_use]
    pub fn writes(&self) -> Vec<VisibilityWrite> {
        self.inner.borrow().writes.clone()
    }

    /// Returns the most recent write targeting `physical_id`, if any.
    #[must_use]
    pub fn last_write(&self, physical_id: &str) -> Option<Visibility> {
        self.inner
            .borrow()
            .writes
            .iter()
            .rev()
            .find(|write| write.physical_id == physical_id)
            .map(|write| write.visibility)
    }

    /// Clears the write log without touching load state or layer order.
    pub fn clear_writes(&self) {
        self.inner.borrow_mut().writes.clear();
    }

    /// Returns the number of recorded writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes.len()
    }
}

impl RenderSurface for ScriptedSurface {
    fn is_style_loaded(&self) -> bool {
        self.inner.borrow().style_loaded
    }

    fn physical_layer_ids(&self) -> Vec<String> {
        self.inner.borrow().layer_order.clone()
    }

    fn set_layer_visibility(&mut self, physical_id: &str, visibility: Visibility) {
        self.inner.borrow_mut().writes.push(VisibilityWrite {
            physical_id: String::from(physical_id),
            visibility,
        });
    }
}
