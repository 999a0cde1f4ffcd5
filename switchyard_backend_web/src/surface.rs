// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`RenderSurface`] implementation over a MapLibre map handle.

use alloc::string::String;
use alloc::vec::Vec;

use wasm_bindgen::JsValue;

use switchyard_core::surface::{RenderSurface, Visibility};

use crate::bindings::MapHandle;

/// Adapts a `maplibregl.Map` to the core [`RenderSurface`] contract.
///
/// Cloning clones the underlying JS handle, so two surfaces over the same
/// map observe the same state.
#[derive(Clone)]
pub struct MapSurface {
    map: MapHandle,
}

impl core::fmt::Debug for MapSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MapSurface")
            .field("map", &"maplibregl.Map")
            .finish()
    }
}

impl MapSurface {
    /// Wraps a map handle.
    #[must_use]
    pub fn new(map: MapHandle) -> Self {
        Self { map }
    }

    /// Returns the underlying map handle.
    #[must_use]
    pub fn map(&self) -> &MapHandle {
        &self.map
    }
}

impl RenderSurface for MapSurface {
    fn is_style_loaded(&self) -> bool {
        self.map.is_style_loaded()
    }

    fn physical_layer_ids(&self) -> Vec<String> {
        // getLayersOrder returns an Array of strings; anything else in it
        // would be an engine bug, so non-strings are skipped.
        self.map
            .get_layers_order()
            .iter()
            .filter_map(|value| value.as_string())
            .collect()
    }

    fn set_layer_visibility(&mut self, physical_id: &str, visibility: Visibility) {
        self.map.set_layout_property(
            physical_id,
            "visibility",
            &JsValue::from_str(visibility.as_str()),
        );
    }
}
