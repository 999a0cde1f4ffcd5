// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `wasm-bindgen` imports for the MapLibre GL JS API.
//!
//! Only the surface the switcher needs is bound: style-load state, the
//! current layer order, per-layer layout writes, and `load` event
//! registration. Everything else on `maplibregl.Map` stays reachable
//! through the underlying `JsValue` if an application needs it.

use js_sys::Array;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A `maplibregl.Map` instance.
    #[wasm_bindgen(js_namespace = maplibregl, js_name = Map)]
    pub type MapHandle;

    /// Constructs a map from a MapLibre options object.
    #[wasm_bindgen(constructor, js_namespace = maplibregl, js_name = Map)]
    pub fn new(options: &JsValue) -> MapHandle;

    /// Returns the map's container element.
    #[wasm_bindgen(method, js_name = getContainer)]
    pub fn get_container(this: &MapHandle) -> web_sys::HtmlElement;

    /// Returns whether the map's style has finished loading.
    #[wasm_bindgen(method, js_name = isStyleLoaded)]
    pub fn is_style_loaded(this: &MapHandle) -> bool;

    /// Returns the ids of all style layers in render order.
    #[wasm_bindgen(method, js_name = getLayersOrder)]
    pub fn get_layers_order(this: &MapHandle) -> Array;

    /// Sets a layout property on a style layer.
    #[wasm_bindgen(method, js_name = setLayoutProperty)]
    pub fn set_layout_property(this: &MapHandle, layer_id: &str, name: &str, value: &JsValue);

    /// Registers an event handler.
    #[wasm_bindgen(method)]
    pub fn on(this: &MapHandle, event: &str, handler: &Closure<dyn FnMut()>);

    /// Unregisters an event handler.
    #[wasm_bindgen(method)]
    pub fn off(this: &MapHandle, event: &str, handler: &Closure<dyn FnMut()>);
}
