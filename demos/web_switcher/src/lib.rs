// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: a London transit layer panel driven by `switchyard_backend_web`.
//!
//! Creates a MapLibre map over an OpenFreeMap base style and binds a
//! [`SwitcherControl`] with the TfL layer configuration: base-map labels,
//! one entry per Underground/Overground line, and station infrastructure.
//! Route layers are expected to be added by the hosting page under the
//! prefixes configured here (e.g. `central-route-layer`,
//! `central-route-layer-casing`).
//!
//! Build with: `wasm-pack build --target web demos/web_switcher`
//!
//! Then serve `demos/web_switcher/` and open `index.html` in a browser.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::vec;

use wasm_bindgen::prelude::*;
use web_sys::window;

use switchyard_backend_web::{MapHandle, SwitcherControl};
use switchyard_core::layer::{Layer, LayerGroup, LayerTree};

const STYLE_URL: &str = "https://tiles.openfreemap.org/styles/bright";

/// (id, title, physical prefix) per transit line, all enabled by default.
const TRANSPORT_LINES: &[(&str, &str, &str)] = &[
    ("tube-central", "Central Line", "central-route-layer"),
    ("tube-northern", "Northern Line", "northern-route-layer"),
    ("tube-victoria", "Victoria Line", "victoria-route-layer"),
    ("tube-district", "District Line", "district-route-layer"),
    ("tube-bakerloo", "Bakerloo Line", "bakerloo-route-layer"),
    (
        "tube-hammersmith-city",
        "Hammersmith & City Line",
        "hammersmith-city-route-layer",
    ),
    ("tube-piccadilly", "Piccadilly Line", "piccadilly-route-layer"),
    ("tube-jubilee", "Jubilee Line", "jubilee-route-layer"),
    (
        "tube-metropolitan",
        "Metropolitan Line",
        "metropolitan-route-layer",
    ),
    ("tube-circle", "Circle Line", "circle-route-layer"),
    (
        "tube-waterloo-city",
        "Waterloo & City Line",
        "waterloo-city-route-layer",
    ),
    ("tube-elizabeth", "Elizabeth Line", "elizabeth-route-layer"),
    ("overground-liberty", "Liberty Line", "liberty-route-layer"),
    ("overground-lioness", "Lioness Line", "lioness-route-layer"),
    ("overground-mildmay", "Mildmay Line", "mildmay-route-layer"),
    (
        "overground-suffragette",
        "Suffragette Line",
        "suffragette-route-layer",
    ),
    ("overground-weaver", "Weaver Line", "weaver-route-layer"),
    ("overground-windrush", "Windrush Line", "windrush-route-layer"),
    ("cable-car", "Cable Car", "cable-car-route-layer"),
    ("dlr", "DLR", "dlr-route-layer"),
    ("tram", "Tram", "tram-route-layer"),
    ("thameslink", "Thameslink", "thameslink-route-layer"),
];

fn transit_tree() -> LayerTree {
    let mut tree = LayerTree::new();

    tree.push_group(LayerGroup::new(
        "Background",
        vec![Layer::new("labels", "Map Labels", "place-", true)],
    ));

    let mut transport = vec![];
    for &(id, title, prefix) in TRANSPORT_LINES {
        transport.push(Layer::new(id, title, prefix, true));
    }
    tree.push_group(LayerGroup::new("Transport", transport));

    tree.push_group(LayerGroup::new(
        "Infrastructure",
        vec![
            Layer::new("stations", "Stations", "tfl-stations-layer", true),
            Layer::new("station-labels", "Station Labels", "tfl-station-labels", true),
        ],
    ));

    tree
}

fn map_options() -> Result<JsValue, JsValue> {
    let options = serde_json::json!({
        "container": "map",
        "style": STYLE_URL,
        "center": [-0.1275, 51.5072],
        "zoom": 12.0,
        "maxBounds": [[-1.0, 50.8], [0.7, 52.6]],
    });
    serde_wasm_bindgen::to_value(&options).map_err(Into::into)
}

/// Entry point: builds the map, the panel, and wires them together.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = window()
        .ok_or_else(|| JsValue::from_str("no global window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document on window"))?;

    let map = MapHandle::new(&map_options()?);
    let control = SwitcherControl::new(&document, transit_tree(), "Layers")?;
    map.get_container().append_child(control.root())?;
    control.attach(&map);

    // The panel lives for the page lifetime; dropping it would tear the
    // DOM back down.
    core::mem::forget(control);
    Ok(())
}
