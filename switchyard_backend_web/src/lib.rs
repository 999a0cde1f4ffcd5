// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MapLibre GL JS backend for switchyard.
//!
//! This crate provides integration with the MapLibre browser API:
//!
//! - [`MapHandle`]: `wasm-bindgen` imports for `maplibregl.Map`
//! - [`MapSurface`]: [`RenderSurface`] implementation over a map handle
//! - [`SwitcherControl`]: DOM checkbox panel driving a
//!   [`VisibilitySwitcher`](switchyard_core::switcher::VisibilitySwitcher)

#![no_std]

extern crate alloc;

mod bindings;
mod control;
mod surface;

pub use bindings::MapHandle;
pub use control::SwitcherControl;
pub use surface::MapSurface;
pub use switchyard_core::surface::RenderSurface;
