// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types and visible-set state machine for map layer switching.
//!
//! `switchyard_core` owns the logical side of a map's layer-visibility
//! control: a declarative configuration of toggleable layers, the set of
//! layers currently switched on, and the reconciliation logic that keeps a
//! rendering engine's *physical* layers in sync with that set. It is
//! `no_std` compatible (with `alloc`); platform code lives in backend
//! crates.
//!
//! # Architecture
//!
//! The crate is organized around a toggle loop that turns widget events
//! into explicit visibility writes on a render surface:
//!
//! ```text
//!   LayerTree ──► VisibilitySwitcher::new() ──► id→layer index + visible set
//!                                                       │
//!   widget event ──► toggle(id, visible) ──────────────►│
//!                                                       ▼
//!                              reconcile ──► RenderSurface::set_layer_visibility
//!                                                       │
//!                                                       ▼
//!                              widget projection (checked = membership)
//! ```
//!
//! **[`layer`]** — The declarative configuration model: [`Layer`] leaves,
//! single-level [`LayerGroup`]s, and the ordered [`LayerTree`] that mixes
//! both.
//!
//! **[`switcher`]** — The [`VisibilitySwitcher`] state machine: index
//! building, idempotent toggling, the attach/detach/load protocol, and the
//! prefix-matching rule that joins logical layers to physical ones.
//!
//! **[`style`]** — The pre-load path: a typed [`StyleDocument`] whose
//! hidden layers are patched before the engine ever parses the style.
//!
//! **[`surface`]** — The [`RenderSurface`](surface::RenderSurface) trait
//! that backends implement to expose a live engine's physical layers.
//!
//! **[`widget`]** — Pure projection of the tree and visible set into
//! renderable widget items.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for diagnostics (duplicate-id warnings, toggle and reconcile events).
//!
//! [`Layer`]: layer::Layer
//! [`LayerGroup`]: layer::LayerGroup
//! [`LayerTree`]: layer::LayerTree
//! [`VisibilitySwitcher`]: switcher::VisibilitySwitcher
//! [`StyleDocument`]: style::StyleDocument

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod layer;
pub mod style;
pub mod surface;
pub mod switcher;
pub mod trace;
pub mod widget;
