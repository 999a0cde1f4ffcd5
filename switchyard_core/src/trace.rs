// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the toggle loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! the switcher calls at each stage. All method bodies default to no-ops,
//! so implementing only the events you care about is fine.
//!
//! Every failure mode in this subsystem is non-fatal: a duplicate layer id
//! degrades to an overwritten index entry, an unknown toggle target to a
//! silent no-op. The trace sink is where those degradations become
//! observable without turning them into errors.

use crate::surface::Visibility;

/// Which reconciliation path produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReconcilePath {
    /// Style-document patching before the engine loads the style.
    PreLoad,
    /// Explicit visibility writes against a live surface.
    Live,
}

/// Emitted for every [`toggle`](crate::switcher::VisibilitySwitcher::toggle)
/// call, after the visible set has been mutated.
#[derive(Clone, Copy, Debug)]
pub struct ToggleEvent<'a> {
    /// The logical layer id named by the caller.
    pub layer_id: &'a str,
    /// The requested state.
    pub visible: bool,
    /// Whether the id resolves to a configured layer. Unknown ids are a
    /// caller no-op, not an error.
    pub known: bool,
}

/// Emitted once per reconciliation pass.
#[derive(Clone, Copy, Debug)]
pub struct ReconcileEvent {
    /// Which path ran.
    pub path: ReconcilePath,
    /// Physical layers whose visibility flag was written.
    pub writes: usize,
    /// Physical layers no configured prefix matched (left untouched).
    pub skipped: usize,
}

/// Receives switcher diagnostics. All methods default to no-ops.
pub trait TraceSink {
    /// A layer id was declared twice; the later declaration overwrote the
    /// earlier index entry. Non-fatal configuration warning.
    fn on_duplicate_id(&mut self, _id: &str) {}

    /// A toggle call mutated the visible set.
    fn on_toggle(&mut self, _event: &ToggleEvent<'_>) {}

    /// A reconciliation pass completed.
    fn on_reconcile(&mut self, _event: &ReconcileEvent) {}

    /// A single physical layer's visibility flag was written.
    fn on_visibility_write(&mut self, _physical_id: &str, _visibility: Visibility) {}
}
