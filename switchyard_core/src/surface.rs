// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for render-engine integrations.
//!
//! Switchyard splits engine-specific work into *backend* crates. Each
//! backend provides the following pieces:
//!
//! - **Surface** — Implements the [`RenderSurface`] trait over the
//!   engine's map handle (e.g. a `maplibregl.Map` instance), exposing the
//!   current physical layer ids and per-layer visibility writes.
//!
//! - **Load notification** — Wires the engine's one-shot "style loaded"
//!   event to [`VisibilitySwitcher::style_loaded`]. This is
//!   backend-specific and not abstracted by a trait because event
//!   registration and handler lifetime differ fundamentally across
//!   platforms (DOM closures must be retained; native callbacks are not).
//!
//! - **Widget rendering** — Turns the core's
//!   [widget projection](crate::widget) into native UI and routes change
//!   events back to [`VisibilitySwitcher::toggle`].
//!
//! # Crate boundaries
//!
//! `switchyard_core` owns the configuration model, the visible-set state
//! machine, both reconciliation paths, and this contract module. Backend
//! crates depend on `switchyard_core` and provide platform glue.
//! Application code depends on both and wires them together.
//!
//! [`VisibilitySwitcher::style_loaded`]: crate::switcher::VisibilitySwitcher::style_loaded
//! [`VisibilitySwitcher::toggle`]: crate::switcher::VisibilitySwitcher::toggle

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// A physical layer's visibility flag, as the engine spells it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// The layer is drawn. This is also the engine's implicit default when
    /// the flag is absent from a style document.
    Visible,
    /// The layer is not drawn.
    None,
}

impl Visibility {
    /// Returns the engine's string spelling of the flag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::None => "none",
        }
    }

    /// Maps visible-set membership to a flag value.
    #[must_use]
    pub const fn shown(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::None }
    }
}

/// A live rendering engine's view of its physical layers.
///
/// Both map-engine handles and test doubles implement this trait, enabling
/// a generic switcher and scripted reconciliation tests. Visibility writes
/// are assumed idempotent: setting the same value twice is safe and the
/// switcher does not deduplicate writes.
pub trait RenderSurface {
    /// Returns whether the engine has finished loading its style.
    ///
    /// Live reconciliation is only meaningful once this reports `true`;
    /// before that, the switcher defers until the backend delivers the
    /// load notification.
    fn is_style_loaded(&self) -> bool;

    /// Returns the ids of all current physical layers, in engine order.
    fn physical_layer_ids(&self) -> Vec<String>;

    /// Sets a physical layer's visibility flag.
    fn set_layer_visibility(&mut self, physical_id: &str, visibility: Visibility);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_spelling_matches_engine() {
        assert_eq!(Visibility::Visible.as_str(), "visible");
        assert_eq!(Visibility::None.as_str(), "none");
    }

    #[test]
    fn shown_maps_membership() {
        assert_eq!(Visibility::shown(true), Visibility::Visible);
        assert_eq!(Visibility::shown(false), Visibility::None);
    }

    #[test]
    fn visibility_serializes_lowercase() {
        let v = serde_json::to_value(Visibility::None).unwrap();
        assert_eq!(v, serde_json::json!("none"));
        let v = serde_json::to_value(Visibility::Visible).unwrap();
        assert_eq!(v, serde_json::json!("visible"));
    }
}
