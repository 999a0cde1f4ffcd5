// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style document model for the pre-load path.
//!
//! A rendering engine's style is a JSON document containing, among other
//! things, an ordered list of physical layer descriptors. Before the
//! engine has parsed the document it can be patched in memory, which is
//! cheaper than issuing live visibility writes immediately after load and
//! avoids a flash of soon-to-be-hidden content.
//!
//! The model here is deliberately narrow: [`StyleDocument`],
//! [`StyleLayer`], and [`LayoutProps`] name only the fields the switcher
//! touches and round-trip everything else through flattened maps, so a
//! patched document serializes back with all unknown fields intact.
//!
//! The only mutation ever performed is
//! [`StyleLayer::hide`], which writes `layers[i].layout.visibility =
//! "none"` (creating `layout` if absent). Nothing in this module writes an
//! explicit `"visible"`: absence of the flag already means visible, and
//! the pre-load path leaves shown layers untouched.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::surface::Visibility;

/// An in-memory style description the engine has not yet loaded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleDocument {
    /// Physical layer descriptors in engine draw order.
    #[serde(default)]
    pub layers: Vec<StyleLayer>,
    /// All other document fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One physical layer descriptor inside a [`StyleDocument`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleLayer {
    /// The physical layer id the prefix-matching rule runs against.
    pub id: String,
    /// Layout properties, present only when the document declares any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutProps>,
    /// All other descriptor fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The layout block of a [`StyleLayer`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutProps {
    /// The visibility flag; absent means visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// All other layout fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StyleLayer {
    /// Creates a descriptor with the given id and no other fields.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            layout: None,
            extra: Map::new(),
        }
    }

    /// Returns the declared visibility flag, if any.
    #[must_use]
    pub fn visibility(&self) -> Option<Visibility> {
        self.layout.as_ref().and_then(|layout| layout.visibility)
    }

    /// Forces the visibility flag to `"none"`, creating the layout block
    /// if the descriptor has none.
    ///
    /// This is the single field path the pre-load path mutates:
    /// `layout.visibility`.
    pub fn hide(&mut self) {
        self.layout.get_or_insert_with(LayoutProps::default).visibility = Some(Visibility::None);
    }
}
