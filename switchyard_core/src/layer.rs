// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative layer configuration model.
//!
//! A *logical layer* is a caller-declared, user-toggleable unit. Each one
//! carries:
//!
//! - An identity (`id`) — a stable string key, intended unique across the
//!   whole tree (duplicates are tolerated; see
//!   [`VisibilitySwitcher`](crate::switcher::VisibilitySwitcher)).
//! - A display `title` shown in the widget.
//! - A `prefix` used to match the engine's *physical* render layers: a
//!   physical layer whose id starts with the prefix is governed by this
//!   logical layer. The renderer may expand one logical layer into several
//!   physical sublayers (per-zoom label layers, casing layers), which is
//!   why the join key is a prefix rather than an exact id.
//! - A `default_enabled` flag seeding the initial visible set.
//!
//! Layers are arranged in a [`LayerTree`]: an ordered sequence of
//! standalone layers and single-level [`LayerGroup`]s. Order is display
//! order and is significant; composition is exactly two levels deep
//! (groups contain layers, never other groups).

use alloc::string::String;
use alloc::vec::Vec;

/// A caller-declared, user-toggleable logical layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    /// Stable identity, intended unique across the tree.
    pub id: String,
    /// Display title shown in the widget.
    pub title: String,
    /// Id prefix matching the engine's physical render layers.
    pub prefix: String,
    /// Whether the layer starts switched on.
    pub default_enabled: bool,
}

impl Layer {
    /// Creates a layer descriptor.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        prefix: impl Into<String>,
        default_enabled: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prefix: prefix.into(),
            default_enabled,
        }
    }
}

/// An ordered group of layers rendered under a shared sub-heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerGroup {
    /// Display title rendered as the group's sub-heading.
    pub title: String,
    /// Member layers in display order.
    pub layers: Vec<Layer>,
}

impl LayerGroup {
    /// Creates a group from a title and its member layers.
    #[must_use]
    pub fn new(title: impl Into<String>, layers: Vec<Layer>) -> Self {
        Self {
            title: title.into(),
            layers,
        }
    }
}

/// A top-level tree node: either a standalone layer or a group.
///
/// Tree traversals (index building, widget projection) match this enum
/// exhaustively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerNode {
    /// A standalone layer rendered directly at the top level.
    Layer(Layer),
    /// A group rendered as a sub-heading followed by its members.
    Group(LayerGroup),
}

/// The ordered top-level sequence of layers and groups, as authored by the
/// caller.
///
/// The tree is immutable once handed to a
/// [`VisibilitySwitcher`](crate::switcher::VisibilitySwitcher); there is
/// no editing of the configuration after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerTree {
    nodes: Vec<LayerNode>,
}

impl LayerTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates a tree from pre-built nodes.
    #[must_use]
    pub fn from_nodes(nodes: Vec<LayerNode>) -> Self {
        Self { nodes }
    }

    /// Appends a standalone layer at the top level.
    pub fn push_layer(&mut self, layer: Layer) {
        self.nodes.push(LayerNode::Layer(layer));
    }

    /// Appends a group at the top level.
    pub fn push_group(&mut self, group: LayerGroup) {
        self.nodes.push(LayerNode::Group(group));
    }

    /// Returns the top-level nodes in display order.
    #[must_use]
    pub fn nodes(&self) -> &[LayerNode] {
        &self.nodes
    }

    /// Returns an iterator over every layer in declaration order, with
    /// group members flattened in-line.
    ///
    /// This is the order the id→layer index is built in, and therefore the
    /// order the prefix-matching tie-break follows.
    #[must_use]
    pub fn layers(&self) -> FlatLayers<'_> {
        FlatLayers {
            nodes: self.nodes.iter(),
            group: [].iter(),
        }
    }
}

/// Iterator over all layers of a [`LayerTree`] in declaration order.
#[derive(Clone, Debug)]
pub struct FlatLayers<'a> {
    nodes: core::slice::Iter<'a, LayerNode>,
    group: core::slice::Iter<'a, Layer>,
}

impl<'a> Iterator for FlatLayers<'a> {
    type Item = &'a Layer;

    fn next(&mut self) -> Option<&'a Layer> {
        loop {
            if let Some(layer) = self.group.next() {
                return Some(layer);
            }
            match self.nodes.next()? {
                LayerNode::Layer(layer) => return Some(layer),
                LayerNode::Group(group) => self.group = group.layers.iter(),
            }
        }
    }
}
