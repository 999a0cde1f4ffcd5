// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure projection of the configuration into renderable widget items.
//!
//! The widget is a flat list rebuilt from the [`LayerTree`] in display
//! order: groups contribute a sub-heading followed by one row per member,
//! standalone layers contribute a row directly. A row's `checked` state
//! equals its layer's visible-set membership at projection time.
//!
//! Projection never mutates the visible set and never touches a render
//! surface; backends call it after every mutation and translate the items
//! into native UI.

use alloc::string::String;
use alloc::vec::Vec;

use crate::layer::{LayerNode, LayerTree};
use crate::switcher::VisibleSet;

/// One entry in the rendered widget list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetItem {
    /// A group sub-heading.
    Heading(String),
    /// A toggleable layer row.
    Row {
        /// The logical layer id a change event should toggle.
        layer_id: String,
        /// Display title.
        title: String,
        /// Whether the row's control renders checked.
        checked: bool,
    },
}

/// Projects the tree and visible set into widget items in display order.
#[must_use]
pub fn project(tree: &LayerTree, visible: &VisibleSet) -> Vec<WidgetItem> {
    let mut items = Vec::new();
    for node in tree.nodes() {
        match node {
            LayerNode::Layer(layer) => items.push(row(layer, visible)),
            LayerNode::Group(group) => {
                items.push(WidgetItem::Heading(group.title.clone()));
                for layer in &group.layers {
                    items.push(row(layer, visible));
                }
            }
        }
    }
    items
}

fn row(layer: &crate::layer::Layer, visible: &VisibleSet) -> WidgetItem {
    WidgetItem::Row {
        layer_id: layer.id.clone(),
        title: layer.title.clone(),
        checked: visible.contains(&layer.id),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::layer::{Layer, LayerGroup};

    fn tree() -> LayerTree {
        let mut tree = LayerTree::new();
        tree.push_layer(Layer::new("labels", "Map Labels", "place-", true));
        tree.push_group(LayerGroup::new(
            "Transport",
            vec![
                Layer::new("tube-central", "Central Line", "central-route-layer", true),
                Layer::new("dlr", "DLR", "dlr-route-layer", false),
            ],
        ));
        tree
    }

    #[test]
    fn projection_follows_display_order() {
        let mut visible = VisibleSet::new();
        visible.insert("labels");
        visible.insert("tube-central");

        let items = project(&tree(), &visible);
        assert_eq!(
            items,
            vec![
                WidgetItem::Row {
                    layer_id: "labels".into(),
                    title: "Map Labels".into(),
                    checked: true,
                },
                WidgetItem::Heading("Transport".into()),
                WidgetItem::Row {
                    layer_id: "tube-central".into(),
                    title: "Central Line".into(),
                    checked: true,
                },
                WidgetItem::Row {
                    layer_id: "dlr".into(),
                    title: "DLR".into(),
                    checked: false,
                },
            ]
        );
    }

    #[test]
    fn checked_tracks_membership() {
        let tree = tree();
        let mut visible = VisibleSet::new();

        let items = project(&tree, &visible);
        assert!(items.iter().all(|item| !matches!(
            item,
            WidgetItem::Row { checked: true, .. }
        )));

        visible.insert("dlr");
        let items = project(&tree, &visible);
        let dlr = items
            .iter()
            .find(|item| matches!(item, WidgetItem::Row { layer_id, .. } if layer_id == "dlr"))
            .unwrap();
        assert!(matches!(dlr, WidgetItem::Row { checked: true, .. }));
    }
}
