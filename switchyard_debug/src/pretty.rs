// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).
//! [`format_layer_tree`] dumps a configuration as an indented listing for
//! startup logging and bug reports.

use std::io::Write;

use switchyard_core::layer::{LayerNode, LayerTree};
use switchyard_core::surface::Visibility;
use switchyard_core::trace::{ReconcileEvent, ReconcilePath, ToggleEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn path_name(path: ReconcilePath) -> &'static str {
    match path {
        ReconcilePath::PreLoad => "pre-load",
        ReconcilePath::Live => "live",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_duplicate_id(&mut self, id: &str) {
        let _ = writeln!(self.writer, "[config] duplicate layer id {id:?}, last declaration wins");
    }

    fn on_toggle(&mut self, e: &ToggleEvent<'_>) {
        let known = if e.known { "" } else { " (unknown id)" };
        let _ = writeln!(
            self.writer,
            "[toggle] {}={}{known}",
            e.layer_id,
            if e.visible { "on" } else { "off" },
        );
    }

    fn on_reconcile(&mut self, e: &ReconcileEvent) {
        let _ = writeln!(
            self.writer,
            "[reconcile] path={} writes={} skipped={}",
            path_name(e.path),
            e.writes,
            e.skipped,
        );
    }

    fn on_visibility_write(&mut self, physical_id: &str, visibility: Visibility) {
        let _ = writeln!(self.writer, "[write] {physical_id} -> {}", visibility.as_str());
    }
}

/// Formats a layer tree as an indented listing, one node per line.
///
/// Standalone layers and group members print as
/// `id (title) prefix=... default=on|off`; group headings print bare.
#[must_use]
pub fn format_layer_tree(tree: &LayerTree) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    for node in tree.nodes() {
        match node {
            LayerNode::Layer(layer) => {
                let _ = writeln!(
                    out,
                    "{} ({}) prefix={} default={}",
                    layer.id,
                    layer.title,
                    layer.prefix,
                    if layer.default_enabled { "on" } else { "off" },
                );
            }
            LayerNode::Group(group) => {
                let _ = writeln!(out, "{}:", group.title);
                for layer in &group.layers {
                    let _ = writeln!(
                        out,
                        "  {} ({}) prefix={} default={}",
                        layer.id,
                        layer.title,
                        layer.prefix,
                        if layer.default_enabled { "on" } else { "off" },
                    );
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use switchyard_core::layer::{Layer, LayerGroup};

    use super::*;

    #[test]
    fn pretty_print_toggle_and_reconcile() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_toggle(&ToggleEvent {
            layer_id: "dlr",
            visible: true,
            known: true,
        });
        sink.on_reconcile(&ReconcileEvent {
            path: ReconcilePath::Live,
            writes: 3,
            skipped: 12,
        });
        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("[toggle] dlr=on"), "got: {output}");
        assert!(output.contains("path=live writes=3 skipped=12"), "got: {output}");
    }

    #[test]
    fn tree_listing_indents_group_members() {
        let mut tree = LayerTree::new();
        tree.push_layer(Layer::new("labels", "Labels", "place-", true));
        tree.push_group(LayerGroup::new(
            "Transport",
            vec![Layer::new("dlr", "DLR", "dlr-route-layer", false)],
        ));

        let listing = format_layer_tree(&tree);
        assert!(listing.contains("labels (Labels) prefix=place- default=on"));
        assert!(listing.contains("Transport:\n  dlr (DLR) prefix=dlr-route-layer default=off"));
    }
}
