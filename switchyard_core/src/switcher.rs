// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible-set state machine and both reconciliation paths.
//!
//! [`VisibilitySwitcher`] owns a [`LayerTree`], an id→layer index derived
//! from it once at construction, the current [`VisibleSet`], a frozen
//! snapshot of the default visible set, and (while attached) the render
//! surface being governed.
//!
//! # Matching rule
//!
//! A physical render layer with id `P` is governed by configured layer `L`
//! iff `P` starts with `L.prefix`. Prefixes need not be disjoint: when a
//! physical id matches several configured layers, the **last** matching
//! entry in index iteration order (which is index build order) wins. This
//! tie-break is part of the contract and is pinned by tests, not an
//! accident of implementation.
//!
//! # Ordering guarantee
//!
//! Within one [`toggle`](VisibilitySwitcher::toggle) call, the visible-set
//! mutation strictly precedes physical reconciliation. The widget
//! projection is pulled by the caller after `toggle` returns, so it always
//! reflects the post-reconciliation state.
//!
//! [`LayerTree`]: crate::layer::LayerTree

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::layer::{Layer, LayerTree};
use crate::style::StyleDocument;
use crate::surface::{RenderSurface, Visibility};
use crate::trace::{ReconcileEvent, ReconcilePath, ToggleEvent, TraceSink};
use crate::widget::{self, WidgetItem};

/// Id→layer index in build order. Inserting an existing key keeps the
/// first occurrence's position and replaces its value, which is exactly
/// the documented duplicate-id behavior (last declared wins for lookup,
/// iteration order stays build order).
type LayerIndex = IndexMap<String, Layer, FxBuildHasher>;

/// The set of logical-layer ids currently switched on.
///
/// Membership semantics are order-insensitive; the backing storage is an
/// appendable sequence, which keeps the set cheap for the handful of
/// entries a layer configuration has.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleSet {
    ids: Vec<String>,
}

impl VisibleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Returns whether `id` is a member.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|member| member == id)
    }

    /// Inserts `id` if absent. Returns whether the set changed.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(String::from(id));
        true
    }

    /// Removes `id` if present. Returns whether the set changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|member| member != id);
        self.ids.len() != before
    }

    /// Returns an iterator over the member ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Owns the layer configuration and keeps widget, model, and engine
/// mutually consistent.
///
/// The switcher is generic over its [`RenderSurface`] so backends supply
/// engine handles and tests supply scripted doubles. The surface is held
/// only while attached; [`detach`](Self::detach) hands it back.
pub struct VisibilitySwitcher<S> {
    tree: LayerTree,
    title: String,
    index: LayerIndex,
    visible: VisibleSet,
    defaults: VisibleSet,
    surface: Option<S>,
    awaiting_load: bool,
    trace: Option<Box<dyn TraceSink>>,
}

impl<S> fmt::Debug for VisibilitySwitcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilitySwitcher")
            .field("title", &self.title)
            .field("layers", &self.index.len())
            .field("visible", &self.visible)
            .field("attached", &self.surface.is_some())
            .field("awaiting_load", &self.awaiting_load)
            .finish_non_exhaustive()
    }
}

impl<S: RenderSurface> VisibilitySwitcher<S> {
    /// Creates a switcher from an authored tree and a widget title.
    ///
    /// Builds the id→layer index in one flattening pass and seeds both the
    /// visible set and its frozen default snapshot from each layer's
    /// `default_enabled` flag. Performs no surface interaction.
    #[must_use]
    pub fn new(tree: LayerTree, title: impl Into<String>) -> Self {
        Self::build(tree, title.into(), None)
    }

    /// Like [`new`](Self::new), with a trace sink receiving diagnostics
    /// from construction onward (duplicate-id warnings fire during index
    /// building, so a sink installed later would miss them).
    #[must_use]
    pub fn with_trace(tree: LayerTree, title: impl Into<String>, trace: Box<dyn TraceSink>) -> Self {
        Self::build(tree, title.into(), Some(trace))
    }

    fn build(tree: LayerTree, title: String, mut trace: Option<Box<dyn TraceSink>>) -> Self {
        let mut index = LayerIndex::with_hasher(FxBuildHasher);
        for layer in tree.layers() {
            if index.insert(layer.id.clone(), layer.clone()).is_some() {
                if let Some(sink) = trace.as_deref_mut() {
                    sink.on_duplicate_id(&layer.id);
                }
            }
        }

        // Derive defaults from the index, not the tree, so a duplicate
        // declaration's default_enabled flag wins along with the rest of
        // its attributes.
        let mut visible = VisibleSet::new();
        for layer in index.values() {
            if layer.default_enabled {
                visible.insert(&layer.id);
            }
        }
        let defaults = visible.clone();

        Self {
            tree,
            title,
            index,
            visible,
            defaults,
            surface: None,
            awaiting_load: false,
            trace,
        }
    }

    /// Returns the widget title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the authored tree.
    #[must_use]
    pub fn tree(&self) -> &LayerTree {
        &self.tree
    }

    /// Looks up a configured layer by id.
    #[must_use]
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.index.get(id)
    }

    /// Returns whether the given logical layer is currently switched on.
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    /// Returns the current visible set.
    #[must_use]
    pub fn visible_set(&self) -> &VisibleSet {
        &self.visible
    }

    /// Returns the default visible set frozen at construction.
    #[must_use]
    pub fn default_set(&self) -> &VisibleSet {
        &self.defaults
    }

    /// Returns whether a surface is currently attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Switches a logical layer on or off.
    ///
    /// Idempotent: repeated calls with the same arguments leave the same
    /// state, and removal of an absent id is a no-op. Ids that name no
    /// configured layer are accepted silently; their membership is
    /// recorded but no physical layer can match them. After the mutation,
    /// live reconciliation runs if a loaded surface is attached.
    pub fn toggle(&mut self, layer_id: &str, visible: bool) {
        if visible {
            self.visible.insert(layer_id);
        } else {
            self.visible.remove(layer_id);
        }

        let known = self.index.contains_key(layer_id);
        if let Some(sink) = self.trace.as_deref_mut() {
            sink.on_toggle(&ToggleEvent {
                layer_id,
                visible,
                known,
            });
        }

        self.reconcile_surface();
    }

    /// Restores the default visible set frozen at construction and
    /// reconciles.
    pub fn reset_to_default(&mut self) {
        self.visible = self.defaults.clone();
        self.reconcile_surface();
    }

    /// Attaches a render surface.
    ///
    /// If the surface reports its style already loaded, visibility is
    /// applied immediately; otherwise application is deferred until the
    /// backend delivers [`style_loaded`](Self::style_loaded). Re-attaching
    /// an equivalent surface is idempotent: visibility writes repeat with
    /// identical values.
    pub fn attach(&mut self, surface: S) {
        self.awaiting_load = !surface.is_style_loaded();
        self.surface = Some(surface);
        if !self.awaiting_load {
            self.reconcile_surface();
        }
    }

    /// Detaches and returns the surface, if any. Safe to call when not
    /// attached. Toggles performed while detached accumulate in the
    /// visible set and replay on the next attachment.
    pub fn detach(&mut self) -> Option<S> {
        self.awaiting_load = false;
        self.surface.take()
    }

    /// Delivers the one-shot style-load notification.
    ///
    /// Runs the deferred first reconciliation exactly once. Tolerates the
    /// platform callback firing after [`detach`](Self::detach) or when no
    /// load was pending: both cases are no-ops.
    pub fn style_loaded(&mut self) {
        if self.surface.is_none() || !self.awaiting_load {
            return;
        }
        self.awaiting_load = false;
        self.reconcile_surface();
    }

    /// Live application: writes an explicit visibility flag for every
    /// matched physical layer.
    ///
    /// Enumerates the surface's current physical layer ids; ids no
    /// configured prefix matches are left untouched (expected for base-map
    /// layers outside the switcher's purview). Matched ids get an explicit
    /// `visible` or `none` in both directions, because a physical layer
    /// may already be visible from a prior state. No-op while detached or
    /// before the style has loaded.
    pub fn reconcile_surface(&mut self) {
        if self.awaiting_load {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let mut writes = 0_usize;
        let mut skipped = 0_usize;
        for physical_id in surface.physical_layer_ids() {
            let Some(layer) = governing(&self.index, &physical_id) else {
                skipped += 1;
                continue;
            };
            let visibility = Visibility::shown(self.visible.contains(&layer.id));
            surface.set_layer_visibility(&physical_id, visibility);
            if let Some(sink) = self.trace.as_deref_mut() {
                sink.on_visibility_write(&physical_id, visibility);
            }
            writes += 1;
        }

        if let Some(sink) = self.trace.as_deref_mut() {
            sink.on_reconcile(&ReconcileEvent {
                path: ReconcilePath::Live,
                writes,
                skipped,
            });
        }
    }

    /// Pre-load application: patches a style document in place.
    ///
    /// For every physical layer descriptor matched to a configured layer
    /// that is **not** in the visible set, forces
    /// `layers[i].layout.visibility = "none"` (creating the layout block
    /// if absent). Matched descriptors whose layer is visible are left
    /// untouched — absence of the flag already means visible, and this
    /// path never writes an explicit `"visible"`. Callable independent of
    /// attachment; nothing outside the named field path is mutated.
    pub fn apply_to_style(&mut self, style: &mut StyleDocument) {
        let mut writes = 0_usize;
        let mut skipped = 0_usize;
        for physical in &mut style.layers {
            let Some(layer) = governing(&self.index, &physical.id) else {
                skipped += 1;
                continue;
            };
            if self.visible.contains(&layer.id) {
                continue;
            }
            physical.hide();
            if let Some(sink) = self.trace.as_deref_mut() {
                sink.on_visibility_write(&physical.id, Visibility::None);
            }
            writes += 1;
        }

        if let Some(sink) = self.trace.as_deref_mut() {
            sink.on_reconcile(&ReconcileEvent {
                path: ReconcilePath::PreLoad,
                writes,
                skipped,
            });
        }
    }

    /// Returns the configured layer governing a physical id, if any.
    ///
    /// Applies the documented matching rule: prefix match, last matching
    /// index entry wins.
    #[must_use]
    pub fn governing_layer(&self, physical_id: &str) -> Option<&Layer> {
        governing(&self.index, physical_id)
    }

    /// Projects the current state into widget items (display order, rows
    /// checked by membership).
    #[must_use]
    pub fn widget_items(&self) -> Vec<WidgetItem> {
        widget::project(&self.tree, &self.visible)
    }
}

/// Matching rule shared by both reconciliation paths: `physical_id` is
/// governed by the last configured layer (index iteration order) whose
/// prefix it starts with.
fn governing<'a>(index: &'a LayerIndex, physical_id: &str) -> Option<&'a Layer> {
    let mut found = None;
    for layer in index.values() {
        if physical_id.starts_with(layer.prefix.as_str()) {
            found = Some(layer);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    use super::*;
    use crate::layer::LayerGroup;
    use crate::style::StyleLayer;

    /// Scripted surface with a shared probe handle, so writes stay
    /// inspectable after the switcher takes ownership.
    #[derive(Clone, Default)]
    struct Probe {
        loaded: Rc<Cell<bool>>,
        layer_order: Rc<RefCell<Vec<String>>>,
        writes: Rc<RefCell<Vec<(String, Visibility)>>>,
    }

    impl Probe {
        fn loaded_with(ids: &[&str]) -> Self {
            let probe = Self::default();
            probe.loaded.set(true);
            *probe.layer_order.borrow_mut() = ids.iter().map(ToString::to_string).collect();
            probe
        }

        fn writes(&self) -> Vec<(String, Visibility)> {
            self.writes.borrow().clone()
        }

        fn last_write(&self, physical_id: &str) -> Option<Visibility> {
            self.writes
                .borrow()
                .iter()
                .rev()
                .find(|(id, _)| id == physical_id)
                .map(|(_, v)| *v)
        }
    }

    impl RenderSurface for Probe {
        fn is_style_loaded(&self) -> bool {
            self.loaded.get()
        }

        fn physical_layer_ids(&self) -> Vec<String> {
            self.layer_order.borrow().clone()
        }

        fn set_layer_visibility(&mut self, physical_id: &str, visibility: Visibility) {
            self.writes
                .borrow_mut()
                .push((String::from(physical_id), visibility));
        }
    }

    #[derive(Default)]
    struct CountingSink {
        duplicates: Rc<RefCell<Vec<String>>>,
        unknown_toggles: Rc<Cell<usize>>,
    }

    impl TraceSink for CountingSink {
        fn on_duplicate_id(&mut self, id: &str) {
            self.duplicates.borrow_mut().push(String::from(id));
        }

        fn on_toggle(&mut self, event: &ToggleEvent<'_>) {
            if !event.known {
                self.unknown_toggles.set(self.unknown_toggles.get() + 1);
            }
        }
    }

    fn transit_tree() -> LayerTree {
        let mut tree = LayerTree::new();
        tree.push_group(LayerGroup::new(
            "Transport",
            vec![
                Layer::new("tube-central", "Central Line", "central-line-layer", true),
                Layer::new("dlr", "DLR", "dlr-route-layer", true),
            ],
        ));
        tree.push_layer(Layer::new(
            "station-labels",
            "Station Labels",
            "station-labels",
            false,
        ));
        tree
    }

    #[test]
    fn defaults_follow_default_enabled() {
        let sw: VisibilitySwitcher<Probe> = VisibilitySwitcher::new(transit_tree(), "Layers");
        assert!(sw.is_visible("tube-central"));
        assert!(sw.is_visible("dlr"));
        assert!(!sw.is_visible("station-labels"));
        assert_eq!(sw.default_set(), sw.visible_set());
    }

    #[test]
    fn toggle_is_idempotent() {
        let mut sw: VisibilitySwitcher<Probe> = VisibilitySwitcher::new(transit_tree(), "Layers");

        sw.toggle("station-labels", true);
        sw.toggle("station-labels", true);
        sw.toggle("station-labels", true);
        assert!(sw.is_visible("station-labels"));
        assert_eq!(
            sw.visible_set().iter().filter(|id| *id == "station-labels").count(),
            1,
            "repeated inserts must not duplicate membership"
        );

        sw.toggle("station-labels", false);
        sw.toggle("station-labels", false);
        assert!(!sw.is_visible("station-labels"));
    }

    #[test]
    fn final_membership_equals_last_toggle() {
        let mut sw: VisibilitySwitcher<Probe> = VisibilitySwitcher::new(transit_tree(), "Layers");
        for value in [true, false, false, true] {
            sw.toggle("dlr", value);
        }
        assert!(sw.is_visible("dlr"));
    }

    #[test]
    fn unknown_id_is_accepted_silently() {
        let sink = CountingSink::default();
        let unknown = Rc::clone(&sink.unknown_toggles);
        let mut sw: VisibilitySwitcher<Probe> =
            VisibilitySwitcher::with_trace(transit_tree(), "Layers", Box::new(sink));

        let probe = Probe::loaded_with(&["central-line-layer"]);
        sw.attach(probe.clone());
        probe.writes.borrow_mut().clear();

        sw.toggle("no-such-layer", true);
        assert!(sw.is_visible("no-such-layer"), "membership is still recorded");
        assert_eq!(unknown.get(), 1);
        // Reconciliation ran but the unknown id matched nothing new.
        assert_eq!(probe.last_write("central-line-layer"), Some(Visibility::Visible));
    }

    #[test]
    fn duplicate_id_warns_and_last_declaration_wins() {
        let sink = CountingSink::default();
        let duplicates = Rc::clone(&sink.duplicates);

        let mut tree = LayerTree::new();
        tree.push_layer(Layer::new("stations", "Stations (old)", "old-stations-", true));
        tree.push_layer(Layer::new("stations", "Stations", "tfl-stations-layer", false));

        let sw: VisibilitySwitcher<Probe> =
            VisibilitySwitcher::with_trace(tree, "Layers", Box::new(sink));

        assert_eq!(duplicates.borrow().as_slice(), ["stations".to_string()]);
        let layer = sw.layer("stations").unwrap();
        assert_eq!(layer.title, "Stations");
        assert_eq!(layer.prefix, "tfl-stations-layer");
        // The overwriting declaration's default_enabled flag wins too.
        assert!(!sw.is_visible("stations"));
    }

    #[test]
    fn equal_prefixes_produce_identical_writes() {
        // Two distinct layers sharing a prefix: the physical layer is
        // governed by whichever entry is last in index order, so toggling
        // the other one never changes what gets written.
        let mut tree = LayerTree::new();
        tree.push_layer(Layer::new("l1", "First", "shared-", true));
        tree.push_layer(Layer::new("l2", "Second", "shared-", true));

        let mut sw = VisibilitySwitcher::new(tree, "Layers");
        let probe = Probe::loaded_with(&["shared-line"]);
        sw.attach(probe.clone());

        probe.writes.borrow_mut().clear();
        sw.toggle("l1", false);
        assert_eq!(
            probe.last_write("shared-line"),
            Some(Visibility::Visible),
            "l2 governs the physical layer and is still visible"
        );

        probe.writes.borrow_mut().clear();
        sw.toggle("l2", false);
        assert_eq!(probe.last_write("shared-line"), Some(Visibility::None));
    }

    #[test]
    fn live_reconcile_writes_explicitly_in_both_directions() {
        let mut sw = VisibilitySwitcher::new(transit_tree(), "Layers");
        let probe = Probe::loaded_with(&[
            "central-line-layer",
            "dlr-route-layer",
            "station-labels-en",
        ]);
        sw.attach(probe.clone());

        // Every matched physical layer got an explicit value.
        assert_eq!(probe.last_write("central-line-layer"), Some(Visibility::Visible));
        assert_eq!(probe.last_write("dlr-route-layer"), Some(Visibility::Visible));
        assert_eq!(probe.last_write("station-labels-en"), Some(Visibility::None));
    }

    #[test]
    fn prefix_match_is_a_true_prefix() {
        let mut tree = LayerTree::new();
        tree.push_group(LayerGroup::new(
            "Transport",
            vec![Layer::new("tube-central", "Central Line", "central-line-layer", true)],
        ));
        let mut sw = VisibilitySwitcher::new(tree, "Layers");

        assert!(sw.governing_layer("central-line-layer").is_some());
        assert!(sw.governing_layer("central-line-layer-casing").is_some());
        assert!(
            sw.governing_layer("foo-central-line-layer").is_none(),
            "an id merely containing the prefix is not governed"
        );

        let probe = Probe::loaded_with(&["central-line-layer", "foo-central-line-layer"]);
        sw.attach(probe.clone());
        assert_eq!(probe.last_write("central-line-layer"), Some(Visibility::Visible));
        assert_eq!(probe.last_write("foo-central-line-layer"), None);
    }

    #[test]
    fn unmatched_physical_layers_are_untouched() {
        let mut sw = VisibilitySwitcher::new(transit_tree(), "Layers");
        let probe = Probe::loaded_with(&["background", "water", "central-line-layer"]);
        sw.attach(probe.clone());

        let writes = probe.writes.borrow();
        let touched: Vec<&str> = writes.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(touched, ["central-line-layer"]);
    }

    #[test]
    fn attach_before_load_defers_until_style_loaded() {
        let mut sw = VisibilitySwitcher::new(transit_tree(), "Layers");
        let probe = Probe::default();
        *probe.layer_order.borrow_mut() = vec!["central-line-layer".to_string()];

        sw.attach(probe.clone());
        assert!(probe.writes().is_empty(), "no writes before load");

        sw.toggle("tube-central", false);
        assert!(probe.writes().is_empty(), "toggles before load stay deferred");

        probe.loaded.set(true);
        sw.style_loaded();
        assert_eq!(
            probe.last_write("central-line-layer"),
            Some(Visibility::None),
            "deferred state applies on load"
        );

        // The notification is one-shot; a stray second delivery is a no-op.
        probe.writes.borrow_mut().clear();
        sw.style_loaded();
        assert!(probe.writes().is_empty());
    }

    #[test]
    fn style_loaded_after_detach_is_a_noop() {
        let mut sw = VisibilitySwitcher::new(transit_tree(), "Layers");
        let probe = Probe::default();
        sw.attach(probe.clone());
        let _ = sw.detach();
        sw.style_loaded();
        assert!(probe.writes().is_empty());
    }

    #[test]
    fn detached_toggles_accumulate_and_replay_on_reattach() {
        let mut sw = VisibilitySwitcher::new(transit_tree(), "Layers");
        let probe = Probe::loaded_with(&["central-line-layer", "dlr-route-layer"]);
        sw.attach(probe.clone());

        let detached = sw.detach();
        assert!(detached.is_some());
        assert!(sw.detach().is_none(), "detach is safe when not attached");

        sw.toggle("tube-central", false);
        sw.toggle("dlr", false);
        sw.toggle("dlr", true);
        assert!(!sw.is_visible("tube-central"));
        assert!(sw.is_visible("dlr"));

        probe.writes.borrow_mut().clear();
        sw.attach(probe.clone());
        assert_eq!(probe.last_write("central-line-layer"), Some(Visibility::None));
        assert_eq!(probe.last_write("dlr-route-layer"), Some(Visibility::Visible));
    }

    #[test]
    fn reconcile_while_detached_is_a_noop() {
        let mut sw: VisibilitySwitcher<Probe> = VisibilitySwitcher::new(transit_tree(), "Layers");
        sw.reconcile_surface();
        sw.toggle("dlr", false);
        assert!(!sw.is_visible("dlr"));
    }

    #[test]
    fn reset_to_default_restores_frozen_snapshot() {
        let mut sw = VisibilitySwitcher::new(transit_tree(), "Layers");
        let probe = Probe::loaded_with(&["station-labels-en", "dlr-route-layer"]);
        sw.attach(probe.clone());

        sw.toggle("station-labels", true);
        sw.toggle("dlr", false);
        assert!(sw.is_visible("station-labels"));

        probe.writes.borrow_mut().clear();
        sw.reset_to_default();
        assert!(!sw.is_visible("station-labels"));
        assert!(sw.is_visible("dlr"));
        assert_eq!(probe.last_write("station-labels-en"), Some(Visibility::None));
        assert_eq!(probe.last_write("dlr-route-layer"), Some(Visibility::Visible));
    }

    #[test]
    fn preload_never_writes_visible() {
        let mut sw: VisibilitySwitcher<Probe> = VisibilitySwitcher::new(transit_tree(), "Layers");

        let mut doc = StyleDocument::default();
        doc.layers.push(StyleLayer::with_id("central-line-layer"));
        doc.layers.push(StyleLayer::with_id("station-labels-en"));
        doc.layers.push(StyleLayer::with_id("background"));

        sw.apply_to_style(&mut doc);

        // Visible layer: flag stays absent.
        assert_eq!(doc.layers[0].visibility(), None);
        // Hidden layer: explicit none, layout created on demand.
        assert_eq!(doc.layers[1].visibility(), Some(Visibility::None));
        // Unmatched layer: untouched.
        assert_eq!(doc.layers[2].visibility(), None);
        assert!(doc.layers[2].layout.is_none());
    }

    #[test]
    fn preload_then_live_agree_on_hidden_layer() {
        let mut sw = VisibilitySwitcher::new(transit_tree(), "Layers");

        let mut doc = StyleDocument::default();
        doc.layers.push(StyleLayer::with_id("station-labels-en"));
        sw.apply_to_style(&mut doc);
        assert_eq!(doc.layers[0].visibility(), Some(Visibility::None));

        let probe = Probe::loaded_with(&["station-labels-en"]);
        sw.attach(probe.clone());
        assert_eq!(probe.last_write("station-labels-en"), Some(Visibility::None));
    }

    #[test]
    fn widget_projection_roundtrips_with_toggles() {
        let mut sw: VisibilitySwitcher<Probe> = VisibilitySwitcher::new(transit_tree(), "Layers");

        let checked_of = |sw: &VisibilitySwitcher<Probe>, id: &str| -> bool {
            sw.widget_items().iter().any(|item| {
                matches!(
                    item,
                    WidgetItem::Row { layer_id, checked: true, .. } if layer_id == id
                )
            })
        };

        assert!(checked_of(&sw, "tube-central"));
        assert!(!checked_of(&sw, "station-labels"));

        sw.toggle("tube-central", false);
        sw.toggle("station-labels", true);

        assert!(!checked_of(&sw, "tube-central"));
        assert!(checked_of(&sw, "station-labels"));
    }

    #[test]
    fn visible_set_membership_semantics() {
        let mut set = VisibleSet::new();
        assert!(set.is_empty());
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
        assert!(set.contains("a"));
        assert_eq!(set.len(), 1);
        assert!(set.remove("a"));
        assert!(!set.remove("a"));
        assert!(set.is_empty());
    }
}
