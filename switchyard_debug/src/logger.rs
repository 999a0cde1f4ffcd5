// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace forwarding to the [`log`] facade.
//!
//! [`LogSink`] maps switcher events onto log levels: duplicate-id and
//! unknown-toggle conditions are warnings, reconciliation summaries are
//! debug, individual visibility writes are trace. Useful when an
//! application already routes `log` output somewhere (env_logger, the
//! browser console, a file).

use switchyard_core::surface::Visibility;
use switchyard_core::trace::{ReconcileEvent, ReconcilePath, ToggleEvent, TraceSink};

/// Forwards switcher events to the [`log`] facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn on_duplicate_id(&mut self, id: &str) {
        log::warn!("duplicate layer id {id:?}, last declaration wins");
    }

    fn on_toggle(&mut self, e: &ToggleEvent<'_>) {
        if e.known {
            log::debug!("toggle {}={}", e.layer_id, if e.visible { "on" } else { "off" });
        } else {
            log::warn!("toggle for unknown layer id {:?} (recorded, no effect)", e.layer_id);
        }
    }

    fn on_reconcile(&mut self, e: &ReconcileEvent) {
        let path = match e.path {
            ReconcilePath::PreLoad => "pre-load",
            ReconcilePath::Live => "live",
        };
        log::debug!("reconcile path={path} writes={} skipped={}", e.writes, e.skipped);
    }

    fn on_visibility_write(&mut self, physical_id: &str, visibility: Visibility) {
        log::trace!("set {physical_id} -> {}", visibility.as_str());
    }
}
