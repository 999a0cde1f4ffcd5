// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics sinks and formatters for switchyard development.
//!
//! This crate provides [`TraceSink`](switchyard_core::trace::TraceSink)
//! implementations for development use:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`logger::LogSink`] — forwards events to the [`log`] facade.
//!
//! plus [`pretty::format_layer_tree`] for dumping a configuration as an
//! indented listing.

pub mod logger;
pub mod pretty;
