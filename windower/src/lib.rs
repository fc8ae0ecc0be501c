//! A headless viewport windowing engine.
//!
//! For the stateful controller (startup loop, frame-coalesced refresh, change events), see the
//! `windower-adapter` crate.
//!
//! Given a full item collection, per-item sizes, the current scroll offset and the viewport
//! geometry, this crate computes the contiguous index range `[start, end)` that must be
//! materialized, plus the leading padding that keeps the scrollbar consistent with a fully
//! rendered list.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size and scroll offset
//! - item sizes (a function, a fixed size, or measured rendered children via [`LayoutProbe`])
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod accumulator;
mod calculator;
mod fault;
mod options;
mod prober;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use accumulator::SizeAccumulator;
pub use calculator::{RangeInput, compute_window, resolve_items_per_row};
pub use fault::WindowFault;
pub use options::{ItemSizeFn, WindowerOptions};
pub use prober::{
    LayoutProbe, MIN_ITEM_HEIGHT, NoChildren, count_items_per_row, probe_geometry, row_estimate,
};
pub use state::{Phase, ScrollState};
pub use types::{ChangeEvent, ChildBox, Rect, ViewportGeometry, Window, WindowRange};
