use crate::{ChildBox, Rect, ViewportGeometry};

/// Item height used when nothing measurable is available, e.g. a child that has not been laid
/// out yet.
pub const MIN_ITEM_HEIGHT: f64 = 1.0;

/// Read access to the boxes of the currently rendered children.
///
/// Only consulted when the item footprint is not fully configured, and for row counting.
pub trait LayoutProbe {
    fn child_count(&self) -> usize;

    fn child_box(&self, index: usize) -> Option<ChildBox>;

    /// Box used as the per-item footprint. Hosts that wrap items in their own container can
    /// return that container's first child here.
    fn footprint_box(&self) -> Option<ChildBox> {
        self.child_box(0)
    }
}

/// A probe with nothing rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoChildren;

impl LayoutProbe for NoChildren {
    fn child_count(&self) -> usize {
        0
    }

    fn child_box(&self, _index: usize) -> Option<ChildBox> {
        None
    }
}

impl LayoutProbe for [ChildBox] {
    fn child_count(&self) -> usize {
        self.len()
    }

    fn child_box(&self, index: usize) -> Option<ChildBox> {
        self.get(index).copied()
    }
}

impl LayoutProbe for Vec<ChildBox> {
    fn child_count(&self) -> usize {
        self.len()
    }

    fn child_box(&self, index: usize) -> Option<ChildBox> {
        self.get(index).copied()
    }
}

/// Counts how many rendered children share the first child's row offset.
///
/// Returns 0 when nothing is rendered.
pub fn count_items_per_row<P: LayoutProbe + ?Sized>(probe: &P) -> usize {
    let Some(first) = probe.child_box(0) else {
        return 0;
    };
    let mut n = 1usize;
    while n < probe.child_count() {
        match probe.child_box(n) {
            Some(b) if b.offset == first.offset => n += 1,
            _ => break,
        }
    }
    n
}

/// Measures the geometry for one pass.
///
/// Every number in the result is finite and both row counts are at least 1, whatever the host
/// reports: unusable dimensions collapse to 0 and unmeasurable row counts to 1. The item height
/// is the exception: it never drops below [`MIN_ITEM_HEIGHT`].
pub fn probe_geometry<P: LayoutProbe + ?Sized>(
    viewport: Rect,
    item_width: Option<f64>,
    item_height: Option<f64>,
    probe: &P,
) -> ViewportGeometry {
    let viewport_width = finite_extent(viewport.width);
    let viewport_height = finite_extent(viewport.height);

    let measured = if item_width.is_none() || item_height.is_none() {
        probe
            .footprint_box()
            .map(|b| Rect::new(finite_extent(b.width), finite_extent(b.height)))
            .unwrap_or(Rect::new(viewport_width, viewport_height))
    } else {
        Rect::default()
    };
    let item_width = item_width.map(finite_extent).unwrap_or(measured.width);
    let mut item_height = item_height.map(finite_extent).unwrap_or(measured.height);
    if item_height <= 0.0 {
        wwarn!(
            fault = %crate::WindowFault::InvalidSize,
            fallback = MIN_ITEM_HEIGHT,
            "probe_geometry: item height not measurable"
        );
        item_height = MIN_ITEM_HEIGHT;
    }

    let items_per_row = count_items_per_row(probe).max(1);
    let items_per_row_by_calc = row_estimate(viewport_width, item_width);

    let geometry = ViewportGeometry {
        viewport_width,
        viewport_height,
        item_width,
        item_height,
        items_per_row,
        items_per_row_by_calc,
    };
    wtrace!(
        viewport_width,
        viewport_height,
        item_width,
        item_height,
        items_per_row,
        items_per_row_by_calc,
        "probe_geometry"
    );
    geometry
}

/// `max(1, floor(viewport_width / item_width))`, or 1 when the division is meaningless.
pub fn row_estimate(viewport_width: f64, item_width: f64) -> usize {
    if !viewport_width.is_finite() || !item_width.is_finite() || item_width <= 0.0 {
        return 1;
    }
    let per_row = (viewport_width / item_width).floor();
    if per_row.is_finite() && per_row >= 1.0 {
        per_row as usize
    } else {
        1
    }
}

fn finite_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
