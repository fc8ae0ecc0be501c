use crate::{SizeAccumulator, ViewportGeometry, Window, WindowFault, WindowRange};

/// Inputs of one Range Calculator pass besides the items themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeInput {
    /// Raw scroll offset of the scroll container.
    pub scroll_offset: f64,
    /// Where the list starts inside the scroll container (nested/external containers).
    pub leading_offset: f64,
    pub geometry: ViewportGeometry,
    pub buffer_amount: usize,
    /// Scroll track length from the previous pass, if any.
    pub previous_scroll_height: Option<f64>,
}

impl RangeInput {
    pub fn new(scroll_offset: f64, geometry: ViewportGeometry) -> Self {
        Self {
            scroll_offset,
            leading_offset: 0.0,
            geometry,
            buffer_amount: 0,
            previous_scroll_height: None,
        }
    }

    pub fn with_leading_offset(mut self, leading_offset: f64) -> Self {
        self.leading_offset = leading_offset;
        self
    }

    pub fn with_buffer_amount(mut self, buffer_amount: usize) -> Self {
        self.buffer_amount = buffer_amount;
        self
    }

    pub fn with_previous_scroll_height(mut self, previous_scroll_height: Option<f64>) -> Self {
        self.previous_scroll_height = previous_scroll_height;
        self
    }
}

/// Picks the row count for a pass.
///
/// The measured count is used unless a single item already overflows the viewport and the
/// scroll position is within one estimated row of the end of the track. Near the end not enough
/// children may be rendered to measure a full row, so the width-based estimate wins there.
///
/// Without a usable previous track (`None`, zero or non-finite) the position is unknown and the
/// measured count is kept. [`compute_window`] only produces windows with a positive track, so a
/// zero height never comes from a previous pass.
pub fn resolve_items_per_row(
    geometry: &ViewportGeometry,
    items_per_col: usize,
    scroll_offset: f64,
    count: usize,
    previous_scroll_height: Option<f64>,
) -> usize {
    let measured = geometry.items_per_row.max(1);
    if items_per_col != 1 {
        return measured;
    }
    let Some(prev) = previous_scroll_height.filter(|h| h.is_finite() && *h > 0.0) else {
        return measured;
    };
    let by_calc = geometry.items_per_row_by_calc.max(1);
    let scroll = scroll_offset.max(0.0);
    let position = (scroll / prev * count as f64).floor();
    if position.is_finite() && position + by_calc as f64 >= count as f64 {
        by_calc
    } else {
        measured
    }
}

/// Computes the window of items to materialize.
///
/// `scroll_height` is `total_size / items_per_row`: exact for a single column, an approximation
/// for multi-column layouts with varying item sizes. `top_padding` is derived from the same
/// approximation so the two stay consistent.
pub fn compute_window<T, F>(sizes: &SizeAccumulator<'_, T, F>, input: &RangeInput) -> Window
where
    F: Fn(&T) -> f64,
{
    let count = sizes.len();
    if count == 0 {
        return Window::empty();
    }

    let geometry = &input.geometry;
    let viewport_height = geometry.viewport_height;
    if !input.scroll_offset.is_finite()
        || !input.leading_offset.is_finite()
        || !viewport_height.is_finite()
    {
        wwarn!(
            scroll_offset = input.scroll_offset,
            viewport_height,
            "compute_window: non-finite geometry"
        );
        return Window::unavailable(WindowFault::MeasurementUnavailable);
    }

    let items_per_col = sizes.items_filling(viewport_height);
    let items_per_row = resolve_items_per_row(
        geometry,
        items_per_col,
        input.scroll_offset,
        count,
        input.previous_scroll_height,
    );

    let total = sizes.total();
    if total <= 0.0 {
        wwarn!(count, total, "compute_window: items have no extent");
        return Window::unavailable(WindowFault::MeasurementUnavailable);
    }
    let scroll_height = total / items_per_row as f64;
    if !scroll_height.is_finite() {
        wwarn!(count, items_per_row, "compute_window: item sizes are not finite");
        return Window::unavailable(WindowFault::MeasurementUnavailable);
    }

    let mut raw_offset = input.scroll_offset;
    let mut scroll_correction = None;
    if raw_offset > scroll_height {
        raw_offset = scroll_height + input.leading_offset;
        scroll_correction = Some(raw_offset);
    }
    let scroll_top = (raw_offset - input.leading_offset).max(0.0);

    let first = sizes.walk_until(0, scroll_top);
    let end = sizes.walk_until(first, viewport_height) + 1;

    // One extra leading item, so fast scrolling never exposes a blank row.
    let lead = first.checked_sub(1);
    let buffer = input.buffer_amount;
    let top_padding = match lead {
        Some(s) => sizes.sum_up_to(s.div_ceil(items_per_row)) - sizes.sum_up_to(s.min(buffer)),
        None => 0.0,
    };
    if !top_padding.is_finite() {
        return Window::unavailable(WindowFault::MeasurementUnavailable);
    }

    let start = lead.map_or(0, |s| s.saturating_sub(buffer));
    let end = end.saturating_add(buffer).min(count);
    let range = WindowRange::new(start, end);

    wtrace!(
        scroll_top,
        scroll_height,
        items_per_row,
        start,
        end,
        top_padding,
        "compute_window"
    );

    Window {
        range: Some(range),
        top_padding,
        scroll_height,
        items_per_row,
        scroll_correction,
        fault: None,
    }
}
