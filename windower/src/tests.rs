use crate::*;

use proptest::prelude::*;

fn uniform(count: usize, size: f64) -> Vec<f64> {
    vec![size; count]
}

fn px(size: &f64) -> f64 {
    *size
}

fn column(viewport_height: f64) -> ViewportGeometry {
    ViewportGeometry {
        viewport_width: 100.0,
        viewport_height,
        item_width: 100.0,
        item_height: 20.0,
        items_per_row: 1,
        items_per_row_by_calc: 1,
    }
}

fn window_for(items: &[f64], scroll_offset: f64, viewport_height: f64, buffer: usize) -> Window {
    let sizes = SizeAccumulator::new(items, px);
    let input = RangeInput::new(scroll_offset, column(viewport_height)).with_buffer_amount(buffer);
    compute_window(&sizes, &input)
}

fn child(offset: f64, width: f64, height: f64) -> ChildBox {
    ChildBox {
        offset,
        width,
        height,
    }
}

#[test]
fn sum_up_to_counts_leading_items() {
    let items = [10.0, 20.0, 30.0];
    let sizes = SizeAccumulator::new(&items, px);
    assert_eq!(sizes.sum_up_to(0), 0.0);
    assert_eq!(sizes.sum_up_to(2), 30.0);
    assert_eq!(sizes.total(), 60.0);
}

#[test]
fn walk_stops_on_exact_boundary() {
    let items = uniform(10, 20.0);
    let sizes = SizeAccumulator::new(&items, px);
    // 20 + 20 == 40 stops the walk; a strict comparison would take a third item.
    assert_eq!(sizes.walk_until(0, 40.0), 2);
    assert_eq!(sizes.walk_until(0, 41.0), 3);
    assert_eq!(sizes.walk_until(0, 0.0), 0);
    assert_eq!(sizes.walk_until(8, 1000.0), 10);
}

#[test]
fn items_filling_is_at_least_one() {
    let items = uniform(10, 20.0);
    let sizes = SizeAccumulator::new(&items, px);
    assert_eq!(sizes.items_filling(100.0), 5);
    assert_eq!(sizes.items_filling(5.0), 1);

    let tall = [500.0, 500.0];
    let sizes = SizeAccumulator::new(&tall, px);
    assert_eq!(sizes.items_filling(100.0), 1);
}

#[test]
fn rows_are_counted_from_shared_offsets() {
    let children = vec![
        child(0.0, 50.0, 20.0),
        child(0.0, 50.0, 20.0),
        child(0.0, 50.0, 20.0),
        child(20.0, 50.0, 20.0),
        child(20.0, 50.0, 20.0),
    ];
    assert_eq!(count_items_per_row(&children), 3);
    assert_eq!(count_items_per_row(&NoChildren), 0);
}

#[test]
fn probe_measures_first_child_when_footprint_is_missing() {
    let children = vec![child(0.0, 40.0, 25.0), child(0.0, 40.0, 25.0)];
    let g = probe_geometry(Rect::new(200.0, 300.0), None, None, &children);
    assert_eq!(g.item_width, 40.0);
    assert_eq!(g.item_height, 25.0);
    assert_eq!(g.items_per_row, 2);
    assert_eq!(g.items_per_row_by_calc, 5);
}

#[test]
fn probe_prefers_explicit_footprint() {
    let children = vec![child(0.0, 40.0, 25.0)];
    let g = probe_geometry(Rect::new(200.0, 300.0), Some(100.0), Some(30.0), &children);
    assert_eq!(g.item_width, 100.0);
    assert_eq!(g.item_height, 30.0);
    assert_eq!(g.items_per_row_by_calc, 2);
}

#[test]
fn probe_falls_back_to_viewport_without_children() {
    let g = probe_geometry(Rect::new(200.0, 300.0), None, None, &NoChildren);
    assert_eq!(g.item_width, 200.0);
    assert_eq!(g.item_height, 300.0);
    assert_eq!(g.items_per_row, 1);
    assert_eq!(g.items_per_row_by_calc, 1);
}

#[test]
fn unlaid_child_height_falls_back_to_minimum() {
    let children = vec![child(0.0, 0.0, 0.0)];
    let g = probe_geometry(Rect::new(100.0, 200.0), None, None, &children);
    assert_eq!(g.item_height, MIN_ITEM_HEIGHT);
    assert_eq!(g.item_width, 0.0);
    assert_eq!(g.items_per_row_by_calc, 1);
}

#[test]
fn probe_never_returns_non_finite_numbers() {
    let g = probe_geometry(Rect::new(f64::NAN, f64::INFINITY), None, None, &NoChildren);
    assert_eq!(g.viewport_width, 0.0);
    assert_eq!(g.viewport_height, 0.0);
    assert_eq!(g.item_height, MIN_ITEM_HEIGHT);
    assert_eq!(g.items_per_row, 1);
    assert_eq!(g.items_per_row_by_calc, 1);

    assert_eq!(row_estimate(0.0, 0.0), 1);
    assert_eq!(row_estimate(10.0, 100.0), 1);
    assert_eq!(row_estimate(250.0, 100.0), 2);
}

#[test]
fn initial_window_fills_viewport_plus_lookahead() {
    let items = uniform(100, 20.0);
    let w = window_for(&items, 0.0, 200.0, 0);
    assert_eq!(w.range, Some(WindowRange::new(0, 11)));
    assert_eq!(w.top_padding, 0.0);
    assert_eq!(w.scroll_height, 2000.0);
    assert_eq!(w.scroll_correction, None);
}

#[test]
fn scrolled_window_keeps_one_leading_item() {
    let items = uniform(100, 20.0);
    let w = window_for(&items, 500.0, 200.0, 0);
    assert_eq!(w.range, Some(WindowRange::new(24, 36)));
    assert_eq!(w.top_padding, 480.0);
}

#[test]
fn buffer_widens_window_and_shrinks_padding() {
    let items = uniform(100, 20.0);
    let w = window_for(&items, 500.0, 200.0, 3);
    assert_eq!(w.range, Some(WindowRange::new(21, 39)));
    assert_eq!(w.top_padding, 420.0);

    let w = window_for(&items, 0.0, 200.0, 3);
    assert_eq!(w.range, Some(WindowRange::new(0, 14)));
}

#[test]
fn empty_collection_has_no_window() {
    let w = window_for(&[], 0.0, 200.0, 0);
    assert_eq!(w.range, None);
    assert_eq!(w.bounds(), (-1, -1));
    assert_eq!(w.fault, None);
}

#[test]
fn non_finite_input_degrades_to_sentinel() {
    let items = uniform(10, 20.0);
    let w = window_for(&items, f64::NAN, 200.0, 0);
    assert_eq!(w.bounds(), (-1, -1));
    assert_eq!(w.fault, Some(WindowFault::MeasurementUnavailable));

    let broken = [20.0, f64::NAN];
    let w = window_for(&broken, 0.0, 200.0, 0);
    assert_eq!(w.range, None);
    assert_eq!(w.fault, Some(WindowFault::MeasurementUnavailable));
}

#[test]
fn items_without_extent_have_no_window() {
    let w = window_for(&uniform(50, 0.0), 0.0, 200.0, 0);
    assert_eq!(w.range, None);
    assert_eq!(w.scroll_correction, None);
    assert_eq!(w.fault, Some(WindowFault::MeasurementUnavailable));
}

#[test]
fn negative_sizes_from_the_size_function_count_as_zero() {
    let opts = WindowerOptions::<f64>::new().with_item_size(|s: &f64| -*s);
    assert_eq!(opts.item_size_of(&20.0, 25.0), 0.0);
    let opts = opts.with_item_size(|_: &f64| f64::NAN);
    assert_eq!(opts.item_size_of(&20.0, 25.0), 0.0);

    let items = uniform(1000, 20.0);
    let negative = WindowerOptions::<f64>::new().with_item_size(|_: &f64| -20.0);
    let sizes = SizeAccumulator::new(&items, |it: &f64| negative.item_size_of(it, 20.0));
    let w = compute_window(&sizes, &RangeInput::new(0.0, column(200.0)));
    assert_eq!(w.range, None);
    assert_eq!(w.scroll_correction, None);
    assert_eq!(w.fault, Some(WindowFault::MeasurementUnavailable));
}

#[test]
fn overshooting_offset_requests_correction() {
    let items = uniform(10, 20.0);
    let w = window_for(&items, 500.0, 100.0, 0);
    assert_eq!(w.scroll_correction, Some(200.0));
    assert_eq!(w.range, Some(WindowRange::new(9, 10)));

    let sizes = SizeAccumulator::new(&items, px);
    let input = RangeInput::new(500.0, column(100.0)).with_leading_offset(30.0);
    let w = compute_window(&sizes, &input);
    assert_eq!(w.scroll_correction, Some(230.0));
}

#[test]
fn leading_offset_is_subtracted_from_scroll() {
    let items = uniform(100, 20.0);
    let sizes = SizeAccumulator::new(&items, px);
    let input = RangeInput::new(100.0, column(200.0)).with_leading_offset(40.0);
    let w = compute_window(&sizes, &input);
    // 60px into the list: three items consumed, one kept as lookahead.
    assert_eq!(w.range.map(|r| r.start), Some(2));
}

#[test]
fn multi_column_track_divides_total_by_row_count() {
    let items = uniform(100, 20.0);
    let sizes = SizeAccumulator::new(&items, px);
    let geometry = ViewportGeometry {
        items_per_row: 4,
        items_per_row_by_calc: 4,
        ..column(200.0)
    };
    let w = compute_window(&sizes, &RangeInput::new(0.0, geometry));
    assert_eq!(w.scroll_height, 500.0);
    assert_eq!(w.items_per_row, 4);
}

#[test]
fn row_estimate_wins_near_the_end_of_the_track() {
    let geometry = ViewportGeometry {
        items_per_row: 1,
        items_per_row_by_calc: 4,
        ..column(200.0)
    };
    assert_eq!(resolve_items_per_row(&geometry, 1, 990.0, 100, Some(1000.0)), 4);
    assert_eq!(resolve_items_per_row(&geometry, 1, 0.0, 100, Some(1000.0)), 1);
    assert_eq!(resolve_items_per_row(&geometry, 2, 990.0, 100, Some(1000.0)), 1);
    assert_eq!(resolve_items_per_row(&geometry, 1, 990.0, 100, None), 1);
    assert_eq!(resolve_items_per_row(&geometry, 1, 990.0, 100, Some(0.0)), 1);
}

#[test]
fn change_event_round_trips_the_sentinel() {
    assert_eq!(ChangeEvent::from_range(None), ChangeEvent::NO_WINDOW);
    assert_eq!(ChangeEvent::NO_WINDOW.range(), None);
    let ev = ChangeEvent::from(Some(WindowRange::new(3, 9)));
    assert_eq!((ev.start, ev.end), (3, 9));
    assert_eq!(ev.range(), Some(WindowRange::new(3, 9)));
}

#[test]
fn scroll_state_records_only_changes() {
    let mut state = ScrollState::new();
    assert!(state.is_startup());
    assert!(state.record(Some(WindowRange::new(0, 5))));
    assert!(!state.record(Some(WindowRange::new(0, 5))));
    state.clear_range();
    assert!(state.record(Some(WindowRange::new(0, 5))));

    state.phase = Phase::Stable;
    state.restart();
    assert!(state.is_startup());
    assert_eq!(state.previous, None);
}

#[test]
fn options_clamp_invalid_configuration() {
    let opts = WindowerOptions::<f64>::new()
        .with_item_height(-3.0)
        .with_item_width(f64::NAN)
        .with_buffer_amount_signed(-4);
    assert_eq!(opts.item_height, None);
    assert_eq!(opts.item_width, None);
    assert_eq!(opts.buffer_amount, 0);
    assert!(!opts.has_explicit_footprint());

    // Falls back to the measured height when neither a size function nor a height is set.
    assert_eq!(opts.item_size_of(&7.0, 25.0), 25.0);
    let opts = opts.with_item_height(30.0);
    assert_eq!(opts.item_size_of(&7.0, 25.0), 30.0);
    let opts = opts.with_item_size(|s: &f64| *s * 2.0);
    assert_eq!(opts.item_size_of(&7.0, 25.0), 14.0);
}

fn sizes_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..50.0, 1..200)
}

proptest! {
    #[test]
    fn prop_window_stays_in_bounds(
        items in sizes_strategy(),
        offset in 0.0f64..20_000.0,
        viewport in 0.0f64..600.0,
        buffer in 0usize..12,
    ) {
        let w = window_for(&items, offset, viewport, buffer);
        let r = w.range.expect("non-empty collection has a window");
        prop_assert!(r.start <= r.end);
        prop_assert!(r.end <= items.len());
        prop_assert!(w.top_padding >= 0.0);
    }

    #[test]
    fn prop_start_is_monotonic_in_offset(
        items in sizes_strategy(),
        a in 0.0f64..20_000.0,
        b in 0.0f64..20_000.0,
        viewport in 1.0f64..600.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let low = window_for(&items, lo, viewport, 0).range.expect("window");
        let high = window_for(&items, hi, viewport, 0).range.expect("window");
        prop_assert!(low.start <= high.start);
    }

    #[test]
    fn prop_buffered_window_covers_unbuffered(
        items in sizes_strategy(),
        offset in 0.0f64..20_000.0,
        viewport in 1.0f64..600.0,
        buffer in 1usize..12,
    ) {
        let plain = window_for(&items, offset, viewport, 0).range.expect("window");
        let buffered = window_for(&items, offset, viewport, buffer).range.expect("window");
        prop_assert!(buffered.covers(&plain));
    }

    #[test]
    fn prop_compute_is_idempotent(
        items in sizes_strategy(),
        offset in 0.0f64..20_000.0,
        viewport in 1.0f64..600.0,
        buffer in 0usize..12,
    ) {
        let first = window_for(&items, offset, viewport, buffer);
        let second = window_for(&items, offset, viewport, buffer);
        prop_assert_eq!(first, second);
    }
}
