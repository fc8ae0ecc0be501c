// Example: one windowing pass over a fixed-height list.
use windower::{NoChildren, RangeInput, Rect, SizeAccumulator, compute_window, probe_geometry};

fn main() {
    let items: Vec<u32> = (0..1_000_000).collect();
    let geometry = probe_geometry(Rect::new(320.0, 600.0), Some(320.0), Some(24.0), &NoChildren);
    let sizes = SizeAccumulator::new(&items, |_: &u32| 24.0);

    let input = RangeInput::new(123_456.0, geometry).with_buffer_amount(4);
    let window = compute_window(&sizes, &input);
    println!("scroll_height={}", window.scroll_height);
    println!("range={:?}", window.range);
    println!("top_padding={}", window.top_padding);
}
