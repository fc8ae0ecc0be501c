// Example: a simulated host driving a controller frame by frame.
use windower::{NoChildren, Rect, WindowerOptions};
use windower_adapter::{
    Controller, FrameScheduler, InputChanges, ScrollSource, SubscriptionId, WindowEvent,
};

struct Host {
    offset: f64,
}

impl ScrollSource for Host {
    fn subscribe(&mut self) -> SubscriptionId {
        println!("subscribe");
        SubscriptionId(1)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        println!("unsubscribe {id:?}");
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn viewport(&self) -> Rect {
        Rect::new(400.0, 300.0)
    }
}

struct Frames;

impl FrameScheduler for Frames {
    fn request_frame(&mut self) {}
}

fn main() {
    let options = WindowerOptions::new()
        .with_item_width(400.0)
        .with_item_height(30.0)
        .with_buffer_amount(2);
    let mut c = Controller::new(
        Vec::<String>::new(),
        options,
        Host { offset: 0.0 },
        NoChildren,
        Frames,
    );

    let mut listener = |event: WindowEvent<'_, String>| match event {
        WindowEvent::Update(items) => println!("update: {} items", items.len()),
        other => println!("{other:?}"),
    };

    c.on_create();
    let rows: Vec<String> = (0..500).map(|i| format!("row {i}")).collect();
    c.on_inputs_changed(InputChanges::new().with_items(rows));
    while c.on_frame(&mut listener) {}

    c.scroll_into_view(&"row 250".to_string());
    while c.on_frame(&mut listener) {}
    println!("top_padding={} scroll_height={}", c.top_padding(), c.scroll_height());

    c.on_destroy();
}
