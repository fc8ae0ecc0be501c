use windower::{
    ChangeEvent, LayoutProbe, Phase, RangeInput, ScrollState, SizeAccumulator, ViewportGeometry,
    Window, WindowRange, WindowerOptions, compute_window, probe_geometry, resolve_items_per_row,
};

use crate::{
    FrameScheduler, InputChanges, ScrollSource, SubscriptionId, WindowEvent, WindowListener,
};

/// A framework-neutral window controller.
///
/// It owns the item collection and the previous-range state, and drives the windowing math
/// against three host collaborators:
/// - a [`ScrollSource`] (scroll offset, viewport box, scroll/resize subscription)
/// - a [`LayoutProbe`] (rendered children, used when item sizes are not configured)
/// - a [`FrameScheduler`] (one deferred pass per frame)
///
/// Adapters drive it by calling:
/// - `on_create` once, `on_inputs_changed` on input updates and `on_destroy` on teardown
/// - `on_scroll` / `on_resize` when the subscribed source reports events
/// - `on_frame(listener)` when the scheduled frame fires
///
/// Any number of triggers before a frame collapse into a single pass.
pub struct Controller<T, S, P, F>
where
    S: ScrollSource,
{
    items: Vec<T>,
    options: WindowerOptions<T>,
    source: S,
    probe: P,
    scheduler: F,
    state: ScrollState,
    window: Window,
    subscription: Option<SubscriptionId>,
    pending: bool,
    destroyed: bool,
}

impl<T, S, P, F> Controller<T, S, P, F>
where
    S: ScrollSource,
    P: LayoutProbe,
    F: FrameScheduler,
{
    /// Creates a controller in the startup phase. Nothing is subscribed or scheduled until
    /// [`Self::on_create`].
    pub fn new(
        items: Vec<T>,
        options: WindowerOptions<T>,
        source: S,
        probe: P,
        scheduler: F,
    ) -> Self {
        Self {
            items,
            options,
            source,
            probe,
            scheduler,
            state: ScrollState::new(),
            window: Window::empty(),
            subscription: None,
            pending: false,
            destroyed: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn options(&self) -> &WindowerOptions<T> {
        &self.options
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The window computed by the last pass.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The range last reported through `Update`, `None` before the first one or when there is
    /// nothing to render.
    pub fn range(&self) -> Option<WindowRange> {
        self.state.previous
    }

    /// Leading spacer size for the host renderer.
    pub fn top_padding(&self) -> f64 {
        self.window.top_padding
    }

    /// Scroll track length for the host renderer.
    pub fn scroll_height(&self) -> f64 {
        self.window.scroll_height
    }

    /// The currently materialized items.
    pub fn viewport_items(&self) -> &[T] {
        match self.state.previous {
            Some(r) => self.items.get(r.start..r.end).unwrap_or(&[]),
            None => &[],
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn probe_mut(&mut self) -> &mut P {
        &mut self.probe
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    /// Subscribes to the scroll source and schedules the first pass.
    pub fn on_create(&mut self) {
        if self.destroyed {
            return;
        }
        if self.subscription.is_none() {
            self.subscription = Some(self.source.subscribe());
        }
        wdebug!(count = self.items.len(), "Controller::on_create");
        self.refresh();
    }

    /// Applies input changes.
    ///
    /// Any change forgets the previous range, so the next pass reports its window again. A new
    /// collection replacing an empty one re-enters the startup phase.
    pub fn on_inputs_changed(&mut self, changes: InputChanges<T>) {
        if self.destroyed || changes.is_empty() {
            return;
        }
        let was_empty = self.items.is_empty();
        if let Some(items) = changes.apply_to(&mut self.options) {
            let fresh = was_empty && !items.is_empty();
            self.items = items;
            if fresh {
                wdebug!(count = self.items.len(), "fresh list, restarting startup loop");
                self.state.restart();
            }
        }
        self.state.clear_range();
        self.refresh();
    }

    pub fn on_scroll(&mut self) {
        self.refresh();
    }

    pub fn on_resize(&mut self) {
        self.refresh();
    }

    /// Requests a pass on the next frame. Requests made while one is pending are absorbed.
    pub fn refresh(&mut self) {
        if self.destroyed || self.pending {
            return;
        }
        self.pending = true;
        wtrace!("request_frame");
        self.scheduler.request_frame();
    }

    /// Runs the pending pass, if any, and reports its notifications to `listener`.
    ///
    /// Returns `true` when a pass ran. Frames delivered after teardown are ignored.
    pub fn on_frame(&mut self, listener: &mut impl WindowListener<T>) -> bool {
        if self.destroyed || !self.pending {
            return false;
        }
        self.pending = false;
        self.calculate(listener);
        true
    }

    /// Scrolls so that `item` lands at the top of the window (net of the buffer) and schedules
    /// a pass.
    ///
    /// Returns the offset written to the scroll source, or `None` if `item` is not part of the
    /// collection, in which case nothing happens.
    pub fn scroll_into_view(&mut self, item: &T) -> Option<f64>
    where
        T: PartialEq,
    {
        if self.destroyed {
            return None;
        }
        let Some(index) = self.items.iter().position(|it| it == item) else {
            wwarn!(fault = %windower::WindowFault::ItemNotFound, "scroll_into_view");
            return None;
        };

        let geometry = self.measure();
        let measured_height = geometry.item_height;
        let options = &self.options;
        let sizes = SizeAccumulator::new(&self.items, |it: &T| {
            options.item_size_of(it, measured_height)
        });
        let items_per_row = resolve_items_per_row(
            &geometry,
            sizes.items_filling(geometry.viewport_height),
            self.source.scroll_offset(),
            sizes.len(),
            self.previous_scroll_height(),
        );
        let offset = (sizes.sum_up_to(index / items_per_row)
            - sizes.sum_up_to(index.min(options.buffer_amount)))
        .max(0.0);

        wtrace!(index, offset, "scroll_into_view");
        self.source.set_scroll_offset(offset);
        self.refresh();
        Some(offset)
    }

    /// Swaps the scroll container, moving the subscription over to the new one.
    ///
    /// Returns the previous source.
    pub fn replace_scroll_source(&mut self, source: S) -> S {
        let mut old = core::mem::replace(&mut self.source, source);
        if let Some(id) = self.subscription.take() {
            old.unsubscribe(id);
            self.subscription = Some(self.source.subscribe());
        }
        wdebug!("Controller::replace_scroll_source");
        self.refresh();
        old
    }

    /// Releases the subscription. Afterwards every trigger and pending frame is a no-op.
    pub fn on_destroy(&mut self) {
        self.teardown();
    }

    fn measure(&self) -> ViewportGeometry {
        probe_geometry(
            self.source.viewport(),
            self.options.item_width,
            self.options.item_height,
            &self.probe,
        )
    }

    fn previous_scroll_height(&self) -> Option<f64> {
        self.window.range.map(|_| self.window.scroll_height)
    }

    fn calculate(&mut self, listener: &mut impl WindowListener<T>) {
        let geometry = self.measure();
        let measured_height = geometry.item_height;
        let options = &self.options;
        let sizes = SizeAccumulator::new(&self.items, |it: &T| {
            options.item_size_of(it, measured_height)
        });
        let input = RangeInput::new(self.source.scroll_offset(), geometry)
            .with_leading_offset(self.source.leading_offset())
            .with_buffer_amount(options.buffer_amount)
            .with_previous_scroll_height(self.previous_scroll_height());
        let window = compute_window(&sizes, &input);

        if window.fault.is_some() {
            wwarn!(fault = ?window.fault, "window pass degraded");
        }
        if let Some(offset) = window.scroll_correction {
            self.source.set_scroll_offset(offset);
        }
        self.window = window;
        self.apply(window.range, listener);
    }

    fn apply(&mut self, range: Option<WindowRange>, listener: &mut impl WindowListener<T>) {
        let prev = ChangeEvent::from_range(self.state.previous);
        if !self.state.record(range) {
            if self.state.is_startup() {
                wdebug!(?range, "startup loop settled");
                self.state.phase = Phase::Stable;
                self.refresh();
            }
            return;
        }

        listener.on_event(WindowEvent::Update(self.viewport_items()));
        if self.state.is_startup() {
            self.refresh();
            return;
        }

        let next = ChangeEvent::from_range(range);
        if next.start != prev.start {
            listener.on_event(WindowEvent::Start(next));
        }
        if next.end != prev.end {
            listener.on_event(WindowEvent::End(next));
        }
        listener.on_event(WindowEvent::Change(next));
    }
}

impl<T, S, P, F> Controller<T, S, P, F>
where
    S: ScrollSource,
{
    fn teardown(&mut self) {
        if self.destroyed {
            return;
        }
        if let Some(id) = self.subscription.take() {
            self.source.unsubscribe(id);
        }
        self.destroyed = true;
        self.pending = false;
        wdebug!("Controller teardown");
    }
}

impl<T, S, P, F> Drop for Controller<T, S, P, F>
where
    S: ScrollSource,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T, S, P, F> core::fmt::Debug for Controller<T, S, P, F>
where
    S: ScrollSource,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("count", &self.items.len())
            .field("options", &self.options)
            .field("state", &self.state)
            .field("window", &self.window)
            .field("subscription", &self.subscription)
            .field("pending", &self.pending)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
