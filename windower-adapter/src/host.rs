use windower::Rect;

/// Handle of a scroll/resize subscription, returned by [`ScrollSource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptionId(pub u64);

/// The scroll container the list lives in: either the list's own scrollable region or an
/// external one supplied by the host.
///
/// While subscribed, the host forwards scroll and resize notifications to
/// [`crate::Controller::on_scroll`] / [`crate::Controller::on_resize`].
pub trait ScrollSource {
    fn subscribe(&mut self) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId);

    fn scroll_offset(&self) -> f64;

    fn set_scroll_offset(&mut self, offset: f64);

    /// Visible box of the list.
    fn viewport(&self) -> Rect;

    /// Distance from the scroll container's origin to the first item, when the list is nested
    /// inside a larger scroll container.
    fn leading_offset(&self) -> f64 {
        0.0
    }
}

/// Frame synchronization primitive of the host (e.g. `requestAnimationFrame`).
///
/// After `request_frame`, the host must call [`crate::Controller::on_frame`] once before its
/// next paint. The controller never requests a second frame while one is pending.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}
