use windower::ChangeEvent;

/// Notifications produced by a window pass.
///
/// A pass that changes the window emits `Update` first. After startup has settled it then emits
/// `Start` if the leading boundary moved, `End` if the trailing boundary moved, and `Change`.
#[derive(Debug, PartialEq)]
pub enum WindowEvent<'a, T> {
    /// The materialized items, `items[start..end]`.
    Update(&'a [T]),
    Change(ChangeEvent),
    Start(ChangeEvent),
    End(ChangeEvent),
}

/// Receiver of [`WindowEvent`]s. Implemented for any `FnMut(WindowEvent<'_, T>)`.
pub trait WindowListener<T> {
    fn on_event(&mut self, event: WindowEvent<'_, T>);
}

impl<T, F> WindowListener<T> for F
where
    F: FnMut(WindowEvent<'_, T>),
{
    fn on_event(&mut self, event: WindowEvent<'_, T>) {
        self(event);
    }
}
