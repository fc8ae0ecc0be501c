use core::fmt;

/// Conditions the windowing pipeline degrades around instead of failing.
///
/// None of these are surfaced as hard errors: a measurement glitch yields a missing window,
/// an unknown item makes `scroll_into_view` a no-op, and bad configuration is clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowFault {
    /// The geometry probe produced no usable numbers.
    MeasurementUnavailable,
    /// A scroll target is not part of the collection.
    ItemNotFound,
    /// A negative buffer amount was configured.
    InvalidBuffer,
    /// A non-finite or non-positive item size was configured.
    InvalidSize,
}

impl fmt::Display for WindowFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MeasurementUnavailable => "viewport geometry could not be measured",
            Self::ItemNotFound => "item is not part of the collection",
            Self::InvalidBuffer => "buffer amount must not be negative",
            Self::InvalidSize => "item size must be a positive finite number",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for WindowFault {}
