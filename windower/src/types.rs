use crate::WindowFault;

/// A width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Layout box of one rendered child, as reported by a [`crate::LayoutProbe`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildBox {
    /// Layout offset along the scroll axis (e.g. `offsetTop`). Children sharing it form a row.
    pub offset: f64,
    pub width: f64,
    pub height: f64,
}

/// The index range `[start, end)` of items that must be materialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl WindowRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Whether `other` lies entirely inside this range.
    pub fn covers(&self, other: &WindowRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Payload of the `change`/`start`/`end` notifications.
///
/// A window that could not be computed is reported as `{ start: -1, end: -1 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeEvent {
    pub start: isize,
    pub end: isize,
}

impl ChangeEvent {
    pub const NO_WINDOW: Self = Self { start: -1, end: -1 };

    pub fn from_range(range: Option<WindowRange>) -> Self {
        match range {
            Some(r) => Self {
                start: r.start as isize,
                end: r.end as isize,
            },
            None => Self::NO_WINDOW,
        }
    }

    /// Back to a typed range; `None` for the sentinel.
    pub fn range(&self) -> Option<WindowRange> {
        if self.start < 0 || self.end < 0 {
            return None;
        }
        Some(WindowRange::new(self.start as usize, self.end as usize))
    }
}

impl From<Option<WindowRange>> for ChangeEvent {
    fn from(range: Option<WindowRange>) -> Self {
        Self::from_range(range)
    }
}

/// Geometry derived for one computation pass. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportGeometry {
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Per-item footprint (explicit, measured from the first child, or the viewport).
    pub item_width: f64,
    pub item_height: f64,
    /// Items sharing one visual row, counted from rendered children. Always `>= 1`.
    pub items_per_row: usize,
    /// `max(1, floor(viewport_width / item_width))`. Always `>= 1`.
    pub items_per_row_by_calc: usize,
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self {
            viewport_width: 0.0,
            viewport_height: 0.0,
            item_width: 0.0,
            item_height: 0.0,
            items_per_row: 1,
            items_per_row_by_calc: 1,
        }
    }
}

/// The result of one Range Calculator pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    /// `None` when no renderable window exists (empty collection or unusable geometry).
    pub range: Option<WindowRange>,
    /// Leading spacer size compensating for skipped items above the window.
    pub top_padding: f64,
    /// Approximate length of the whole scroll track (`total_size / items_per_row`).
    pub scroll_height: f64,
    /// Row count actually used for this pass.
    pub items_per_row: usize,
    /// Set when the scroll offset overshot the track; the host should scroll here.
    pub scroll_correction: Option<f64>,
    pub fault: Option<WindowFault>,
}

impl Window {
    /// No window, nothing to render (empty collection).
    pub fn empty() -> Self {
        Self {
            range: None,
            top_padding: 0.0,
            scroll_height: 0.0,
            items_per_row: 1,
            scroll_correction: None,
            fault: None,
        }
    }

    /// No window because of `fault`.
    pub fn unavailable(fault: WindowFault) -> Self {
        Self {
            fault: Some(fault),
            ..Self::empty()
        }
    }

    /// `(start, end)` with the `-1` sentinel for a missing window.
    pub fn bounds(&self) -> (isize, isize) {
        let ev = ChangeEvent::from_range(self.range);
        (ev.start, ev.end)
    }
}
