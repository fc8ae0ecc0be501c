use std::sync::Arc;

/// Size of one item along the scroll axis, in pixels.
///
/// Must be stable for the duration of a computation pass; it is called once per item walked.
pub type ItemSizeFn<T> = Arc<dyn Fn(&T) -> f64 + Send + Sync>;

/// Configuration for a windowed list.
///
/// Heavy fields are stored in `Arc`s, so cloning is cheap and hosts can update a single field
/// without reallocating closures.
pub struct WindowerOptions<T> {
    /// Explicit item width. When `None`, the first rendered child (or the viewport) is measured.
    pub item_width: Option<f64>,
    /// Explicit item height. Also the default item size when `item_size` is not set.
    pub item_height: Option<f64>,
    /// Optional per-item size function.
    pub item_size: Option<ItemSizeFn<T>>,
    /// Extra items rendered beyond the viewport on each side.
    pub buffer_amount: usize,
}

impl<T> WindowerOptions<T> {
    pub fn new() -> Self {
        Self {
            item_width: None,
            item_height: None,
            item_size: None,
            buffer_amount: 0,
        }
    }

    /// Sets the item width; non-finite or non-positive values leave it unset.
    pub fn with_item_width(mut self, width: f64) -> Self {
        self.item_width = sanitize_size(width);
        self
    }

    /// Sets the item height; non-finite or non-positive values leave it unset.
    pub fn with_item_height(mut self, height: f64) -> Self {
        self.item_height = sanitize_size(height);
        self
    }

    pub fn with_item_size(mut self, f: impl Fn(&T) -> f64 + Send + Sync + 'static) -> Self {
        self.item_size = Some(Arc::new(f));
        self
    }

    pub fn with_buffer_amount(mut self, buffer_amount: usize) -> Self {
        self.buffer_amount = buffer_amount;
        self
    }

    /// Same as [`Self::with_buffer_amount`], for hosts that hand over signed numbers.
    /// Negative values clamp to 0.
    pub fn with_buffer_amount_signed(mut self, buffer_amount: i64) -> Self {
        self.buffer_amount = sanitize_buffer(buffer_amount);
        self
    }

    /// Both explicit dimensions are configured, so no child needs to be measured.
    pub fn has_explicit_footprint(&self) -> bool {
        self.item_width.is_some() && self.item_height.is_some()
    }

    /// Size of `item`: the size function if set, else the configured height, else
    /// `measured_height` (the probed footprint).
    ///
    /// Negative and NaN results of the size function count as 0.
    pub fn item_size_of(&self, item: &T, measured_height: f64) -> f64 {
        match &self.item_size {
            Some(f) => f(item).max(0.0),
            None => self.item_height.unwrap_or(measured_height),
        }
    }
}

impl<T> Default for WindowerOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for WindowerOptions<T> {
    fn clone(&self) -> Self {
        Self {
            item_width: self.item_width,
            item_height: self.item_height,
            item_size: self.item_size.clone(),
            buffer_amount: self.buffer_amount,
        }
    }
}

impl<T> core::fmt::Debug for WindowerOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowerOptions")
            .field("item_width", &self.item_width)
            .field("item_height", &self.item_height)
            .field("buffer_amount", &self.buffer_amount)
            .finish_non_exhaustive()
    }
}

pub(crate) fn sanitize_size(size: f64) -> Option<f64> {
    if size.is_finite() && size > 0.0 {
        Some(size)
    } else {
        wwarn!(size, fault = %crate::WindowFault::InvalidSize, "ignoring item size");
        None
    }
}

pub(crate) fn sanitize_buffer(buffer_amount: i64) -> usize {
    if buffer_amount < 0 {
        wwarn!(
            buffer_amount,
            fault = %crate::WindowFault::InvalidBuffer,
            "clamping buffer to 0"
        );
        return 0;
    }
    usize::try_from(buffer_amount).unwrap_or(usize::MAX)
}
