use std::sync::Arc;

use windower::{ItemSizeFn, WindowerOptions};

/// A set of input changes delivered to [`crate::Controller::on_inputs_changed`].
///
/// Only the fields that are `Some` are applied. For the optional inputs, `Some(None)` clears
/// the value.
pub struct InputChanges<T> {
    pub items: Option<Vec<T>>,
    pub item_width: Option<Option<f64>>,
    pub item_height: Option<Option<f64>>,
    pub item_size: Option<Option<ItemSizeFn<T>>>,
    pub buffer_amount: Option<i64>,
}

impl<T> InputChanges<T> {
    pub fn new() -> Self {
        Self {
            items: None,
            item_width: None,
            item_height: None,
            item_size: None,
            buffer_amount: None,
        }
    }

    pub fn with_items(mut self, items: Vec<T>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_item_width(mut self, width: Option<f64>) -> Self {
        self.item_width = Some(width);
        self
    }

    pub fn with_item_height(mut self, height: Option<f64>) -> Self {
        self.item_height = Some(height);
        self
    }

    pub fn with_item_size(mut self, f: impl Fn(&T) -> f64 + Send + Sync + 'static) -> Self {
        self.item_size = Some(Some(Arc::new(f)));
        self
    }

    /// Removes the size function, falling back to the item height.
    pub fn clear_item_size(mut self) -> Self {
        self.item_size = Some(None);
        self
    }

    /// Negative amounts are clamped to 0 when applied.
    pub fn with_buffer_amount(mut self, buffer_amount: i64) -> Self {
        self.buffer_amount = Some(buffer_amount);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_none()
            && self.item_width.is_none()
            && self.item_height.is_none()
            && self.item_size.is_none()
            && self.buffer_amount.is_none()
    }

    /// Applies everything except `items` to `options`, returning the new item collection if one
    /// was supplied.
    pub(crate) fn apply_to(self, options: &mut WindowerOptions<T>) -> Option<Vec<T>> {
        let mut next = options.clone();
        if let Some(width) = self.item_width {
            next.item_width = None;
            if let Some(w) = width {
                next = next.with_item_width(w);
            }
        }
        if let Some(height) = self.item_height {
            next.item_height = None;
            if let Some(h) = height {
                next = next.with_item_height(h);
            }
        }
        if let Some(item_size) = self.item_size {
            next.item_size = item_size;
        }
        if let Some(buffer_amount) = self.buffer_amount {
            next = next.with_buffer_amount_signed(buffer_amount);
        }
        *options = next;
        self.items
    }
}

impl<T> Default for InputChanges<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for InputChanges<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InputChanges")
            .field("items", &self.items.as_ref().map(Vec::len))
            .field("item_width", &self.item_width)
            .field("item_height", &self.item_height)
            .field("item_size", &self.item_size.as_ref().map(Option::is_some))
            .field("buffer_amount", &self.buffer_amount)
            .finish()
    }
}
