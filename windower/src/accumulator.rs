/// Cumulative item sizes over a borrowed collection.
///
/// Sums are recomputed on every call; the size function is assumed cheap or memoized by the
/// caller. Upper bounds are trusted: `count` must not exceed `items.len()`.
pub struct SizeAccumulator<'a, T, F> {
    items: &'a [T],
    size_of: F,
}

impl<'a, T, F> SizeAccumulator<'a, T, F>
where
    F: Fn(&T) -> f64,
{
    pub fn new(items: &'a [T], size_of: F) -> Self {
        Self { items, size_of }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size_at(&self, index: usize) -> f64 {
        (self.size_of)(&self.items[index])
    }

    /// Sum of the sizes of `items[0..count]`.
    pub fn sum_up_to(&self, count: usize) -> f64 {
        debug_assert!(
            count <= self.items.len(),
            "sum_up_to past the end (count={count}, len={})",
            self.items.len()
        );
        self.items.iter().take(count).map(|it| (self.size_of)(it)).sum()
    }

    pub fn total(&self) -> f64 {
        self.sum_up_to(self.items.len())
    }

    /// Walks forward from `from`, accumulating sizes while the sum is `< target`.
    ///
    /// Returns the index just past the last item consumed, or `len()` if the collection ran
    /// out first. A sum exactly equal to `target` stops the walk.
    pub fn walk_until(&self, from: usize, target: f64) -> usize {
        let mut sum = 0.0;
        let mut i = from;
        while i < self.items.len() && sum < target {
            sum += self.size_at(i);
            i += 1;
        }
        i
    }

    /// Number of leading items that fit before the accumulated size exceeds `extent`,
    /// at least 1.
    pub fn items_filling(&self, extent: f64) -> usize {
        let mut sum = 0.0;
        let mut n = 0usize;
        while n < self.items.len() {
            sum += self.size_at(n);
            if sum > extent {
                break;
            }
            n += 1;
        }
        n.max(1)
    }
}
