// ============================================================================
// Integer Ranges
// Half-open iteration over checked integer values
// ============================================================================

use super::backend::IntBackend;
use super::integer::Int;
use super::policy::Bounds;
use num_traits::ToPrimitive;
use std::iter::FusedIterator;

impl<R: IntBackend, P: Bounds> Int<R, P> {
    /// Iterate `self, self + 1, ..., end - 1`.
    ///
    /// Both endpoints are already admitted values, so every yielded value is
    /// admitted too. An empty range results when `end <= self`.
    ///
    /// # Example
    /// ```
    /// use checked_runtime::numeric::I8;
    ///
    /// let values: Vec<i8> = I8::new(-2)?.range_to(I8::new(2)?).map(|v| v.value()).collect();
    /// assert_eq!(values, [-2, -1, 0, 1]);
    /// # Ok::<(), checked_runtime::numeric::NumericError>(())
    /// ```
    pub fn range_to(self, end: Self) -> IntRange<R, P> {
        IntRange {
            next: self.value(),
            end: end.value(),
            _bounds: Default::default(),
        }
    }
}

/// Iterator returned by [`Int::range_to`].
#[derive(Debug, Clone)]
pub struct IntRange<R, P> {
    next: R,
    end: R,
    _bounds: std::marker::PhantomData<P>,
}

impl<R: IntBackend, P: Bounds> IntRange<R, P> {
    fn remaining(&self) -> Option<usize> {
        if self.next >= self.end {
            return Some(0);
        }
        (self.end.widen() - self.next.widen()).to_usize()
    }
}

impl<R: IntBackend, P: Bounds> Iterator for IntRange<R, P> {
    type Item = Int<R, P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        // current < end <= MAX, so the step cannot fail
        self.next = current.checked_add(R::ONE).unwrap_or(self.end);
        Some(Int::wrap(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(len) => (len, Some(len)),
            None => (usize::MAX, None),
        }
    }
}

impl<R: IntBackend, P: Bounds> DoubleEndedIterator for IntRange<R, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end = self.end.checked_sub(R::ONE).unwrap_or(self.next);
        Some(Int::wrap(self.end))
    }
}

impl<R: IntBackend, P: Bounds> FusedIterator for IntRange<R, P> {}
