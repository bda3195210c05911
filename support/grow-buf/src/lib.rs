//! GrowBuf: contiguous storage with an explicit geometric growth policy.
//!
//! GrowBuf is the backing store behind `CustomList`. It:
//! - Keeps elements contiguous so indexed reads are O(1)
//! - Allocates a minimum capacity on the first write, then doubles
//! - Inserts and removes by shifting the tail, so element order never changes

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::{cmp, fmt, ops::Add, slice};

/// Capacity allocated by the first write into an empty buffer.
pub const DEFAULT_MIN_CAPACITY: usize = 10;

pub struct GrowBuf<T> {
    data: Vec<T>,
    min_cap: usize, // never zero
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(GrowBuf<u8>, [usize; 4]);

impl<T> GrowBuf<T> {
    pub fn new() -> Self {
        Self::with_min_capacity(DEFAULT_MIN_CAPACITY)
    }

    /// Creates an empty buffer without allocating. The first write allocates
    /// at least `min_cap` slots; zero is treated as one.
    pub fn with_min_capacity(min_cap: usize) -> Self {
        Self {
            data: Vec::new(),
            min_cap: cmp::max(min_cap, 1),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn cap(&self) -> usize {
        self.data.capacity()
    }

    pub fn push(&mut self, value: T) {
        if self.len() == self.cap() {
            self.reserve_one_unchecked();
        }
        self.data.push(value);
    }

    #[cold]
    fn reserve_one_unchecked(&mut self) {
        debug_assert_eq!(self.len(), self.cap());
        let new_cap = self.next_cap(self.len().add(1));
        self.grow(new_cap);
    }

    /// Makes room for `additional` more elements using the growth policy.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len().saturating_add(additional);
        if required > self.cap() {
            let new_cap = self.next_cap(required);
            self.grow(new_cap);
        }
    }

    // Empty storage jumps to `min_cap`; otherwise capacity doubles. Either way
    // the result covers `required`.
    fn next_cap(&self, required: usize) -> usize {
        let grown = if self.cap() == 0 {
            self.min_cap
        } else {
            self.cap().saturating_mul(2)
        };
        cmp::max(grown, required)
    }

    fn grow(&mut self, new_cap: usize) {
        let from = self.cap();
        self.data.reserve_exact(new_cap - self.len());
        tracing::trace!(from, to = self.cap(), len = self.len(), "grew buffer");
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Index of the first element matching `pred`.
    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.data.iter().position(pred)
    }

    /// Inserts `values` at `at`, in order, shifting `[at, len)` right.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn insert_many(&mut self, at: usize, values: Vec<T>) {
        assert!(at <= self.len(), "insert index {at} past length {}", self.len());
        if values.is_empty() {
            return;
        }
        let count = values.len();
        self.reserve(count);
        self.data.extend(values);
        self.data[at..].rotate_right(count);
    }

    /// Removes the element at `at`, shifting `(at, len)` left.
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`.
    pub fn remove(&mut self, at: usize) -> T {
        self.data.remove(at)
    }
}

impl<T: Clone> Clone for GrowBuf<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.len());
        data.extend_from_slice(&self.data);
        Self {
            data,
            min_cap: self.min_cap,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}
