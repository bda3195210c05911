//! `CustomList`: an ordered, growable list with fail-fast iterators.
//!
//! The list keeps its elements in a contiguous [`GrowBuf`], so `get` is O(1)
//! and insertion/removal shift the tail. Every structural change (append,
//! bulk insert, removal) bumps a modification counter. Iterators snapshot
//! that counter and refuse to continue once it moves under them.
//!
//! All operations take `&self`: iterators hold a shared reference to the list
//! while the list, or another iterator, keeps mutating it. Storage lives in a
//! `RefCell`. No mutable borrow is held across a call into user code; element
//! comparisons and clones run under a shared borrow.

use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use custom_list_grow_buf::GrowBuf;

use crate::error::{ListError, Result};
use crate::iter::Iter;
use crate::options::ListOptions;

pub struct CustomList<T> {
    buf: RefCell<GrowBuf<T>>,
    mod_count: Cell<usize>,
}

static_assertions::assert_not_impl_any!(CustomList<u8>: Sync);
static_assertions::assert_impl_all!(CustomList<u8>: Send);

impl<T> CustomList<T> {
    /// Creates an empty list. Nothing is allocated until the first insertion.
    pub fn new() -> Self {
        Self::with_options(ListOptions::default())
    }

    pub fn with_options(options: ListOptions) -> Self {
        Self {
            buf: RefCell::new(GrowBuf::with_min_capacity(options.min_capacity)),
            mod_count: Cell::new(0),
        }
    }

    /// Creates an empty list with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let list = Self::new();
        list.buf.borrow_mut().reserve(capacity);
        list
    }

    pub fn size(&self) -> usize {
        self.buf.borrow().len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Current storage capacity. Only meaningful for diagnostics.
    pub fn capacity(&self) -> usize {
        self.buf.borrow().cap()
    }

    /// Structural generation, compared by iterators against their snapshot.
    pub(crate) fn mod_count(&self) -> usize {
        self.mod_count.get()
    }

    fn bump_mod_count(&self) {
        self.mod_count.set(self.mod_count.get().wrapping_add(1));
    }

    /// Appends `value` at the end of the list. Always returns `true`.
    pub fn add(&self, value: T) -> bool {
        self.buf.borrow_mut().push(value);
        self.bump_mod_count();
        true
    }

    /// Appends every element of `values`, in order.
    ///
    /// Fails with [`ListError::NullArgument`] when `values` is `None`.
    /// Returns `true` if at least one element was appended.
    pub fn add_all<I>(&self, values: Option<I>) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.ok_or(ListError::NullArgument)?;
        // The end is wherever it is once the input has been drained.
        let values: Vec<T> = values.into_iter().collect();
        Ok(self.insert_collected(self.size(), values))
    }

    /// Inserts every element of `values` starting at `index`, in order,
    /// shifting the elements at and after `index` to the right.
    ///
    /// The index is validated first: an index outside `[0, size]` fails with
    /// [`ListError::IndexOutOfBounds`] even when `values` is `None`. A valid
    /// index with `None` fails with [`ListError::NullArgument`].
    ///
    /// Returns `true` if at least one element was inserted. The whole batch
    /// counts as a single structural change.
    pub fn add_all_at<I>(&self, index: usize, values: Option<I>) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_position_index(index)?;
        let values = values.ok_or(ListError::NullArgument)?;

        // The input may read (or even grow) this list, so drain it before
        // touching storage.
        let values: Vec<T> = values.into_iter().collect();
        self.check_position_index(index)?;

        Ok(self.insert_collected(index, values))
    }

    fn check_position_index(&self, index: usize) -> Result<()> {
        let size = self.size();
        if index > size {
            return Err(ListError::IndexOutOfBounds { index, size });
        }
        Ok(())
    }

    fn insert_collected(&self, index: usize, values: Vec<T>) -> bool {
        if values.is_empty() {
            return false;
        }
        tracing::trace!(index, count = values.len(), "bulk insert");
        self.buf.borrow_mut().insert_many(index, values);
        self.bump_mod_count();
        true
    }

    /// Index of the first element equal to `value`.
    ///
    /// Comparisons run while the storage is borrowed, so a `PartialEq` impl
    /// may read this list but must not modify it (that panics).
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.buf.borrow().position(|element| element == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`, shifting later elements
    /// left. Returns `false`, leaving the list untouched, if nothing matches.
    ///
    /// Absent values are ordinary values here: on a `CustomList<Option<_>>`,
    /// `remove(&None)` removes the first `None`.
    ///
    /// Same restriction as [`index_of`](Self::index_of): comparisons must not
    /// modify this list.
    pub fn remove(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Caller guarantees `index < size`.
    pub(crate) fn remove_at(&self, index: usize) -> T {
        let value = self.buf.borrow_mut().remove(index);
        self.bump_mod_count();
        value
    }

    /// Returns a fail-fast iterator positioned before the first element.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Clone> CustomList<T> {
    /// Returns a copy of the element at `index`.
    ///
    /// `T::clone` runs while the storage is borrowed and must not modify this
    /// list.
    pub fn get(&self, index: usize) -> Result<T> {
        let buf = self.buf.borrow();
        buf.get(index)
            .cloned()
            .ok_or_else(|| ListError::IndexOutOfBounds {
                index,
                size: buf.len(),
            })
    }

    /// Applies `f` to every element in order.
    ///
    /// `f` may look at the list, but if it structurally modifies it the
    /// traversal stops with [`ListError::ConcurrentModification`].
    pub fn for_each(&self, f: impl FnMut(T)) -> Result<()> {
        self.iter().for_each_remaining(f)
    }

    /// Snapshot of the elements, in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.buf.borrow().as_slice().to_vec()
    }
}

impl<T> Default for CustomList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CustomList<T> {
    fn clone(&self) -> Self {
        Self {
            buf: RefCell::new(self.buf.borrow().clone()),
            mod_count: Cell::new(0),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CustomList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.borrow().iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CustomList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf.borrow().as_slice() == other.buf.borrow().as_slice()
    }
}

impl<T: Eq> Eq for CustomList<T> {}

impl<T: PartialEq> PartialEq<[T]> for CustomList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.buf.borrow().as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for CustomList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.buf.borrow().as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for CustomList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.buf.borrow().as_slice() == other.as_slice()
    }
}

impl<T> FromIterator<T> for CustomList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let list = Self::new();
        list.insert_collected(0, iter.into_iter().collect());
        list
    }
}

impl<T> Extend<T> for CustomList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let values = iter.into_iter().collect();
        self.insert_collected(self.size(), values);
    }
}

impl<'a, T: Clone> IntoIterator for &'a CustomList<T> {
    type Item = Result<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
