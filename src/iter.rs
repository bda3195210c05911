//! Fail-fast iteration over a [`CustomList`].
//!
//! An [`Iter`] records the list's modification counter when it is created.
//! Every `try_next` compares the live counter with that snapshot and fails with
//! [`ListError::ConcurrentModification`] once they differ. The check is lazy:
//! nothing happens until the stale iterator is used again.
//!
//! [`Iter::remove`] is the one mutation an iterator may perform. It bumps the
//! list's counter like any other removal, then re-snapshots it, so the
//! removing iterator stays usable while every other iterator goes stale.

use core::fmt;
use core::iter::FusedIterator;

use crate::error::{ListError, Result};
use crate::list::CustomList;

pub struct Iter<'a, T> {
    list: &'a CustomList<T>,
    cursor: usize,
    last_returned: Option<usize>,
    expected_mod_count: usize,
    // Set once the `Iterator` impl has yielded `None` or an error.
    fused: bool,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a CustomList<T>) -> Self {
        Self {
            list,
            cursor: 0,
            last_returned: None,
            expected_mod_count: list.mod_count(),
            fused: false,
        }
    }

    /// Whether the cursor is before the end of the list.
    ///
    /// A pure position check: it never fails and ignores staleness.
    pub fn has_next(&self) -> bool {
        self.cursor < self.list.size()
    }

    /// Removes the element most recently returned by `try_next`.
    ///
    /// Allowed once per successful `try_next`. The next `try_next` yields the
    /// element that shifted into the removed slot.
    pub fn remove(&mut self) -> Result<()> {
        let index = self.last_returned.ok_or(ListError::IllegalState)?;
        self.check_for_comodification()?;

        self.list.remove_at(index);
        self.cursor = index;
        self.last_returned = None;
        self.expected_mod_count = self.list.mod_count();
        Ok(())
    }

    fn check_for_comodification(&self) -> Result<()> {
        let actual = self.list.mod_count();
        if actual != self.expected_mod_count {
            tracing::debug!(
                expected = self.expected_mod_count,
                actual,
                "list modified under a live iterator"
            );
            return Err(ListError::ConcurrentModification {
                expected: self.expected_mod_count,
                actual,
            });
        }
        Ok(())
    }
}

impl<T: Clone> Iter<'_, T> {
    /// Returns the next element and advances the cursor.
    ///
    /// Staleness is checked before exhaustion, so a stale iterator reports
    /// [`ListError::ConcurrentModification`] even at the end of the list.
    pub fn try_next(&mut self) -> Result<T> {
        self.check_for_comodification()?;

        let index = self.cursor;
        let value = self
            .list
            .get(index)
            .map_err(|_| ListError::NoSuchElement)?;
        self.cursor = index + 1;
        self.last_returned = Some(index);
        Ok(value)
    }

    /// Feeds every remaining element to `f`, in order.
    ///
    /// Fails as soon as the list is found to be modified, including by `f`
    /// itself. An exhausted iterator yields nothing.
    pub fn for_each_remaining(&mut self, mut f: impl FnMut(T)) -> Result<()> {
        while self.has_next() {
            f(self.try_next()?);
        }
        // `f` may have shrunk the list past the cursor.
        self.check_for_comodification()
    }
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match self.try_next() {
            Ok(value) => Some(Ok(value)),
            Err(ListError::NoSuchElement) => {
                self.fused = true;
                None
            }
            Err(err) => {
                self.fused = true;
                Some(Err(err))
            }
        }
    }
}

impl<T: Clone> FusedIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("cursor", &self.cursor)
            .field("last_returned", &self.last_returned)
            .field("expected_mod_count", &self.expected_mod_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_logging;
    use alloc::vec::Vec;

    fn list_of(values: &[i32]) -> CustomList<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn remove_rewinds_cursor() {
        let list = list_of(&[1, 2, 3]);
        let mut iter = list.iter();
        assert_eq!(iter.try_next(), Ok(1));
        assert_eq!(iter.try_next(), Ok(2));
        iter.remove().unwrap();
        assert_eq!(iter.cursor, 1);
        assert_eq!(iter.last_returned, None);
        assert_eq!(iter.try_next(), Ok(3));
        assert!(!iter.has_next());
    }

    #[test]
    fn remove_twice_is_illegal() {
        let list = list_of(&[1, 2]);
        let mut iter = list.iter();
        iter.try_next().unwrap();
        iter.remove().unwrap();
        assert_eq!(iter.remove(), Err(ListError::IllegalState));
        assert_eq!(list, [2]);
    }

    #[test]
    fn remove_on_stale_iterator_fails() {
        init_test_logging();

        let list = list_of(&[1, 2]);
        let mut iter = list.iter();
        iter.try_next().unwrap();
        list.add(3);
        assert_eq!(
            iter.remove(),
            Err(ListError::ConcurrentModification {
                expected: 1,
                actual: 2
            })
        );
        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn remove_everything_while_iterating() {
        let list = list_of(&[1, 2, 3, 4]);
        let mut iter = list.iter();
        while iter.has_next() {
            let value = iter.try_next().unwrap();
            if value % 2 == 0 {
                iter.remove().unwrap();
            }
        }
        assert_eq!(list, [1, 3]);
    }

    #[test]
    fn std_iterator_stops_at_end() {
        let list = list_of(&[1, 2, 3]);
        let collected: Result<Vec<_>> = list.iter().collect();
        assert_eq!(collected, Ok(alloc::vec![1, 2, 3]));
    }

    #[test]
    fn std_iterator_reports_staleness_once() {
        let list = list_of(&[1, 2, 3]);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(Ok(1)));
        list.add(4);
        assert!(matches!(
            iter.next(),
            Some(Err(ListError::ConcurrentModification { .. }))
        ));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn std_iterator_stays_fused_after_end() {
        let list = list_of(&[1]);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(Ok(1)));
        assert_eq!(iter.next(), None);
        list.add(2);
        assert_eq!(iter.next(), None);
    }
}
