#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! custom-list - An ordered, growable list with fail-fast iterators
//!
//! # Overview
//!
//! [`CustomList`] stores its elements contiguously and grows geometrically,
//! so indexed reads are O(1) and appends are amortized O(1). Iterators are
//! *fail-fast*: each one remembers the list's modification generation and
//! reports [`ListError::ConcurrentModification`] on its next access once the
//! list has been structurally changed behind its back.
//!
//! The generation check catches sequential misuse (mutating a list while
//! walking it). It is not a synchronization primitive: `CustomList` is not
//! `Sync`.
//!
//! # Quick Start
//!
//! ```
//! use custom_list::{CustomList, ListError};
//!
//! let list = CustomList::new();
//! list.add(1);
//! list.add(2);
//! list.add(3);
//!
//! let mut first = list.iter();
//! let mut second = list.iter();
//!
//! // Removing through an iterator keeps that iterator valid...
//! assert_eq!(first.try_next(), Ok(1));
//! first.remove().unwrap();
//! assert_eq!(first.try_next(), Ok(2));
//! assert_eq!(list, [2, 3]);
//!
//! // ...but invalidates every other one.
//! assert!(matches!(
//!     second.try_next(),
//!     Err(ListError::ConcurrentModification { .. })
//! ));
//! ```

extern crate alloc;

mod error;
mod iter;
mod list;
mod options;

pub use error::{ListError, Result};
pub use iter::Iter;
pub use list::CustomList;
pub use options::ListOptions;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
