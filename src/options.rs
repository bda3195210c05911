use custom_list_grow_buf::DEFAULT_MIN_CAPACITY;

/// Construction options for a [`CustomList`](crate::CustomList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Capacity allocated by the first insertion into an empty list.
    /// Zero is treated as one.
    pub min_capacity: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions::new()
    }
}

impl ListOptions {
    pub const fn new() -> Self {
        Self {
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }

    pub const fn with_min_capacity(min_capacity: usize) -> Self {
        Self { min_capacity }
    }
}
