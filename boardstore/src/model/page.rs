use crate::model::Widget;

/// Pagination window for `find_all` queries.
///
/// `offset` is the number of matching widgets to skip, `limit` the maximum
/// number of items to return. A `limit` of zero is a caller contract
/// violation; the store does not guard against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn new(offset: usize, limit: usize) -> Self {
        PageRequest { offset, limit }
    }
}

/// One page of query results.
///
/// `items` is ordered by ascending rank and is the `[offset, offset+limit)`
/// slice of the filtered set. `total_count` is always the size of the full
/// filtered set, regardless of the pagination window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    pub items: Vec<Widget>,
    pub total_count: usize,
}

impl Page {
    pub fn new(items: Vec<Widget>, total_count: usize) -> Self {
        Page { items, total_count }
    }

    /// An empty page that still reports the filtered-set size.
    pub fn empty(total_count: usize) -> Self {
        Page {
            items: Vec::new(),
            total_count,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
