//! Pluggable backing structures behind the widget store facade.
//!
//! Each adapter trades off lookup, insertion, and ordered-scan costs:
//!
//! | Adapter | `get` by id | `insert`/`remove` | `scan` order |
//! |---|---|---|---|
//! | [`MapStoreAdapter`] | O(1) | O(1) | unordered |
//! | [`TreeStoreAdapter`] | O(n) | O(log n) | ascending rank |
//! | [`CombinedStoreAdapter`] | O(1) | O(log n) | ascending rank |
//! | [`VecStoreAdapter`] | O(n) | O(n) | unordered |
//!
//! Adapter choice is a performance detail only: given the same operation
//! sequence, every adapter produces identical observable results.

mod combined_adapter;
mod map_adapter;
mod tree_adapter;
mod vec_adapter;

pub use combined_adapter::CombinedStoreAdapter;
pub use map_adapter::MapStoreAdapter;
pub use tree_adapter::TreeStoreAdapter;
pub use vec_adapter::VecStoreAdapter;

use crate::errors::StoreResult;
use crate::model::{Widget, WidgetId};
use std::ops::Deref;
use std::sync::Arc;

/// Snapshot cursor over an adapter's widgets.
///
/// Adapters capture a consistent snapshot of their backing structure at
/// `scan()` time, so the cursor stays valid while concurrent mutations
/// proceed. Every yielded widget is an owned copy.
pub struct WidgetIterator {
    inner: Box<dyn Iterator<Item = Widget> + Send>,
}

impl WidgetIterator {
    pub fn new(inner: impl Iterator<Item = Widget> + Send + 'static) -> Self {
        WidgetIterator {
            inner: Box::new(inner),
        }
    }
}

impl Iterator for WidgetIterator {
    type Item = Widget;

    fn next(&mut self) -> Option<Widget> {
        self.inner.next()
    }
}

/// Low-level contract for widget storage backends.
///
/// # Purpose
/// Defines the primitives the [`AdaptedWidgetStore`](crate::store::AdaptedWidgetStore)
/// facade composes into the five public operations. Implementations provide
/// the concrete backing structure - a hash index, a rank-ordered structure,
/// both, or a plain vector.
///
/// # Thread Safety
/// Implementers must be `Send + Sync`. Mutations are serialized by the
/// facade's write lock, but reads arrive concurrently with an in-flight
/// write's scan-and-shift phase, so the backing structure itself must stay
/// internally consistent under that interleaving. Readers may observe a
/// transiently half-shifted rank space; they must never observe a corrupted
/// structure.
pub trait StoreAdapterProvider: Send + Sync {
    /// Stores a widget snapshot. An existing entry with the same id is
    /// replaced.
    fn insert(&self, widget: Widget) -> StoreResult<()>;

    /// Looks up a widget by id, returning an owned copy.
    fn get(&self, id: &WidgetId) -> StoreResult<Option<Widget>>;

    /// Removes the given widget snapshot. Returns whether an entry was
    /// actually removed.
    fn remove(&self, widget: &Widget) -> StoreResult<bool>;

    /// Number of widgets currently stored.
    fn size(&self) -> StoreResult<usize>;

    /// Snapshot cursor over all stored widgets. The order is unspecified
    /// unless [`StoreAdapterProvider::is_rank_ordered`] returns `true`, in
    /// which case widgets arrive in ascending rank order.
    fn scan(&self) -> StoreResult<WidgetIterator>;

    /// Resolves a rank collision at `z_index` by shifting every stored
    /// widget at that rank or above one rank up, in a single pass.
    ///
    /// The widget identified by `exclude` is skipped by both the collision
    /// check and the shift; it is the actor about to be inserted or kept at
    /// `z_index`. When no collision exists at `z_index`, nothing is shifted.
    ///
    /// Because ranks are pairwise distinct before the shift, bumping all of
    /// them together by one cannot introduce a second collision.
    fn push_out(&self, z_index: i32, exclude: Option<&WidgetId>) -> StoreResult<()>;

    /// Whether [`StoreAdapterProvider::scan`] already yields widgets in
    /// ascending rank order. The facade sorts otherwise.
    fn is_rank_ordered(&self) -> bool;

    /// The current maximum rank, or 0 when the adapter is empty.
    fn max_z_index(&self) -> StoreResult<i32>;
}

/// Cheap-to-clone handle over a [`StoreAdapterProvider`] implementation.
#[derive(Clone)]
pub struct StoreAdapter {
    inner: Arc<dyn StoreAdapterProvider>,
}

impl Deref for StoreAdapter {
    type Target = Arc<dyn StoreAdapterProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl StoreAdapter {
    /// Wraps a provider implementation.
    ///
    /// The provider is held in an `Arc`, so cloning the adapter only bumps
    /// a reference count and the same backing structure is shared by every
    /// clone.
    pub fn new<T: StoreAdapterProvider + 'static>(inner: T) -> Self {
        StoreAdapter {
            inner: Arc::new(inner),
        }
    }
}
