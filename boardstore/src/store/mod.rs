//! The widget store facade and its backing implementations.
//!
//! [`WidgetStore`] exposes exactly five operations - `add`, `find_one`,
//! `update`, `find_all`, `delete` - and enforces the one invariant of the
//! system: draw-order ranks are pairwise distinct at every quiescent point.
//! Two providers exist: [`AdaptedWidgetStore`] composes any
//! [`adapter::StoreAdapter`] backing structure, and [`SimpleWidgetStore`]
//! is a self-contained linear baseline.

pub mod adapter;

mod adapted_store;
mod simple_store;

pub use adapted_store::AdaptedWidgetStore;
pub use simple_store::SimpleWidgetStore;

use crate::errors::StoreResult;
use crate::model::{BoundsFilter, Page, PageRequest, Widget, WidgetDraft, WidgetId};
use crate::store::adapter::{
    CombinedStoreAdapter, MapStoreAdapter, StoreAdapter, TreeStoreAdapter, VecStoreAdapter,
};
use std::ops::Deref;
use std::sync::Arc;

/// Contract for widget store implementations.
///
/// # Semantics
/// - `add` assigns identity, timestamp, and rank server-side; an explicit
///   rank is defended by the push-out shift, an absent one places the
///   widget on top. Never fails for valid input.
/// - `find_one` treats an unknown id as a normal empty result, not an error.
/// - `update` and `delete` fail with `NotFound` for unknown ids.
/// - `find_all` returns rank-ordered, offset/limit-sliced pages together
///   with the full filtered-set size.
///
/// Every widget handed out is an owned copy; mutating it never changes
/// store state, and later store mutations never change it.
pub trait WidgetStoreProvider: Send + Sync {
    /// Adds a new widget, pushing colliding-or-higher ranks up by one when
    /// the draft carries an explicit rank.
    fn add(&self, draft: WidgetDraft) -> StoreResult<Widget>;

    /// Looks up a widget by id. An unknown id yields `Ok(None)`.
    fn find_one(&self, id: &WidgetId) -> StoreResult<Option<Widget>>;

    /// Replaces the widget's geometry and rank with the draft's, keeping
    /// its identity and refreshing its timestamp.
    ///
    /// # Errors
    /// `NotFound` when no widget with the given id exists.
    fn update(&self, id: &WidgetId, draft: WidgetDraft) -> StoreResult<Widget>;

    /// Returns the widgets matching `filter`, ordered by ascending rank and
    /// sliced to the requested page. An empty filter matches everything.
    fn find_all(&self, filter: &BoundsFilter, page: &PageRequest) -> StoreResult<Page>;

    /// Removes a widget.
    ///
    /// # Errors
    /// `NotFound` when no widget with the given id exists.
    fn delete(&self, id: &WidgetId) -> StoreResult<()>;
}

/// Cheap-to-clone handle over a [`WidgetStoreProvider`] implementation.
///
/// All clones share the same underlying store state through the inner
/// `Arc`, so a handle can be passed freely across threads.
///
/// # Examples
///
/// ```rust,ignore
/// use boardstore::store::WidgetStore;
/// use boardstore::model::WidgetDraft;
///
/// let store = WidgetStore::combined_backed();
/// let widget = store.add(WidgetDraft::new(0, 0, 100, 50))?;
/// assert_eq!(store.find_one(&widget.id)?, Some(widget));
/// ```
#[derive(Clone)]
pub struct WidgetStore {
    inner: Arc<dyn WidgetStoreProvider>,
}

impl Deref for WidgetStore {
    type Target = Arc<dyn WidgetStoreProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl WidgetStore {
    /// Wraps a provider implementation.
    pub fn new<T: WidgetStoreProvider + 'static>(inner: T) -> Self {
        WidgetStore {
            inner: Arc::new(inner),
        }
    }

    /// The self-contained linear baseline store.
    pub fn simple() -> Self {
        WidgetStore::new(SimpleWidgetStore::new())
    }

    /// Adapter-backed store over the unordered hash index.
    pub fn map_backed() -> Self {
        WidgetStore::new(AdaptedWidgetStore::new(StoreAdapter::new(
            MapStoreAdapter::new(),
        )))
    }

    /// Adapter-backed store over the rank-ordered skip list.
    pub fn tree_backed() -> Self {
        WidgetStore::new(AdaptedWidgetStore::new(StoreAdapter::new(
            TreeStoreAdapter::new(),
        )))
    }

    /// Adapter-backed store over the combined id index + rank order.
    pub fn combined_backed() -> Self {
        WidgetStore::new(AdaptedWidgetStore::new(StoreAdapter::new(
            CombinedStoreAdapter::new(),
        )))
    }

    /// Adapter-backed store over the linear vector baseline.
    pub fn vec_backed() -> Self {
        WidgetStore::new(AdaptedWidgetStore::new(StoreAdapter::new(
            VecStoreAdapter::new(),
        )))
    }
}
