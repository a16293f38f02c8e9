//! # Boardstore - Embedded Widget Board Store
//!
//! Boardstore is a lightweight, embedded, thread-safe store for the widgets
//! of a shared drawing board. Every widget is a positioned rectangle with a
//! draw-order rank (`z_index`), and the store keeps the rank space
//! collision-free as widgets are added, repositioned, and removed, while
//! serving paginated spatial-range queries.
//!
//! ## Key Features
//!
//! - **Embedded**: no server process, plain in-memory state
//! - **Collision-Free Ranks**: the cascading push-out shift keeps every
//!   stored rank unique at rest
//! - **Pluggable Backings**: four interchangeable storage adapters trading
//!   off lookup, insertion, and ordered-scan costs
//! - **Spatial Queries**: axis-aligned containment filters with
//!   offset/limit pagination
//! - **Copy Isolation**: every widget crossing the store boundary is an
//!   independent snapshot
//! - **Concurrent Reads**: lookups and scans never wait on the write lock
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use boardstore::model::{BoundsFilter, PageRequest, WidgetDraft};
//! use boardstore::store::WidgetStore;
//!
//! # fn main() -> boardstore::errors::StoreResult<()> {
//! let store = WidgetStore::combined_backed();
//!
//! // an absent rank places the widget on top of the board
//! let bottom = store.add(WidgetDraft::new(0, 0, 100, 50).z_index(1))?;
//! let top = store.add(WidgetDraft::new(10, 10, 50, 50))?;
//!
//! // adding at an occupied rank pushes the occupants up
//! store.add(WidgetDraft::new(5, 5, 20, 20).z_index(1))?;
//!
//! let page = store.find_all(
//!     &BoundsFilter::bounded(0, 200, 0, 200),
//!     &PageRequest::new(0, 10),
//! )?;
//! assert_eq!(page.total_count, 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`model`] - widgets, drafts, spatial filters, pagination types
//! - [`store`] - the five-operation store facade and both implementations
//! - [`store::adapter`] - the four backing-structure adapters
//! - [`errors`] - error types and result definitions

pub mod errors;
pub mod model;
pub mod store;

pub(crate) mod common;

pub use errors::{ErrorKind, StoreError, StoreResult};
pub use model::{BoundsFilter, Page, PageRequest, Widget, WidgetDraft, WidgetId};
pub use store::adapter::{
    CombinedStoreAdapter, MapStoreAdapter, StoreAdapter, StoreAdapterProvider, TreeStoreAdapter,
    VecStoreAdapter, WidgetIterator,
};
pub use store::{AdaptedWidgetStore, SimpleWidgetStore, WidgetStore, WidgetStoreProvider};
