use crate::errors::StoreResult;
use crate::model::{Widget, WidgetId};
use crate::store::adapter::{StoreAdapterProvider, WidgetIterator};
use parking_lot::{Mutex, RwLock};

/// Linear baseline adapter backed by a plain vector.
///
/// The reference implementation for correctness comparisons: every lookup
/// and removal is a linear walk, appends are O(1), and scans are unordered.
/// A read-write lock keeps concurrent readers off a vector that is being
/// restructured.
pub struct VecStoreAdapter {
    store: RwLock<Vec<Widget>>,
    max_z_index: Mutex<Option<i32>>,
}

impl VecStoreAdapter {
    pub fn new() -> Self {
        VecStoreAdapter {
            store: RwLock::new(Vec::new()),
            max_z_index: Mutex::new(None),
        }
    }

    fn note_inserted_rank(&self, z_index: i32) {
        let mut cached = self.max_z_index.lock();
        if let Some(max) = *cached {
            if z_index > max {
                *cached = Some(z_index);
            }
        }
    }

    fn note_removed_rank(&self, z_index: i32) {
        let mut cached = self.max_z_index.lock();
        if *cached == Some(z_index) {
            *cached = None;
        }
    }
}

impl Default for VecStoreAdapter {
    fn default() -> Self {
        VecStoreAdapter::new()
    }
}

impl StoreAdapterProvider for VecStoreAdapter {
    fn insert(&self, widget: Widget) -> StoreResult<()> {
        let z_index = widget.z_index;
        self.store.write().push(widget);
        self.note_inserted_rank(z_index);
        Ok(())
    }

    fn get(&self, id: &WidgetId) -> StoreResult<Option<Widget>> {
        Ok(self.store.read().iter().find(|w| w.id == *id).cloned())
    }

    fn remove(&self, widget: &Widget) -> StoreResult<bool> {
        let mut store = self.store.write();
        match store.iter().position(|w| w.id == widget.id) {
            Some(position) => {
                let removed = store.remove(position);
                drop(store);
                self.note_removed_rank(removed.z_index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn size(&self) -> StoreResult<usize> {
        Ok(self.store.read().len())
    }

    fn scan(&self) -> StoreResult<WidgetIterator> {
        let snapshot = self.store.read().clone();
        Ok(WidgetIterator::new(snapshot.into_iter()))
    }

    fn push_out(&self, z_index: i32, exclude: Option<&WidgetId>) -> StoreResult<()> {
        let mut store = self.store.write();
        let has_collision = store
            .iter()
            .any(|w| w.z_index == z_index && exclude != Some(&w.id));
        if !has_collision {
            return Ok(());
        }

        for widget in store.iter_mut() {
            if widget.z_index >= z_index && exclude != Some(&widget.id) {
                *widget = widget.bumped();
                self.note_inserted_rank(widget.z_index);
            }
        }
        Ok(())
    }

    fn is_rank_ordered(&self) -> bool {
        false
    }

    fn max_z_index(&self) -> StoreResult<i32> {
        if let Some(max) = *self.max_z_index.lock() {
            return Ok(max);
        }
        // recompute without holding the cache lock; the store lock and the
        // cache lock are never held together
        let max = self
            .store
            .read()
            .iter()
            .map(|w| w.z_index)
            .max()
            .unwrap_or(0);
        *self.max_z_index.lock() = Some(max);
        Ok(max)
    }
}
