use crate::errors::StoreResult;
use crate::model::{Widget, WidgetId};
use crate::store::adapter::{StoreAdapterProvider, WidgetIterator};
use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;

/// Combined adapter: a rank-ordered skip list as the primary structure plus
/// a hash index for O(1) id lookups.
///
/// Best of both worlds for read-heavy mixes - keyed collision checks,
/// sort-free scans, and constant-time lookups - paid for with double
/// bookkeeping on every mutation. Both structures hold the current snapshot
/// of each widget and are kept consistent under the facade's write lock.
pub struct CombinedStoreAdapter {
    index: DashMap<WidgetId, Widget>,
    store: SkipMap<i32, Widget>,
}

impl CombinedStoreAdapter {
    pub fn new() -> Self {
        CombinedStoreAdapter {
            index: DashMap::new(),
            store: SkipMap::new(),
        }
    }
}

impl Default for CombinedStoreAdapter {
    fn default() -> Self {
        CombinedStoreAdapter::new()
    }
}

impl StoreAdapterProvider for CombinedStoreAdapter {
    fn insert(&self, widget: Widget) -> StoreResult<()> {
        self.store.insert(widget.z_index, widget.clone());
        self.index.insert(widget.id, widget);
        Ok(())
    }

    fn get(&self, id: &WidgetId) -> StoreResult<Option<Widget>> {
        Ok(self.index.get(id).map(|entry| entry.value().clone()))
    }

    fn remove(&self, widget: &Widget) -> StoreResult<bool> {
        self.index.remove(&widget.id);
        match self.store.get(&widget.z_index) {
            Some(entry) if entry.value().id == widget.id => Ok(entry.remove()),
            _ => Ok(false),
        }
    }

    fn size(&self) -> StoreResult<usize> {
        Ok(self.store.len())
    }

    fn scan(&self) -> StoreResult<WidgetIterator> {
        let snapshot: Vec<Widget> = self.store.iter().map(|entry| entry.value().clone()).collect();
        Ok(WidgetIterator::new(snapshot.into_iter()))
    }

    fn push_out(&self, z_index: i32, exclude: Option<&WidgetId>) -> StoreResult<()> {
        let has_collision = self
            .store
            .get(&z_index)
            .map_or(false, |entry| exclude != Some(&entry.value().id));
        if !has_collision {
            return Ok(());
        }

        // remove-then-reinsert, same as the plain skip list; the id index
        // entries are rewritten with the bumped snapshots alongside
        let shifted: Vec<Widget> = self
            .store
            .range(z_index..)
            .filter(|entry| exclude != Some(&entry.value().id))
            .map(|entry| entry.value().clone())
            .collect();

        for widget in &shifted {
            self.store.remove(&widget.z_index);
        }
        for widget in shifted {
            let bumped = widget.bumped();
            self.index.insert(bumped.id, bumped.clone());
            self.store.insert(bumped.z_index, bumped);
        }
        Ok(())
    }

    fn is_rank_ordered(&self) -> bool {
        true
    }

    fn max_z_index(&self) -> StoreResult<i32> {
        Ok(self.store.back().map(|entry| *entry.key()).unwrap_or(0))
    }
}
