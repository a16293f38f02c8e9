use crate::errors::StoreResult;
use crate::model::{Widget, WidgetId};
use crate::store::adapter::{StoreAdapterProvider, WidgetIterator};
use crossbeam_skiplist::SkipMap;

/// Rank-ordered adapter backed by a concurrent skip list keyed by rank.
///
/// Scans come back sorted by ascending rank for free and collision checks
/// are a single keyed lookup, at the price of O(n) id lookups: there is no
/// id index, so `get` and `remove` walk the list.
///
/// The rank is the ordering key, so a stored entry's rank is never mutated
/// in place: push-out takes the affected entries out, bumps the snapshots,
/// and reinserts them. The maximum rank is the last key of the list, no
/// cache needed.
pub struct TreeStoreAdapter {
    store: SkipMap<i32, Widget>,
}

impl TreeStoreAdapter {
    pub fn new() -> Self {
        TreeStoreAdapter {
            store: SkipMap::new(),
        }
    }
}

impl Default for TreeStoreAdapter {
    fn default() -> Self {
        TreeStoreAdapter::new()
    }
}

impl StoreAdapterProvider for TreeStoreAdapter {
    fn insert(&self, widget: Widget) -> StoreResult<()> {
        self.store.insert(widget.z_index, widget);
        Ok(())
    }

    fn get(&self, id: &WidgetId) -> StoreResult<Option<Widget>> {
        Ok(self
            .store
            .iter()
            .find(|entry| entry.value().id == *id)
            .map(|entry| entry.value().clone()))
    }

    fn remove(&self, widget: &Widget) -> StoreResult<bool> {
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

        // The rank is the ordering key: take every affected entry out before
        // touching its rank, then reinsert the bumped snapshots. The bumped
        // ranks stay pairwise distinct, so reinsertion cannot clobber.
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
