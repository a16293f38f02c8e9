use crate::errors::StoreResult;
use crate::model::{Widget, WidgetId};
use crate::store::adapter::{StoreAdapterProvider, WidgetIterator};
use dashmap::DashMap;
use parking_lot::Mutex;

/// Unordered adapter backed by a sharded concurrent hash map keyed by id.
///
/// The simplest structure with O(1) lookup and removal. Scans come back in
/// no particular order, so every paginated query pays a full sort in the
/// facade.
///
/// The maximum rank is cached and maintained incrementally on insert and
/// push-out; removing the widget that holds the cached maximum invalidates
/// the cache, and the next [`StoreAdapterProvider::max_z_index`] call
/// recomputes it with a full scan.
pub struct MapStoreAdapter {
    store: DashMap<WidgetId, Widget>,
    max_z_index: Mutex<Option<i32>>,
}

impl MapStoreAdapter {
    pub fn new() -> Self {
        MapStoreAdapter {
            store: DashMap::new(),
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

impl Default for MapStoreAdapter {
    fn default() -> Self {
        MapStoreAdapter::new()
    }
}

impl StoreAdapterProvider for MapStoreAdapter {
    fn insert(&self, widget: Widget) -> StoreResult<()> {
        let z_index = widget.z_index;
        self.store.insert(widget.id, widget);
        self.note_inserted_rank(z_index);
        Ok(())
    }

    fn get(&self, id: &WidgetId) -> StoreResult<Option<Widget>> {
        Ok(self.store.get(id).map(|entry| entry.value().clone()))
    }

    fn remove(&self, widget: &Widget) -> StoreResult<bool> {
        match self.store.remove(&widget.id) {
            Some((_, removed)) => {
                self.note_removed_rank(removed.z_index);
                Ok(true)
            }
            None => Ok(false),
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
        let has_collision = self.store.iter().any(|entry| {
            entry.value().z_index == z_index && exclude != Some(&entry.value().id)
        });
        if !has_collision {
            return Ok(());
        }

        // collect ids first so no shard guard is held while rewriting
        let shifted: Vec<WidgetId> = self
            .store
            .iter()
            .filter(|entry| entry.value().z_index >= z_index && exclude != Some(&entry.value().id))
            .map(|entry| *entry.key())
            .collect();

        for id in shifted {
            if let Some(mut entry) = self.store.get_mut(&id) {
                let bumped = entry.value().bumped();
                self.note_inserted_rank(bumped.z_index);
                *entry.value_mut() = bumped;
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
        // recompute without holding the cache lock; shard guards and the
        // cache lock are never held together
        let max = self
            .store
            .iter()
            .map(|entry| entry.value().z_index)
            .max()
            .unwrap_or(0);
        *self.max_z_index.lock() = Some(max);
        Ok(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WidgetDraft;

    fn widget(z_index: i32) -> Widget {
        Widget::from_draft(&WidgetDraft::new(0, 0, 1, 1), z_index)
    }

    #[test]
    fn test_insert_get_remove() {
        let adapter = MapStoreAdapter::new();
        let w = widget(1);

        adapter.insert(w.clone()).unwrap();
        assert_eq!(adapter.size().unwrap(), 1);
        assert_eq!(adapter.get(&w.id).unwrap(), Some(w.clone()));

        assert!(adapter.remove(&w).unwrap());
        assert!(!adapter.remove(&w).unwrap());
        assert_eq!(adapter.get(&w.id).unwrap(), None);
    }

    #[test]
    fn test_push_out_without_collision_is_noop() {
        let adapter = MapStoreAdapter::new();
        adapter.insert(widget(1)).unwrap();
        adapter.insert(widget(3)).unwrap();

        adapter.push_out(2, None).unwrap();

        let mut ranks: Vec<i32> = adapter.scan().unwrap().map(|w| w.z_index).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 3]);
    }

    #[test]
    fn test_push_out_shifts_colliding_and_higher() {
        let adapter = MapStoreAdapter::new();
        adapter.insert(widget(1)).unwrap();
        adapter.insert(widget(2)).unwrap();
        adapter.insert(widget(4)).unwrap();

        adapter.push_out(2, None).unwrap();

        let mut ranks: Vec<i32> = adapter.scan().unwrap().map(|w| w.z_index).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 3, 5]);
    }

    #[test]
    fn test_push_out_skips_excluded_widget() {
        let adapter = MapStoreAdapter::new();
        let actor = widget(2);
        adapter.insert(actor.clone()).unwrap();
        adapter.insert(widget(3)).unwrap();

        // only the actor sits at rank 2, so there is no collision to resolve
        adapter.push_out(2, Some(&actor.id)).unwrap();

        let mut ranks: Vec<i32> = adapter.scan().unwrap().map(|w| w.z_index).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![2, 3]);
    }

    #[test]
    fn test_max_rank_tracks_push_out() {
        let adapter = MapStoreAdapter::new();
        assert_eq!(adapter.max_z_index().unwrap(), 0);

        adapter.insert(widget(5)).unwrap();
        adapter.insert(widget(2)).unwrap();
        assert_eq!(adapter.max_z_index().unwrap(), 5);

        adapter.push_out(2, None).unwrap();
        assert_eq!(adapter.max_z_index().unwrap(), 6);
    }

    #[test]
    fn test_max_rank_recomputed_after_removing_top() {
        let adapter = MapStoreAdapter::new();
        let top = widget(9);
        adapter.insert(widget(4)).unwrap();
        adapter.insert(top.clone()).unwrap();
        assert_eq!(adapter.max_z_index().unwrap(), 9);

        adapter.remove(&top).unwrap();
        assert_eq!(adapter.max_z_index().unwrap(), 4);

        let remaining = adapter.scan().unwrap().next().unwrap();
        adapter.remove(&remaining).unwrap();
        assert_eq!(adapter.max_z_index().unwrap(), 0);
    }
}
