use crate::errors::{ErrorKind, StoreError, StoreResult};
use crate::model::{BoundsFilter, Page, PageRequest, Widget, WidgetDraft, WidgetId};
use crate::store::WidgetStoreProvider;
use itertools::Itertools;
use parking_lot::RwLock;

/// Self-contained baseline store over a plain vector.
///
/// The correctness reference the adapter-backed stores are measured
/// against: no index, no ordering, every operation a linear walk. A single
/// read-write lock covers the whole vector; mutations hold the write guard
/// across the complete collision-scan-and-shift sequence, reads share the
/// read guard.
pub struct SimpleWidgetStore {
    store: RwLock<Vec<Widget>>,
}

impl SimpleWidgetStore {
    pub fn new() -> Self {
        SimpleWidgetStore {
            store: RwLock::new(Vec::new()),
        }
    }

    fn not_found(id: &WidgetId) -> StoreError {
        log::error!("widget {} not found", id);
        StoreError::new(&format!("Widget {} not found", id), ErrorKind::NotFound)
    }

    /// Single-pass shift of every non-actor widget at `z_index` or above,
    /// run only when a non-actor widget actually sits at `z_index`.
    fn push_out(store: &mut [Widget], z_index: i32, exclude: Option<&WidgetId>) {
        let has_collision = store
            .iter()
            .any(|w| w.z_index == z_index && exclude != Some(&w.id));
        if !has_collision {
            return;
        }

        for widget in store.iter_mut() {
            if widget.z_index >= z_index && exclude != Some(&widget.id) {
                *widget = widget.bumped();
            }
        }
    }

    fn max_z_index(store: &[Widget]) -> i32 {
        store.iter().map(|w| w.z_index).max().unwrap_or(0)
    }
}

impl Default for SimpleWidgetStore {
    fn default() -> Self {
        SimpleWidgetStore::new()
    }
}

impl WidgetStoreProvider for SimpleWidgetStore {
    fn add(&self, draft: WidgetDraft) -> StoreResult<Widget> {
        let mut store = self.store.write();

        let z_index = match draft.z_index {
            Some(z_index) => {
                SimpleWidgetStore::push_out(&mut store, z_index, None);
                z_index
            }
            None => SimpleWidgetStore::max_z_index(&store) + 1,
        };

        let widget = Widget::from_draft(&draft, z_index);
        store.push(widget.clone());
        log::debug!("added widget {} at rank {}", widget.id, z_index);
        Ok(widget)
    }

    fn find_one(&self, id: &WidgetId) -> StoreResult<Option<Widget>> {
        Ok(self.store.read().iter().find(|w| w.id == *id).cloned())
    }

    fn update(&self, id: &WidgetId, draft: WidgetDraft) -> StoreResult<Widget> {
        let mut store = self.store.write();

        let position = store
            .iter()
            .position(|w| w.id == *id)
            .ok_or_else(|| SimpleWidgetStore::not_found(id))?;

        let merged = store[position].merge(&draft);
        SimpleWidgetStore::push_out(&mut store, merged.z_index, Some(id));
        store[position] = merged.clone();

        log::debug!("updated widget {} to rank {}", merged.id, merged.z_index);
        Ok(merged)
    }

    fn find_all(&self, filter: &BoundsFilter, page: &PageRequest) -> StoreResult<Page> {
        let predicate = if filter.is_empty() {
            None
        } else {
            Some(filter.to_predicate()?)
        };
        let store = self.store.read();

        let total_count = match &predicate {
            None => store.len(),
            Some(predicate) => store.iter().filter(|w| predicate(*w)).count(),
        };
        if page.offset >= total_count {
            return Ok(Page::empty(total_count));
        }

        let items: Vec<Widget> = store
            .iter()
            .filter(|w| match &predicate {
                None => true,
                Some(predicate) => predicate(*w),
            })
            .sorted_by_key(|w| w.z_index)
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect();

        Ok(Page::new(items, total_count))
    }

    fn delete(&self, id: &WidgetId) -> StoreResult<()> {
        let mut store = self.store.write();

        let position = store
            .iter()
            .position(|w| w.id == *id)
            .ok_or_else(|| SimpleWidgetStore::not_found(id))?;
        store.remove(position);

        log::debug!("deleted widget {}", id);
        Ok(())
    }
}
