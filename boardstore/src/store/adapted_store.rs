use crate::errors::{ErrorKind, StoreError, StoreResult};
use crate::model::{BoundsFilter, Page, PageRequest, Widget, WidgetDraft, WidgetId};
use crate::store::adapter::{StoreAdapter, StoreAdapterProvider};
use crate::store::WidgetStoreProvider;
use itertools::Itertools;
use parking_lot::Mutex;

/// Widget store facade over a pluggable [`StoreAdapter`] backing structure.
///
/// # Concurrency
/// Mutations take one coarse, store-instance-scoped exclusive lock for the
/// whole collision-scan-and-shift sequence: a single push-out may touch any
/// number of stored widgets and must appear atomic with respect to other
/// mutations. Reads go straight to the adapter without taking the lock, so
/// they never wait on writers; a read racing an in-flight shift may observe
/// a transient, half-shifted rank space, which is the accepted tradeoff for
/// read throughput.
pub struct AdaptedWidgetStore {
    write_lock: Mutex<()>,
    adapter: StoreAdapter,
}

impl AdaptedWidgetStore {
    pub fn new(adapter: StoreAdapter) -> Self {
        AdaptedWidgetStore {
            write_lock: Mutex::new(()),
            adapter,
        }
    }

    fn not_found(id: &WidgetId) -> StoreError {
        log::error!("widget {} not found", id);
        StoreError::new(&format!("Widget {} not found", id), ErrorKind::NotFound)
    }
}

impl WidgetStoreProvider for AdaptedWidgetStore {
    fn add(&self, draft: WidgetDraft) -> StoreResult<Widget> {
        let _guard = self.write_lock.lock();

        let z_index = match draft.z_index {
            Some(z_index) => {
                self.adapter.push_out(z_index, None)?;
                z_index
            }
            None => self.adapter.max_z_index()? + 1,
        };

        let widget = Widget::from_draft(&draft, z_index);
        self.adapter.insert(widget.clone())?;
        log::debug!("added widget {} at rank {}", widget.id, z_index);
        Ok(widget)
    }

    fn find_one(&self, id: &WidgetId) -> StoreResult<Option<Widget>> {
        self.adapter.get(id)
    }

    fn update(&self, id: &WidgetId, draft: WidgetDraft) -> StoreResult<Widget> {
        let _guard = self.write_lock.lock();

        let persisted = self
            .adapter
            .get(id)?
            .ok_or_else(|| AdaptedWidgetStore::not_found(id))?;

        // snapshot replacement: the old version leaves every index before
        // the rank space is reshaped around the new one
        self.adapter.remove(&persisted)?;
        let merged = persisted.merge(&draft);
        self.adapter.push_out(merged.z_index, Some(id))?;
        self.adapter.insert(merged.clone())?;

        log::debug!("updated widget {} to rank {}", merged.id, merged.z_index);
        Ok(merged)
    }

    fn find_all(&self, filter: &BoundsFilter, page: &PageRequest) -> StoreResult<Page> {
        let predicate = if filter.is_empty() {
            None
        } else {
            Some(filter.to_predicate()?)
        };

        let total_count = match &predicate {
            None => self.adapter.size()?,
            Some(predicate) => self.adapter.scan()?.filter(|w| predicate(w)).count(),
        };
        if page.offset >= total_count {
            return Ok(Page::empty(total_count));
        }

        let scan = self.adapter.scan()?;
        let matched: Vec<Widget> = match &predicate {
            None => scan.collect(),
            Some(predicate) => scan.filter(|w| predicate(w)).collect(),
        };

        let items: Vec<Widget> = if self.adapter.is_rank_ordered() {
            matched
                .into_iter()
                .skip(page.offset)
                .take(page.limit)
                .collect()
        } else {
            matched
                .into_iter()
                .sorted_by_key(|w| w.z_index)
                .skip(page.offset)
                .take(page.limit)
                .collect()
        };

        Ok(Page::new(items, total_count))
    }

    fn delete(&self, id: &WidgetId) -> StoreResult<()> {
        let _guard = self.write_lock.lock();

        let widget = self
            .adapter
            .get(id)?
            .ok_or_else(|| AdaptedWidgetStore::not_found(id))?;
        if !self.adapter.remove(&widget)? {
            return Err(AdaptedWidgetStore::not_found(id));
        }

        log::debug!("deleted widget {}", id);
        Ok(())
    }
}
