//! Seeded operation driver replaying a load profile against one store.

use crate::action::ActionType;
use crate::data_gen::{random_draft, random_filter, random_page};
use crate::load_profile::LoadProfile;
use boardstore::errors::StoreResult;
use boardstore::model::WidgetId;
use boardstore::store::{WidgetStore, WidgetStoreProvider};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Default seed: every run replays the same operation stream.
pub const DEFAULT_SEED: u64 = 1;

/// Drives one store with a weighted operation mix.
///
/// The driver tracks the ids of live widgets so updates and deletes always
/// target a stored widget, while half of the lookups deliberately miss.
/// Per-action counts are kept for teardown logging.
pub struct StoreDriver {
    store: WidgetStore,
    load_profile: LoadProfile,
    rng: StdRng,
    ids: Vec<WidgetId>,
    statistics: HashMap<ActionType, u64>,
}

impl StoreDriver {
    pub fn new(store: WidgetStore, load_profile: LoadProfile) -> Self {
        StoreDriver::with_seed(store, load_profile, DEFAULT_SEED)
    }

    pub fn with_seed(store: WidgetStore, load_profile: LoadProfile, seed: u64) -> Self {
        StoreDriver {
            store,
            load_profile,
            rng: StdRng::seed_from_u64(seed),
            ids: Vec::new(),
            statistics: HashMap::new(),
        }
    }

    /// Fills the store with randomly ranked widgets, exercising the
    /// push-out path heavily: the rank band is much narrower than the
    /// widget count.
    pub fn populate(&mut self, count: usize) -> StoreResult<()> {
        for _ in 0..count {
            let widget = self.store.add(random_draft(&mut self.rng, false))?;
            self.ids.push(widget.id);
        }
        Ok(())
    }

    /// Runs one operation drawn from the load profile.
    pub fn execute_one(&mut self) -> StoreResult<ActionType> {
        let action = self.load_profile.next_action(&mut self.rng);
        *self.statistics.entry(action).or_insert(0) += 1;

        match action {
            ActionType::Add => {
                let widget = self.store.add(random_draft(&mut self.rng, true))?;
                self.ids.push(widget.id);
            }
            ActionType::FindOne => {
                let miss = self.rng.gen_bool(0.5);
                let id = self.pick_id(miss);
                let _ = self.store.find_one(&id)?;
            }
            ActionType::Update => {
                if !self.ids.is_empty() {
                    let id = self.pick_id(false);
                    let draft = random_draft(&mut self.rng, false);
                    self.store.update(&id, draft)?;
                }
            }
            ActionType::Delete => {
                if !self.ids.is_empty() {
                    let position = self.rng.gen_range(0..self.ids.len());
                    let id = self.ids.swap_remove(position);
                    self.store.delete(&id)?;
                }
            }
            ActionType::FindAll => {
                let filter = random_filter(&mut self.rng);
                let page = random_page(&mut self.rng);
                let _ = self.store.find_all(&filter, &page)?;
            }
        }
        Ok(action)
    }

    pub fn statistics(&self) -> &HashMap<ActionType, u64> {
        &self.statistics
    }

    pub fn log_statistics(&self) {
        log::info!("statistics: {:?}", self.statistics);
    }

    /// An id to query: a live one, or a freshly generated guaranteed miss.
    fn pick_id(&mut self, miss: bool) -> WidgetId {
        if miss || self.ids.is_empty() {
            WidgetId::new()
        } else {
            self.ids[self.rng.gen_range(0..self.ids.len())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_profile::LoadProfileType;
    use crate::stores::{create_store, StoreType};

    #[test]
    fn test_populate_tracks_ids() {
        let store = create_store(StoreType::Combined);
        let mut driver = StoreDriver::new(store, LoadProfile::for_type(LoadProfileType::Full));

        driver.populate(100).unwrap();
        assert_eq!(driver.ids.len(), 100);
    }

    #[test]
    fn test_full_profile_runs_without_failures() {
        let store = create_store(StoreType::Map);
        let mut driver = StoreDriver::new(store, LoadProfile::for_type(LoadProfileType::Full));
        driver.populate(200).unwrap();

        for _ in 0..500 {
            driver.execute_one().unwrap();
        }
        let executed: u64 = driver.statistics().values().sum();
        assert_eq!(executed, 500);
    }

    #[test]
    fn test_delete_add_profile_never_underflows() {
        let store = create_store(StoreType::Simple);
        let mut driver =
            StoreDriver::new(store, LoadProfile::for_type(LoadProfileType::DeleteAdd));

        // starts empty on purpose: deletes drawn before any add are skipped
        for _ in 0..200 {
            driver.execute_one().unwrap();
        }
    }
}
