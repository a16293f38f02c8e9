//! Store factory for the configurations under measurement.

use boardstore::store::WidgetStore;

/// Every store configuration the benchmarks compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    Simple,
    Map,
    Tree,
    Combined,
    Vec,
}

impl StoreType {
    pub const ALL: [StoreType; 5] = [
        StoreType::Simple,
        StoreType::Map,
        StoreType::Tree,
        StoreType::Combined,
        StoreType::Vec,
    ];
}

pub fn create_store(store_type: StoreType) -> WidgetStore {
    match store_type {
        StoreType::Simple => WidgetStore::simple(),
        StoreType::Map => WidgetStore::map_backed(),
        StoreType::Tree => WidgetStore::tree_backed(),
        StoreType::Combined => WidgetStore::combined_backed(),
        StoreType::Vec => WidgetStore::vec_backed(),
    }
}
