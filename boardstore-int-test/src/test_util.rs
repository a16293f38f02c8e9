use boardstore::model::{BoundsFilter, PageRequest, WidgetDraft};
use boardstore::store::{WidgetStore, WidgetStoreProvider};
use ctor::ctor;

#[ctor]
fn init_logging() {
    colog::init();
}

/// Every store configuration under test, labelled for assertion messages.
///
/// The same scenarios run against all five: adapter choice must never be
/// observable through the store's behavior.
pub fn all_stores() -> Vec<(&'static str, WidgetStore)> {
    vec![
        ("simple", WidgetStore::simple()),
        ("map", WidgetStore::map_backed()),
        ("tree", WidgetStore::tree_backed()),
        ("combined", WidgetStore::combined_backed()),
        ("vec", WidgetStore::vec_backed()),
    ]
}

pub fn draft_on_top() -> WidgetDraft {
    WidgetDraft::new(0, 0, 10, 10)
}

pub fn draft_at(z_index: i32) -> WidgetDraft {
    draft_on_top().z_index(z_index)
}

/// All stored ranks in ascending order.
pub fn ranks(store: &WidgetStore) -> Vec<i32> {
    store
        .find_all(&BoundsFilter::new(), &PageRequest::new(0, usize::MAX))
        .expect("unfiltered scan cannot fail")
        .items
        .iter()
        .map(|w| w.z_index)
        .collect()
}
