//! Adapter choice is a performance detail: identical operation sequences
//! must yield identical observable results on every store configuration.

use boardstore::model::{BoundsFilter, PageRequest, WidgetDraft, WidgetId};
use boardstore::store::{WidgetStore, WidgetStoreProvider};
use boardstore_int_test::test_util::{all_stores, ranks};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One store operation with widget identity expressed as an ordinal into
/// the list of live widgets, so the same logical sequence can be replayed
/// against stores that each assign their own ids.
#[derive(Debug, Clone)]
enum Op {
    Add(WidgetDraft),
    UpdateNth(usize, WidgetDraft),
    DeleteNth(usize),
    FindOneNth(usize),
    FindAll(BoundsFilter, PageRequest),
    UpdateMissing(WidgetDraft),
    DeleteMissing,
}

/// Everything a caller can observe from one operation, with ids and
/// timestamps erased.
#[derive(Debug, PartialEq)]
enum Observation {
    Added { z_index: i32 },
    Updated { z_index: i32 },
    Deleted,
    NotFound,
    Found { rect: (i32, i32, i32, i32), z_index: i32 },
    Missing,
    Page { total: usize, items: Vec<(i32, i32, i32, i32, i32)> },
}

fn random_draft(rng: &mut StdRng, allow_missing_rank: bool) -> WidgetDraft {
    let draft = WidgetDraft::new(
        rng.gen_range(0..100),
        rng.gen_range(0..100),
        rng.gen_range(1..=20),
        rng.gen_range(1..=20),
    );
    if allow_missing_rank && rng.gen_bool(0.5) {
        draft
    } else {
        draft.z_index(rng.gen_range(0..40))
    }
}

fn random_filter(rng: &mut StdRng) -> BoundsFilter {
    if rng.gen_bool(0.5) {
        BoundsFilter::new()
    } else {
        BoundsFilter::bounded(
            rng.gen_range(0..50),
            rng.gen_range(50..150),
            rng.gen_range(0..50),
            rng.gen_range(50..150),
        )
    }
}

fn random_ops(seed: u64, count: usize) -> Vec<Op> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| match rng.gen_range(0..100) {
            0..=29 => Op::Add(random_draft(&mut rng, true)),
            30..=49 => Op::UpdateNth(rng.gen_range(0..1000), random_draft(&mut rng, true)),
            50..=59 => Op::DeleteNth(rng.gen_range(0..1000)),
            60..=74 => Op::FindOneNth(rng.gen_range(0..1000)),
            75..=94 => Op::FindAll(
                random_filter(&mut rng),
                PageRequest::new(rng.gen_range(0..20), rng.gen_range(1..=10)),
            ),
            95..=97 => Op::UpdateMissing(random_draft(&mut rng, false)),
            _ => Op::DeleteMissing,
        })
        .collect()
}

fn erase(widget: &boardstore::model::Widget) -> (i32, i32, i32, i32, i32) {
    (widget.x, widget.y, widget.width, widget.height, widget.z_index)
}

fn replay(store: &WidgetStore, ops: &[Op]) -> Vec<Observation> {
    let mut live: Vec<WidgetId> = Vec::new();

    ops.iter()
        .map(|op| match op {
            Op::Add(draft) => {
                let widget = store.add(draft.clone()).expect("add never fails");
                live.push(widget.id);
                Observation::Added {
                    z_index: widget.z_index,
                }
            }
            Op::UpdateNth(nth, draft) => {
                if live.is_empty() {
                    return Observation::NotFound;
                }
                let id = live[nth % live.len()];
                let updated = store.update(&id, draft.clone()).expect("live id");
                Observation::Updated {
                    z_index: updated.z_index,
                }
            }
            Op::DeleteNth(nth) => {
                if live.is_empty() {
                    return Observation::NotFound;
                }
                let id = live.remove(nth % live.len());
                store.delete(&id).expect("live id");
                Observation::Deleted
            }
            Op::FindOneNth(nth) => {
                if live.is_empty() {
                    return Observation::Missing;
                }
                let id = live[nth % live.len()];
                match store.find_one(&id).expect("lookup never fails") {
                    Some(widget) => Observation::Found {
                        rect: (widget.x, widget.y, widget.width, widget.height),
                        z_index: widget.z_index,
                    },
                    None => Observation::Missing,
                }
            }
            Op::FindAll(filter, page) => {
                let result = store.find_all(filter, page).expect("query never fails");
                Observation::Page {
                    total: result.total_count,
                    items: result.items.iter().map(erase).collect(),
                }
            }
            Op::UpdateMissing(draft) => {
                let err = store
                    .update(&WidgetId::new(), draft.clone())
                    .expect_err("unknown id");
                assert_eq!(err.kind(), &boardstore::errors::ErrorKind::NotFound);
                Observation::NotFound
            }
            Op::DeleteMissing => {
                let err = store.delete(&WidgetId::new()).expect_err("unknown id");
                assert_eq!(err.kind(), &boardstore::errors::ErrorKind::NotFound);
                Observation::NotFound
            }
        })
        .collect()
}

#[test]
fn test_identical_observations_across_all_backings() {
    for seed in [1, 2, 42] {
        let ops = random_ops(seed, 400);
        let stores = all_stores();

        let (baseline_name, baseline) = &stores[0];
        let expected = replay(baseline, &ops);

        for (name, store) in &stores[1..] {
            let observed = replay(store, &ops);
            assert_eq!(
                observed, expected,
                "seed {}: {} diverges from {}",
                seed, name, baseline_name
            );
        }
    }
}

#[test]
fn test_ranks_stay_distinct_under_random_mutation() {
    for (name, store) in all_stores() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut live: Vec<WidgetId> = Vec::new();

        for _ in 0..300 {
            match rng.gen_range(0..10) {
                0..=5 => {
                    let widget = store.add(random_draft(&mut rng, true)).unwrap();
                    live.push(widget.id);
                }
                6..=8 if !live.is_empty() => {
                    let nth = rng.gen_range(0..live.len());
                    store.update(&live[nth], random_draft(&mut rng, true)).unwrap();
                }
                9 if !live.is_empty() => {
                    let nth = rng.gen_range(0..live.len());
                    let id = live.remove(nth);
                    store.delete(&id).unwrap();
                }
                _ => {}
            }

            // every op boundary is a quiescent point
            let current = ranks(&store);
            let mut deduped = current.clone();
            deduped.dedup();
            assert_eq!(current, deduped, "store {} produced colliding ranks", name);
            assert_eq!(current.len(), live.len(), "store {} lost widgets", name);
        }
    }
}
