//! Criterion benchmarks comparing store configurations under the named
//! load profiles, plus a contended multi-threaded mix.

use boardstore_bench::driver::StoreDriver;
use boardstore_bench::init_logging;
use boardstore_bench::load_profile::{LoadProfile, LoadProfileType};
use boardstore_bench::stores::{create_store, StoreType};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::thread;

const POPULATION: usize = 1_000;
const OPS_PER_SAMPLE: usize = 200;

fn bench_load_profiles(c: &mut Criterion) {
    init_logging();
    let mut group = c.benchmark_group("Store/Profiles");
    group.sample_size(10);

    for &profile_type in LoadProfileType::ALL.iter() {
        for &store_type in StoreType::ALL.iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", profile_type), format!("{:?}", store_type)),
                &(profile_type, store_type),
                |b, &(profile_type, store_type)| {
                    b.iter_with_setup(
                        || {
                            let store = create_store(store_type);
                            let mut driver =
                                StoreDriver::new(store, LoadProfile::for_type(profile_type));
                            driver.populate(POPULATION).unwrap();
                            driver
                        },
                        |mut driver| {
                            for _ in 0..OPS_PER_SAMPLE {
                                driver.execute_one().unwrap();
                            }
                            driver.log_statistics();
                            black_box(driver)
                        },
                    );
                },
            );
        }
    }
    group.finish();
}

fn bench_concurrent_full_mix(c: &mut Criterion) {
    init_logging();
    let mut group = c.benchmark_group("Store/Concurrency");
    group.sample_size(10);

    for &thread_count in [2, 4, 8].iter() {
        if thread_count > num_cpus::get() * 2 {
            continue;
        }

        for &store_type in StoreType::ALL.iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("{}_threads", thread_count), format!("{:?}", store_type)),
                &(thread_count, store_type),
                |b, &(thread_count, store_type)| {
                    b.iter_with_setup(
                        || {
                            let store = create_store(store_type);
                            // one driver per thread over the shared store,
                            // each owning its slice of the population
                            (0..thread_count)
                                .map(|thread_id| {
                                    let mut driver = StoreDriver::with_seed(
                                        store.clone(),
                                        LoadProfile::for_type(LoadProfileType::Full),
                                        thread_id as u64 + 1,
                                    );
                                    driver.populate(POPULATION / thread_count).unwrap();
                                    driver
                                })
                                .collect::<Vec<_>>()
                        },
                        |drivers| {
                            let handles: Vec<_> = drivers
                                .into_iter()
                                .map(|mut driver| {
                                    thread::spawn(move || {
                                        for _ in 0..OPS_PER_SAMPLE {
                                            driver.execute_one().unwrap();
                                        }
                                    })
                                })
                                .collect();
                            for handle in handles {
                                handle.join().unwrap();
                            }
                        },
                    );
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_load_profiles, bench_concurrent_full_mix);
criterion_main!(benches);
