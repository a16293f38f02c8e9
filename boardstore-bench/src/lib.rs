//! Load driver for the widget store: weighted operation mixes, random but
//! valid widget/filter generation, and per-action statistics.

pub mod action;
pub mod data_gen;
pub mod driver;
pub mod load_profile;
pub mod stores;

/// Installs the env_logger backend once per process; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(false).try_init();
}
