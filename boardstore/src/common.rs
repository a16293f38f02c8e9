use parking_lot::RwLock;
use std::sync::Arc;

/// Shared read-write cell used where interior state must stay cloneable.
pub type Atomic<T> = Arc<RwLock<T>>;

#[inline]
pub fn atomic<T>(t: T) -> Atomic<T> {
    Arc::new(RwLock::new(t))
}
