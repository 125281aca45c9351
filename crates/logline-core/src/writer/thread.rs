//! Numeric thread ids for trace records

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_ID.fetch_add(1, Ordering::Relaxed);
}

/// Process-unique id of the calling thread, stable for its lifetime
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| *id)
}
