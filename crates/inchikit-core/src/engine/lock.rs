use std::sync::{Mutex, PoisonError};
use tracing::trace;

/// Serializes every call into the native toolkit, which keeps global state and is
/// not re-entrant. Shared by all loaded libraries in the process.
static NATIVE_CALL_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` while holding the process-wide native call lock.
///
/// The guard is dropped on every exit path, including unwinding. A poisoned lock is
/// recovered because it protects no data of its own.
pub(crate) fn serialized<R>(operation: &'static str, f: impl FnOnce() -> R) -> R {
    let _guard = NATIVE_CALL_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    trace!(operation, "Acquired native call lock");
    f()
}
