//! Time-bounded calls to blocking capabilities
//!
//! The call runs on a helper thread; the caller waits at most `timeout`.
//! A call that overruns is abandoned, not cancelled: its thread finishes
//! on its own and the result is discarded.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::core::error::CapabilityError;

/// Run `call` on a helper thread and wait up to `timeout` for its result
///
/// A panic inside `call` is reported as [`CapabilityError::Transport`].
pub fn call_with_timeout<T, F>(timeout: Duration, call: F) -> Result<T, CapabilityError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, CapabilityError> + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);

    thread::Builder::new()
        .name("tasklens-capability".to_string())
        .spawn(move || {
            // receiver may be gone after a timeout
            let _ = tx.send(call());
        })
        .map_err(|e| CapabilityError::Unavailable(format!("cannot spawn worker: {e}")))?;

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(CapabilityError::Timeout(timeout)),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            Err(CapabilityError::Transport("capability call panicked".to_string()))
        },
    }
}
