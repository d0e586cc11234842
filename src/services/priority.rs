use crate::domain::constants::WORKER_NICENESS;

/// Drops the calling thread to the lowest scheduling priority.
///
/// On Linux niceness is per thread and a spawned child inherits the value of
/// the thread that forked it, so calling this before each spawn covers both
/// the worker and the solver process. Failures are logged and ignored.
#[cfg(unix)]
pub fn lower_current_thread() {
    // SAFETY: setpriority only reads its integer arguments.
    let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS, 0, WORKER_NICENESS) };
    if rc != 0 {
        tracing::debug!(
            error = %std::io::Error::last_os_error(),
            "could not lower worker priority"
        );
    }
}

#[cfg(not(unix))]
pub fn lower_current_thread() {
    tracing::trace!(niceness = WORKER_NICENESS, "priority lowering unsupported here");
}
