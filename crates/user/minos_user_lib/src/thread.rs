use crate::{os::minos::syscall, time::Duration};

/// Puts the current process to sleep for the specified duration.
pub fn sleep(dur: Duration) {
    syscall::sleep(dur);
}
