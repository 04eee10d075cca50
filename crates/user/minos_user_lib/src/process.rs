use core::{convert::Infallible, ffi::CStr};

pub use minos_types::process::ProcId;

use crate::{error::MinosError, os::minos::syscall};

/// Terminates the current process with the given status.
///
/// The kernel tears the process down regardless of the value; the status is
/// carried in the ABI for the invoking environment's benefit.
pub fn exit(status: i32) -> ! {
    syscall::exit(status)
}

/// Returns the current process's ID.
#[must_use]
pub fn id() -> ProcId {
    syscall::getpid()
}

/// Replaces the current process image with the program at `path`.
/// Returns only on failure.
pub fn exec(path: &CStr) -> Result<Infallible, MinosError> {
    syscall::exec(path)
}
