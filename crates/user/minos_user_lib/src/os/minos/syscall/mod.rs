//! Safe wrappers over the raw syscall layer.

use core::{convert::Infallible, ffi::CStr, time::Duration};

pub use minos_syscall::{SyscallCode, TIMEBASE_FREQ};
use minos_syscall::{UserRef, error::SyscallError, syscall};
use minos_types::process::ProcId;

use self::ffi::SyscallExt as _;
use crate::error::MinosError;

pub mod ffi;

/// Writes one byte to the kernel console.
pub fn put_char(b: u8) {
    syscall::PutChar::call((b,));
}

/// Asks the kernel to print the calling process's trap-frame registers.
pub fn dump_registers() {
    syscall::DumpRegisters::call(());
}

pub fn exit(status: i32) -> ! {
    syscall::Exit::call((status,));
    unreachable!()
}

#[must_use]
pub fn getpid() -> ProcId {
    syscall::GetPid::call(())
}

/// Sleeps for at least `dur`, rounded down to the mtime tick.
pub fn sleep(dur: Duration) {
    syscall::Sleep::call((crate::time::duration_to_ticks(dur),));
}

/// Machine uptime as reported by the mtime timer.
#[must_use]
pub fn uptime() -> Duration {
    crate::time::ticks_to_duration(syscall::GetTime::call(()))
}

/// Replaces the current process image with the program at `path`.
///
/// The kernel's loader takes no argv today, so none is passed.
pub fn exec(path: &CStr) -> Result<Infallible, MinosError> {
    match syscall::Execv::try_call((UserRef::new(path).cast(), 0))? {
        Ok(never) => match never {},
        Err(SyscallError::Failed) => Err(MinosError::ProgramNotFound),
    }
}
