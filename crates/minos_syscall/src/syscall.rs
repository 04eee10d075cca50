//! Marker types for the syscalls userland issues.
//!
//! Graphics, input, and block/fs calls exist in the kernel's table but are
//! driver-facing; they get no typed surface here.

use core::convert::Infallible;

use minos_types::process::ProcId;

use crate::{Syscall, SyscallCode, UserRef, error::SyscallError};

/// Writes one byte to the kernel console.
#[derive(Debug)]
pub enum PutChar {}

impl Syscall for PutChar {
    const CODE: SyscallCode = SyscallCode::PutChar;
    type Arg = (u8,);
    type Return = ();
}

/// Prints the calling process's trap-frame registers on the console.
#[derive(Debug)]
pub enum DumpRegisters {}

impl Syscall for DumpRegisters {
    const CODE: SyscallCode = SyscallCode::DumpRegisters;
    type Arg = ();
    type Return = ();
}

/// Puts the calling process to sleep for a number of mtime ticks.
#[derive(Debug)]
pub enum Sleep {}

impl Syscall for Sleep {
    const CODE: SyscallCode = SyscallCode::Sleep;
    type Arg = (usize,);
    type Return = ();
}

/// Replaces the process image with the program at a NUL-terminated path.
///
/// Returns only on failure; the second argument is the address of the argv
/// array handed to the new image.
#[derive(Debug)]
pub enum Execv {}

impl Syscall for Execv {
    const CODE: SyscallCode = SyscallCode::Execv;
    type Arg = (UserRef<u8>, usize);
    type Return = Result<Infallible, SyscallError>;
}

/// Terminates the calling process. The status travels in `a0`.
#[derive(Debug)]
pub enum Exit {}

impl Syscall for Exit {
    const CODE: SyscallCode = SyscallCode::Exit;
    type Arg = (i32,);
    type Return = Infallible;
}

/// Returns the calling process's ID.
#[derive(Debug)]
pub enum GetPid {}

impl Syscall for GetPid {
    const CODE: SyscallCode = SyscallCode::GetPid;
    type Arg = ();
    type Return = ProcId;
}

/// Returns the machine timer (mtime) value in raw ticks.
#[derive(Debug)]
pub enum GetTime {}

impl Syscall for GetTime {
    const CODE: SyscallCode = SyscallCode::GetTime;
    type Arg = ();
    type Return = u64;
}
