//! The minos syscall ABI.
//!
//! The kernel follows libgloss numbering where a number exists for the
//! operation: the syscall number goes in `a7`, arguments in `a0..a6`, and the
//! result comes back in `a0`. Failure is reported as `usize::MAX` in `a0`.
//!
//! Argument and return values are described in the type system: each syscall
//! is a marker type implementing [`Syscall`], and the values crossing the
//! boundary implement [`RegisterValue`], which encodes them into (and decodes
//! them from) a [`Register`] image of `N` machine words.

#![no_std]

use core::{convert::Infallible, fmt, marker::PhantomData, num::TryFromIntError, ptr};

use strum::FromRepr;

pub mod error;
mod register;
pub mod syscall;

/// Machine timer ticks per second.
///
/// `GetTime` returns raw mtime ticks and `Sleep` consumes tick counts; this
/// is the conversion base for both.
pub const TIMEBASE_FREQ: u64 = 10_000_000;

/// The kernel's syscall number table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(usize)]
pub enum SyscallCode {
    PutChar = 2,
    DumpRegisters = 8,
    Sleep = 10,
    Execv = 11,
    Read = 63,
    Exit = 93,
    GetPid = 172,
    BlockRead = 180,
    GetFramebuffer = 1000,
    TransferRectangleAndInvalidate = 1001,
    WaitForKeyboardEvents = 1002,
    WaitForAbsEvents = 1004,
    GetTime = 1062,
}

pub trait Syscall {
    const CODE: SyscallCode;
    type Arg: RegisterValue;
    type Return: RegisterValue;
}

/// An address-only reference to caller memory passed to the kernel.
///
/// The length is not transported; the pointee's own framing (e.g. a NUL
/// terminator) delimits it.
#[derive(Debug)]
pub struct UserRef<T>
where
    T: ?Sized + 'static,
{
    addr: usize,
    _phantom: PhantomData<&'static T>,
}

impl<T> UserRef<T>
where
    T: ?Sized,
{
    pub fn new(r: &T) -> Self {
        Self {
            addr: ptr::from_ref(r).addr(),
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub fn addr(&self) -> usize {
        self.addr
    }

    #[must_use]
    pub fn cast<U>(&self) -> UserRef<U> {
        UserRef {
            addr: self.addr,
            _phantom: PhantomData,
        }
    }
}

pub type ArgType<T> = <T as Syscall>::Arg;
pub type ArgTypeRepr<T> = <<T as Syscall>::Arg as RegisterValue>::Repr;
pub type ReturnType<T> = <T as Syscall>::Return;
pub type ReturnTypeRepr<T> = <<T as Syscall>::Return as RegisterValue>::Repr;

/// The register image of a value of type `T`: `N` machine words as they
/// appear in `a0..aN` around an `ecall`.
#[must_use]
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub struct Register<T, const N: usize> {
    pub a: [usize; N],
    _phantom: PhantomData<T>,
}

impl<T, const N: usize> Copy for Register<T, N> {}
impl<T, const N: usize> Clone for Register<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterDecodeError {
    #[error("int conversion: {0}")]
    IntConversion(#[from] TryFromIntError),
    #[error("invalid result designator: {0:#x}")]
    InvalidResultDesignator(usize),
}

impl From<Infallible> for RegisterDecodeError {
    fn from(_: Infallible) -> Self {
        unreachable!()
    }
}

pub trait RegisterValue
where
    Self: Sized,
{
    type DecodeError: fmt::Debug;
    type Repr;

    fn encode(self) -> Self::Repr;
    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_table_matches_kernel_numbers() {
        assert_eq!(SyscallCode::from_repr(2), Some(SyscallCode::PutChar));
        assert_eq!(SyscallCode::from_repr(8), Some(SyscallCode::DumpRegisters));
        assert_eq!(SyscallCode::from_repr(10), Some(SyscallCode::Sleep));
        assert_eq!(SyscallCode::from_repr(11), Some(SyscallCode::Execv));
        assert_eq!(SyscallCode::from_repr(63), Some(SyscallCode::Read));
        assert_eq!(SyscallCode::from_repr(93), Some(SyscallCode::Exit));
        assert_eq!(SyscallCode::from_repr(172), Some(SyscallCode::GetPid));
        assert_eq!(SyscallCode::from_repr(1062), Some(SyscallCode::GetTime));
        assert_eq!(SyscallCode::from_repr(0), None);
        assert_eq!(SyscallCode::from_repr(64), None);
    }

    #[test]
    fn user_ref_carries_the_address() {
        let bytes = *b"probe\0";
        let r = UserRef::new(&bytes[0]);
        assert_eq!(r.addr(), core::ptr::from_ref(&bytes[0]).addr());
        assert_eq!(r.cast::<u32>().addr(), r.addr());
    }
}
