//! The `ecall` boundary. The syscall number travels in `a7`, arguments in
//! `a0..`, and the single result register comes back in `a0`.

pub use minos_syscall::{SyscallCode, syscall};
use minos_syscall::{Register, RegisterValue, ReturnTypeRepr, Syscall};

trait CallWithArg {
    fn call_with_arg(self, code: SyscallCode) -> usize;
}

impl<T> CallWithArg for Register<T, 0> {
    #[cfg(not(target_arch = "riscv64"))]
    fn call_with_arg(self, _code: SyscallCode) -> usize {
        unimplemented!()
    }

    #[cfg(target_arch = "riscv64")]
    fn call_with_arg(self, code: SyscallCode) -> usize {
        let [] = self.a;
        let out;
        unsafe {
            core::arch::asm!(
                "ecall",
                in("a7") code as usize,
                lateout("a0") out,
            );
        }
        out
    }
}

impl<T> CallWithArg for Register<T, 1> {
    #[cfg(not(target_arch = "riscv64"))]
    fn call_with_arg(self, _code: SyscallCode) -> usize {
        unimplemented!()
    }

    #[cfg(target_arch = "riscv64")]
    fn call_with_arg(self, code: SyscallCode) -> usize {
        let [a0] = self.a;
        let out;
        unsafe {
            core::arch::asm!(
                "ecall",
                in("a0") a0,
                in("a7") code as usize,
                lateout("a0") out,
            );
        }
        out
    }
}

impl<T> CallWithArg for Register<T, 2> {
    #[cfg(not(target_arch = "riscv64"))]
    fn call_with_arg(self, _code: SyscallCode) -> usize {
        unimplemented!()
    }

    #[cfg(target_arch = "riscv64")]
    fn call_with_arg(self, code: SyscallCode) -> usize {
        let [a0, a1] = self.a;
        let out;
        unsafe {
            core::arch::asm!(
                "ecall",
                in("a0") a0,
                in("a1") a1,
                in("a7") code as usize,
                lateout("a0") out,
            );
        }
        out
    }
}

trait FromA0 {
    fn from_a0(a0: usize) -> Self;
}

impl<T> FromA0 for Register<T, 0> {
    fn from_a0(_a0: usize) -> Self {
        Self::new([])
    }
}

impl<T> FromA0 for Register<T, 1> {
    fn from_a0(a0: usize) -> Self {
        Self::new([a0])
    }
}

pub trait SyscallExt: Syscall {
    fn call_raw(arg: Self::Arg) -> ReturnTypeRepr<Self>;

    fn try_call(
        arg: Self::Arg,
    ) -> Result<Self::Return, <Self::Return as RegisterValue>::DecodeError> {
        let ret = Self::call_raw(arg);
        Self::Return::try_decode(ret)
    }

    fn call(arg: Self::Arg) -> Self::Return {
        Self::try_call(arg).unwrap()
    }
}

macro_rules! syscall {
    ($name:ident) => {
        impl SyscallExt for syscall::$name {
            fn call_raw(arg: Self::Arg) -> ReturnTypeRepr<Self> {
                FromA0::from_a0(Self::Arg::encode(arg).call_with_arg(Self::CODE))
            }
        }
    };
}

syscall!(PutChar);
syscall!(DumpRegisters);
syscall!(Sleep);
syscall!(Execv);
syscall!(Exit);
syscall!(GetPid);
syscall!(GetTime);
