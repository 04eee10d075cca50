//! Raw machine-state reads. Everything here is platform-specific and
//! non-portable; the rest of the library goes through this module.

/// Reads the current stack-pointer register.
///
/// Inlined so the value is the caller's own `sp`; at worst the compiler
/// inserts one frame for the surrounding call, which is accepted slack for
/// diagnostic use.
#[cfg(target_arch = "riscv64")]
#[must_use]
#[inline(always)]
pub fn stack_pointer() -> usize {
    let sp: usize;
    unsafe {
        core::arch::asm!(
            "mv {}, sp",
            out(reg) sp,
            options(nomem, nostack, preserves_flags),
        );
    }
    sp
}

#[cfg(not(target_arch = "riscv64"))]
#[must_use]
pub fn stack_pointer() -> usize {
    unimplemented!()
}
