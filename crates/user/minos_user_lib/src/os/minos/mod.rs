//! minos-specific extensions and the syscall surface.

pub mod syscall;
