/// A failure reported by the kernel.
///
/// The kernel carries no error code across the boundary; it signals failure
/// by returning `usize::MAX` in `a0` (only `Execv` does so today).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyscallError {
    #[error("system call failed")]
    Failed,
}
