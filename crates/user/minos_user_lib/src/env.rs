//! Access to the arguments the loader passed at process entry.
//!
//! The loader enters user programs libgloss-style: `argc` in `a0` and a
//! NUL-terminated `argv` array in `a1`, with `argv[0]` the program path.
//! Programs must tolerate `argc == 0`; early boot environments pass nothing.

use core::{
    ffi::{CStr, c_char},
    slice,
    sync::atomic::{AtomicPtr, AtomicUsize, Ordering},
};

pub(crate) static ARGC: AtomicUsize = AtomicUsize::new(0);
pub(crate) static ARGV: AtomicPtr<*const c_char> = AtomicPtr::new(core::ptr::null_mut());

pub(crate) fn set_args(argc: usize, argv: *const *const c_char) {
    ARGC.store(argc, Ordering::Relaxed);
    ARGV.store(argv.cast_mut(), Ordering::Relaxed);
}

fn argv() -> &'static [*const c_char] {
    let argc = ARGC.load(Ordering::Relaxed);
    let argv = ARGV.load(Ordering::Relaxed);
    if argv.is_null() {
        return &[];
    }

    unsafe { slice::from_raw_parts(argv, argc) }
}

/// The program name, or `""` if the loader provided none.
#[must_use]
pub fn arg0() -> &'static str {
    argv()
        .first()
        .map_or("", |&arg| unsafe { CStr::from_ptr(arg) }.to_str().unwrap_or(""))
}

#[must_use]
pub fn args() -> Args {
    let args = argv();
    let mut iter = args.iter();
    iter.next(); // Skip the program name
    Args { iter }
}

pub struct Args {
    iter: slice::Iter<'static, *const c_char>,
}

impl Iterator for Args {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|&arg| unsafe { CStr::from_ptr(arg) }.to_str().unwrap_or(""))
    }
}

impl ExactSizeIterator for Args {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::{boxed::Box, ffi::CString, vec::Vec};

    use super::*;

    #[test]
    fn args_skip_the_program_name() {
        let owned: &'static [CString] = Box::leak(
            ["probe", "17", "abc"]
                .iter()
                .map(|s| CString::new(*s).unwrap())
                .collect::<Vec<_>>()
                .into_boxed_slice(),
        );
        let ptrs: &'static [*const c_char] = Box::leak(
            owned
                .iter()
                .map(|c| c.as_ptr())
                .collect::<Vec<_>>()
                .into_boxed_slice(),
        );

        set_args(ptrs.len(), ptrs.as_ptr());
        assert_eq!(arg0(), "probe");
        assert_eq!(args().len(), 2);
        assert_eq!(args().collect::<Vec<_>>(), ["17", "abc"]);

        // an empty argv is tolerated, not a panic
        set_args(0, core::ptr::null());
        assert_eq!(arg0(), "");
        assert_eq!(args().len(), 0);
    }
}
