//! The minos userland runtime: process entry, console output, and safe
//! wrappers over the syscall layer.

#![feature(lang_items)]
#![allow(internal_features)]
#![no_std]

#[macro_use]
mod macros;

pub mod arch;
pub mod env;
pub mod error;
pub mod io;
pub mod os;
pub mod process;
pub mod thread;
pub mod time;

#[cfg(all(feature = "lang_items", not(feature = "test")))]
mod entry {
    use crate::{env, process};

    // The Rust entry point `lang_start` defines the `main` function, but the
    // kernel's ELF loader jumps to `_start`. Assembly defines `_start` as an
    // alias for `main`.
    #[cfg(not(debug_assertions))]
    core::arch::global_asm!(".global _start", ".global main", ".equiv _start, main");

    // At low optimization levels the `.equiv` alias has produced an empty ELF
    // entry point, so debug builds define `_start` explicitly.
    #[cfg(debug_assertions)]
    #[unsafe(no_mangle)]
    fn _start(argc: isize, argv: *const *const u8, auxv: u8) -> ! {
        unsafe extern "C" {
            fn main(argc: isize, argv: *const *const u8, auxv: u8) -> !;
        }

        unsafe { main(argc, argv, auxv) }
    }

    #[lang = "start"]
    fn lang_start<T>(main: fn() -> T, argc: isize, argv: *const *const u8, _: u8) -> isize {
        assert!(argc >= 0, "argc should be greater than or equal to 0");
        env::set_args(argc.cast_unsigned(), argv.cast());
        main();
        process::exit(0);
    }
}

#[cfg(all(feature = "lang_items", not(feature = "test")))]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    eprintln!("panic: {info}");
    process::exit(1);
}
