//! Boot smoke test: prove that process startup, register access, and the
//! console output path work end to end.

#![no_std]

use minos_user_lib::{arch, println};

fn main() {
    let sp = arch::stack_pointer();
    println!("Stack is at {sp:#x}");
    println!("Hello world");
}
