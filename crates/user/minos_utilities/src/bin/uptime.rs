#![no_std]

use minos_user_lib::{os::minos::syscall, println};

fn main() {
    let up = syscall::uptime();
    println!("up {}.{:03}s", up.as_secs(), up.subsec_millis());
}
