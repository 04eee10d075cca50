#![no_std]

use minos_user_lib::os::minos::syscall;

fn main() {
    syscall::dump_registers();
}
