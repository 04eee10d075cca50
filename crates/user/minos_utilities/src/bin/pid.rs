#![no_std]

use minos_user_lib::{println, process};

fn main() {
    println!("{}", process::id());
}
