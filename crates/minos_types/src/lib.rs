//! Plain types shared between the minos kernel and its userland.

#![no_std]

pub mod process;
