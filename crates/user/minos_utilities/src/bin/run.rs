#![no_std]

use core::ffi::CStr;

use arrayvec::ArrayVec;
use minos_user_lib::{env, process};
use minos_utilities::{exit, try_or_exit, usage_and_exit};

const PATH_MAX: usize = 128;

fn main() {
    let mut args = env::args();

    if args.len() != 1 {
        usage_and_exit!("program");
    }
    let path = args.next().unwrap();

    let mut buf = ArrayVec::<u8, PATH_MAX>::new();
    if buf.try_extend_from_slice(path.as_bytes()).is_err() || buf.try_push(0).is_err() {
        exit!("path too long: {path}");
    }
    let cpath = try_or_exit!(
        CStr::from_bytes_with_nul(&buf),
        e => "invalid path: {e}"
    );

    match process::exec(cpath) {
        Ok(never) => match never {},
        Err(e) => exit!("exec {path} failed: {e}"),
    }
}
