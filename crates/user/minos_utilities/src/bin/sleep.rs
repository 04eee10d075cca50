#![no_std]

use core::time::Duration;

use minos_user_lib::{env, thread};
use minos_utilities::{try_or_exit, usage_and_exit};

fn main() {
    let mut args = env::args();

    if args.len() != 1 {
        usage_and_exit!("seconds");
    }

    let sec: u64 = try_or_exit!(
        args.next().unwrap().parse(),
        e => "invalid seconds: {e}"
    );

    thread::sleep(Duration::from_secs(sec));
}
