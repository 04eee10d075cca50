use core::fmt::{self, Write as _};

use crate::{error::MinosError, io::Write, os::minos::syscall};

#[track_caller]
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    match stdout().write_fmt(args) {
        Ok(()) => {}
        Err(fmt::Error) => panic!("Error writing to console"),
    }
}

#[doc(hidden)]
pub fn _eprint(args: fmt::Arguments) {
    // the panic handler prints through this path, so swallow rather than
    // re-panic
    let _ = stderr().write_fmt(args);
}

/// The kernel console, one byte per `PutChar` call.
///
/// Writes are unbuffered: every byte has reached the kernel by the time
/// `write` returns, so output from consecutive calls cannot reorder.
struct ConsoleRaw;

impl Write for ConsoleRaw {
    fn write(&mut self, buf: &[u8]) -> Result<usize, MinosError> {
        for &b in buf {
            syscall::put_char(b);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), MinosError> {
        Ok(())
    }
}

#[must_use]
pub fn stdout() -> Stdout {
    Stdout { inner: ConsoleRaw }
}

/// The diagnostic stream. There is a single console, so this is another
/// handle on the same device; the split keeps the std-shaped API.
#[must_use]
pub fn stderr() -> Stderr {
    Stderr { inner: ConsoleRaw }
}

pub struct Stdout {
    inner: ConsoleRaw,
}

impl Write for Stdout {
    fn write(&mut self, buf: &[u8]) -> Result<usize, MinosError> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> Result<(), MinosError> {
        self.inner.flush()
    }
}

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.write_all(s.as_bytes()).is_err() {
            return Err(fmt::Error);
        }
        Ok(())
    }
}

pub struct Stderr {
    inner: ConsoleRaw,
}

impl Write for Stderr {
    fn write(&mut self, buf: &[u8]) -> Result<usize, MinosError> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> Result<(), MinosError> {
        self.inner.flush()
    }
}

impl fmt::Write for Stderr {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.write_all(s.as_bytes()).is_err() {
            return Err(fmt::Error);
        }
        Ok(())
    }
}
