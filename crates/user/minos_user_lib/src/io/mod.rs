// the trait surface follows the shape of the Rust standard library

pub use self::stdio::*;
use crate::error::MinosError;

mod stdio;

pub trait Write {
    fn write(&mut self, buf: &[u8]) -> Result<usize, MinosError>;

    fn flush(&mut self) -> Result<(), MinosError>;

    fn write_all(&mut self, mut buf: &[u8]) -> Result<(), MinosError> {
        while !buf.is_empty() {
            let n = self.write(buf)?;
            if n == 0 {
                return Err(MinosError::WriteZero);
            }
            buf = &buf[n..];
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::fmt::Write as _;

    use std::{string::String, vec::Vec};

    use super::*;

    struct Sink {
        data: Vec<u8>,
        max_per_write: usize,
    }

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> Result<usize, MinosError> {
            let n = buf.len().min(self.max_per_write);
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), MinosError> {
            Ok(())
        }
    }

    #[test]
    fn write_all_retries_short_writes() {
        let mut sink = Sink {
            data: Vec::new(),
            max_per_write: 3,
        };
        sink.write_all(b"Hello world\n").unwrap();
        assert_eq!(sink.data, b"Hello world\n");
    }

    #[test]
    fn write_all_reports_a_stuck_writer() {
        let mut sink = Sink {
            data: Vec::new(),
            max_per_write: 0,
        };
        assert!(matches!(
            sink.write_all(b"x"),
            Err(MinosError::WriteZero)
        ));
    }

    #[test]
    fn probe_output_is_two_lines_in_order() {
        let mut sink = Sink {
            data: Vec::new(),
            max_per_write: usize::MAX,
        };

        let sp = 0x7ff0_1234_usize;
        let mut first = String::new();
        writeln!(first, "Stack is at {sp:#x}").unwrap();
        sink.write_all(first.as_bytes()).unwrap();
        sink.write_all(b"Hello world\n").unwrap();

        let text = core::str::from_utf8(&sink.data).unwrap();
        assert!(text.ends_with("Hello world\n"));

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Stack is at 0x7ff01234"));
        assert_eq!(lines.next(), Some("Hello world"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn probe_line_renders_a_pointer_token() {
        let sp = 0x7ff0_1234_usize;
        let mut line = String::new();
        write!(line, "Stack is at {sp:#x}").unwrap();
        assert_eq!(line, "Stack is at 0x7ff01234");

        let token = line.strip_prefix("Stack is at 0x").unwrap();
        assert!(!token.is_empty());
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
