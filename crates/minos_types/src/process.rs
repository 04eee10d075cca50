use core::fmt;

/// A process identifier.
///
/// The kernel tracks processes with 16-bit IDs; the ABI transports them
/// widened to a full register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcId(u16);

impl ProcId {
    #[must_use]
    pub const fn new(pid: u16) -> Self {
        Self(pid)
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ProcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u16> for ProcId {
    fn from(pid: u16) -> Self {
        Self(pid)
    }
}

impl From<ProcId> for u16 {
    fn from(pid: ProcId) -> Self {
        pid.0
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::{format, string::ToString as _};

    use super::*;

    #[test]
    fn display_matches_raw_value() {
        assert_eq!(ProcId::new(1).to_string(), "1");
        assert_eq!(format!("{}", ProcId::new(417)), "417");
    }

    #[test]
    fn round_trips_through_u16() {
        let pid = ProcId::from(42_u16);
        assert_eq!(u16::from(pid), 42);
        assert_eq!(pid.get(), 42);
    }
}
