use minos_syscall::RegisterDecodeError;

#[derive(Debug, thiserror::Error)]
pub enum MinosError {
    #[error("program not found")]
    ProgramNotFound,
    #[error("failed to write whole buffer")]
    WriteZero,
    #[error("malformed syscall return: {0}")]
    Decode(#[from] RegisterDecodeError),
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString as _;

    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(MinosError::ProgramNotFound.to_string(), "program not found");
        assert_eq!(
            MinosError::WriteZero.to_string(),
            "failed to write whole buffer"
        );
    }
}
