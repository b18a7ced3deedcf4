use crate::bus::BusWriteError;
use std::fmt;

/// Failures that can surface out of a single `Cpu::execute`/interrupt call.
///
/// The only fallible operation inside the core is a rejected bus write; an
/// illegal opcode is not an error (it behaves as a one-byte NOP).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpuError {
    BusWrite(BusWriteError),
}

impl From<BusWriteError> for CpuError {
    fn from(error: BusWriteError) -> Self {
        CpuError::BusWrite(error)
    }
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::BusWrite(inner) => write!(f, "cpu halted: {}", inner),
        }
    }
}

impl std::error::Error for CpuError {}
