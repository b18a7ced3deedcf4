use std::fmt;
use std::io;

use cpu_65c02::CpuError;

/// Errors surfaced by the debugger shell: I/O failures loading an image,
/// a rejected bus write propagated from the core, or a malformed command
/// line. Mirrors the small `From`-wired enum this codebase reaches for
/// whenever a host layer needs to aggregate a lower-level error with its
/// own I/O and parsing failures.
#[derive(Debug)]
pub enum DebuggerError {
    Io(io::Error),
    Cpu(CpuError),
    Parse(String),
}

impl fmt::Display for DebuggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebuggerError::Io(inner) => write!(f, "{}", inner),
            DebuggerError::Cpu(inner) => write!(f, "{}", inner),
            DebuggerError::Parse(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for DebuggerError {}

impl From<io::Error> for DebuggerError {
    fn from(error: io::Error) -> Self {
        DebuggerError::Io(error)
    }
}

impl From<CpuError> for DebuggerError {
    fn from(error: CpuError) -> Self {
        DebuggerError::Cpu(error)
    }
}
