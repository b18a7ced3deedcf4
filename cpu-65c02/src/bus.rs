use std::fmt;

/// Maximum addressable range for the WDC 65C02: a flat 16-bit address space.
pub const BUS_SIZE: usize = 1024 * 64;

/// Raised when a device behind the bus refuses a write (e.g. a ROM region).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusWriteError {
    pub address: u16,
    pub reason: &'static str,
}

impl fmt::Display for BusWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "write to {:#06X} rejected: {}",
            self.address, self.reason
        )
    }
}

impl std::error::Error for BusWriteError {}

/// A polymorphic byte-addressable device indexed by a 16-bit address.
///
/// `Read` is total: every address answers with some byte. `Write` may be
/// rejected, e.g. by a read-only region, in which case the core treats the
/// failure as fatal to the current run (see crate-level docs).
pub trait Bus {
    fn read(&self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusWriteError>;
}

/// The simplest bus that can drive the CPU: 64 KiB of flat, always-writable
/// RAM. The default implementation used when no other device map is needed.
pub struct Ram {
    memory: Vec<u8>,
}

impl Ram {
    pub fn new() -> Ram {
        Ram {
            memory: vec![0; BUS_SIZE],
        }
    }

    /// Loads `data` into memory starting at address 0, for test fixtures and
    /// the debugger's `load` command. Bytes beyond the end of the bus are
    /// silently truncated.
    pub fn load(&mut self, data: &[u8]) {
        let len = data.len().min(self.memory.len());
        self.memory[..len].copy_from_slice(&data[..len]);
    }
}

impl Default for Ram {
    fn default() -> Ram {
        Ram::new()
    }
}

impl Bus for Ram {
    fn read(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusWriteError> {
        self.memory[addr as usize] = value;
        Ok(())
    }
}
