//! An instruction-level WDC 65C02 CPU core: register file, pluggable bus,
//! and a fetch/decode/execute interpreter covering the full documented
//! 65C02 instruction set including its bit-manipulation and branch-on-bit
//! extensions over the NMOS 6502. One `execute()` call runs exactly one
//! instruction with no sub-cycle timing model.

pub mod bus;
pub mod constants;
pub mod cpu;
pub mod error;
pub mod registers;

pub use bus::{Bus, BusWriteError, Ram};
pub use cpu::addressing::Mode;
pub use cpu::Cpu;
pub use error::CpuError;
pub use registers::{Registers, StatusFlag};
