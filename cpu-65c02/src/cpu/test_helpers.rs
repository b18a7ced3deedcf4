//! Shared scaffolding for the instruction tests below: build a CPU over a
//! flat RAM loaded with a raw byte program (no assembler), and run it for a
//! fixed number of steps.

use super::Cpu;
use crate::bus::Ram;

/// Builds a CPU with `program` loaded at address 0 and PC starting there,
/// bypassing `reset` so tests don't have to also set up a reset vector.
pub(super) fn cpu_with_program(program: &[u8]) -> Cpu {
    let mut ram = Ram::new();
    ram.load(program);
    let mut cpu = Cpu::new(Box::new(ram));
    cpu.registers.pc = 0x0000;
    cpu
}

/// Runs exactly `steps` instructions.
pub(super) fn run(cpu: &mut Cpu, steps: usize) {
    for _ in 0..steps {
        cpu.execute().expect("test program must not fault the bus");
    }
}
