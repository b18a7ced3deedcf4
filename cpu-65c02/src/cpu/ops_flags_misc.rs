//! Flag set/clear instructions and the miscellaneous WAI/STP/NOP family.

use super::Cpu;
use crate::error::CpuError;
use crate::registers::StatusFlag;

pub(super) fn clc(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.set_flag(StatusFlag::Carry, false);
    Ok(())
}

pub(super) fn sec(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.set_flag(StatusFlag::Carry, true);
    Ok(())
}

pub(super) fn cld(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.set_flag(StatusFlag::Decimal, false);
    Ok(())
}

pub(super) fn sed(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.set_flag(StatusFlag::Decimal, true);
    Ok(())
}

pub(super) fn cli(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.set_flag(StatusFlag::InterruptDisable, false);
    Ok(())
}

pub(super) fn sei(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.set_flag(StatusFlag::InterruptDisable, true);
    Ok(())
}

pub(super) fn clv(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.set_flag(StatusFlag::Overflow, false);
    Ok(())
}

/// WAI suspends fetch/decode until the next interrupt (maskable or not);
/// `Cpu::interrupt`/`Cpu::nm_interrupt` both clear `waiting`.
pub(super) fn wai(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.waiting = true;
    Ok(())
}

/// STP halts the core until a Reset; unlike WAI, interrupts do not revive
/// it.
pub(super) fn stp(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.stopped = true;
    Ok(())
}

pub(super) fn nop(_cpu: &mut Cpu) -> Result<(), CpuError> {
    Ok(())
}
