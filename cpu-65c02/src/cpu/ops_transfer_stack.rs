//! Register-to-register transfers and the stack push/pull family.

use super::Cpu;
use crate::error::CpuError;
use crate::registers::StatusFlag;

pub(super) fn tax(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.x = cpu.registers.a;
    cpu.set_nz(cpu.registers.x);
    Ok(())
}

pub(super) fn tay(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.y = cpu.registers.a;
    cpu.set_nz(cpu.registers.y);
    Ok(())
}

pub(super) fn txa(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.a = cpu.registers.x;
    cpu.set_nz(cpu.registers.a);
    Ok(())
}

pub(super) fn tya(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.a = cpu.registers.y;
    cpu.set_nz(cpu.registers.a);
    Ok(())
}

pub(super) fn tsx(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.x = cpu.registers.s;
    cpu.set_nz(cpu.registers.x);
    Ok(())
}

/// Unlike every other transfer, TXS touches no flags: S isn't a value
/// register, it's a stack offset.
pub(super) fn txs(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.s = cpu.registers.x;
    Ok(())
}

pub(super) fn pha(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.push_u8(cpu.registers.a);
    Ok(())
}

pub(super) fn phx(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.push_u8(cpu.registers.x);
    Ok(())
}

pub(super) fn phy(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.push_u8(cpu.registers.y);
    Ok(())
}

/// PHP always pushes B=1 and the unused bit set, regardless of their
/// current (non-physical) state in P.
pub(super) fn php(cpu: &mut Cpu) -> Result<(), CpuError> {
    let pushed = cpu.registers.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8;
    cpu.push_u8(pushed);
    Ok(())
}

pub(super) fn pla(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.a = cpu.pull_u8();
    cpu.set_nz(cpu.registers.a);
    Ok(())
}

pub(super) fn plx(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.x = cpu.pull_u8();
    cpu.set_nz(cpu.registers.x);
    Ok(())
}

pub(super) fn ply(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.y = cpu.pull_u8();
    cpu.set_nz(cpu.registers.y);
    Ok(())
}

/// PLP restores P from the stack. B has no physical storage in the live
/// register — it only ever exists as a value written out by a push — so
/// the pulled B bit is discarded and the hardwired Unused bit is forced on.
pub(super) fn plp(cpu: &mut Cpu) -> Result<(), CpuError> {
    let pulled = cpu.pull_u8();
    cpu.registers.p = (pulled | StatusFlag::Unused as u8) & !(StatusFlag::Break as u8);
    Ok(())
}
