//! LDA/LDX/LDY and STA/STX/STY/STZ.

use super::Cpu;
use crate::error::CpuError;

pub(super) fn lda(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.a = cpu.operand;
    cpu.set_nz(cpu.registers.a);
    Ok(())
}

pub(super) fn ldx(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.x = cpu.operand;
    cpu.set_nz(cpu.registers.x);
    Ok(())
}

pub(super) fn ldy(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.y = cpu.operand;
    cpu.set_nz(cpu.registers.y);
    Ok(())
}

pub(super) fn sta(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.bus.write(cpu.operand_address, cpu.registers.a)?;
    Ok(())
}

pub(super) fn stx(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.bus.write(cpu.operand_address, cpu.registers.x)?;
    Ok(())
}

pub(super) fn sty(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.bus.write(cpu.operand_address, cpu.registers.y)?;
    Ok(())
}

pub(super) fn stz(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.bus.write(cpu.operand_address, 0)?;
    Ok(())
}
