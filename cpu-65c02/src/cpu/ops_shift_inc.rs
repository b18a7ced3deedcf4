//! Shifts/rotates (ASL/LSR/ROL/ROR, memory and accumulator forms) and the
//! increment/decrement family.

use super::Cpu;
use crate::error::CpuError;
use crate::registers::StatusFlag;

fn shift_left(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value << 1;
    cpu.set_flag(StatusFlag::Carry, value & 0x80 != 0);
    cpu.set_nz(result);
    result
}

fn shift_right(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value >> 1;
    cpu.set_flag(StatusFlag::Carry, value & 0x01 != 0);
    cpu.set_nz(result);
    result
}

fn rotate_left(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.flag(StatusFlag::Carry) as u8;
    let result = (value << 1) | carry_in;
    cpu.set_flag(StatusFlag::Carry, value & 0x80 != 0);
    cpu.set_nz(result);
    result
}

fn rotate_right(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.flag(StatusFlag::Carry) as u8;
    let result = (value >> 1) | (carry_in << 7);
    cpu.set_flag(StatusFlag::Carry, value & 0x01 != 0);
    cpu.set_nz(result);
    result
}

pub(super) fn asl(cpu: &mut Cpu) -> Result<(), CpuError> {
    let result = shift_left(cpu, cpu.operand);
    cpu.bus.write(cpu.operand_address, result)?;
    Ok(())
}

pub(super) fn asl_a(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.a = shift_left(cpu, cpu.registers.a);
    Ok(())
}

pub(super) fn lsr(cpu: &mut Cpu) -> Result<(), CpuError> {
    let result = shift_right(cpu, cpu.operand);
    cpu.bus.write(cpu.operand_address, result)?;
    Ok(())
}

pub(super) fn lsr_a(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.a = shift_right(cpu, cpu.registers.a);
    Ok(())
}

pub(super) fn rol(cpu: &mut Cpu) -> Result<(), CpuError> {
    let result = rotate_left(cpu, cpu.operand);
    cpu.bus.write(cpu.operand_address, result)?;
    Ok(())
}

pub(super) fn rol_a(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.a = rotate_left(cpu, cpu.registers.a);
    Ok(())
}

pub(super) fn ror(cpu: &mut Cpu) -> Result<(), CpuError> {
    let result = rotate_right(cpu, cpu.operand);
    cpu.bus.write(cpu.operand_address, result)?;
    Ok(())
}

pub(super) fn ror_a(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.a = rotate_right(cpu, cpu.registers.a);
    Ok(())
}

pub(super) fn inc(cpu: &mut Cpu) -> Result<(), CpuError> {
    let result = cpu.operand.wrapping_add(1);
    cpu.set_nz(result);
    cpu.bus.write(cpu.operand_address, result)?;
    Ok(())
}

pub(super) fn inc_a(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.a = cpu.registers.a.wrapping_add(1);
    cpu.set_nz(cpu.registers.a);
    Ok(())
}

pub(super) fn inx(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.x = cpu.registers.x.wrapping_add(1);
    cpu.set_nz(cpu.registers.x);
    Ok(())
}

pub(super) fn iny(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.y = cpu.registers.y.wrapping_add(1);
    cpu.set_nz(cpu.registers.y);
    Ok(())
}

pub(super) fn dec(cpu: &mut Cpu) -> Result<(), CpuError> {
    let result = cpu.operand.wrapping_sub(1);
    cpu.set_nz(result);
    cpu.bus.write(cpu.operand_address, result)?;
    Ok(())
}

pub(super) fn dec_a(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.a = cpu.registers.a.wrapping_sub(1);
    cpu.set_nz(cpu.registers.a);
    Ok(())
}

pub(super) fn dex(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.x = cpu.registers.x.wrapping_sub(1);
    cpu.set_nz(cpu.registers.x);
    Ok(())
}

pub(super) fn dey(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.y = cpu.registers.y.wrapping_sub(1);
    cpu.set_nz(cpu.registers.y);
    Ok(())
}
