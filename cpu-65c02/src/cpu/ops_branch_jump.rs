//! Conditional/unconditional branches, BBRn/BBSn, jumps, subroutine
//! call/return, and the software-interrupt pair BRK/RTI.

use super::Cpu;
use crate::constants::InterruptVector;
use crate::error::CpuError;
use crate::registers::StatusFlag;

fn branch_if(cpu: &mut Cpu, condition: bool) {
    if condition {
        cpu.registers.pc = cpu.operand_address;
    }
}

pub(super) fn bpl(cpu: &mut Cpu) -> Result<(), CpuError> {
    branch_if(cpu, !cpu.flag(StatusFlag::Negative));
    Ok(())
}

pub(super) fn bmi(cpu: &mut Cpu) -> Result<(), CpuError> {
    branch_if(cpu, cpu.flag(StatusFlag::Negative));
    Ok(())
}

pub(super) fn bvc(cpu: &mut Cpu) -> Result<(), CpuError> {
    branch_if(cpu, !cpu.flag(StatusFlag::Overflow));
    Ok(())
}

pub(super) fn bvs(cpu: &mut Cpu) -> Result<(), CpuError> {
    branch_if(cpu, cpu.flag(StatusFlag::Overflow));
    Ok(())
}

pub(super) fn bcc(cpu: &mut Cpu) -> Result<(), CpuError> {
    branch_if(cpu, !cpu.flag(StatusFlag::Carry));
    Ok(())
}

pub(super) fn bcs(cpu: &mut Cpu) -> Result<(), CpuError> {
    branch_if(cpu, cpu.flag(StatusFlag::Carry));
    Ok(())
}

pub(super) fn bne(cpu: &mut Cpu) -> Result<(), CpuError> {
    branch_if(cpu, !cpu.flag(StatusFlag::Zero));
    Ok(())
}

pub(super) fn beq(cpu: &mut Cpu) -> Result<(), CpuError> {
    branch_if(cpu, cpu.flag(StatusFlag::Zero));
    Ok(())
}

/// BRA: 65C02 addition, an unconditional relative branch.
pub(super) fn bra(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.pc = cpu.operand_address;
    Ok(())
}

/// BBRn: branch if bit `BIT` of the zero-page test byte is clear.
pub(super) fn bbr<const BIT: u8>(cpu: &mut Cpu) -> Result<(), CpuError> {
    branch_if(cpu, cpu.operand & (1 << BIT) == 0);
    Ok(())
}

/// BBSn: branch if bit `BIT` of the zero-page test byte is set.
pub(super) fn bbs<const BIT: u8>(cpu: &mut Cpu) -> Result<(), CpuError> {
    branch_if(cpu, cpu.operand & (1 << BIT) != 0);
    Ok(())
}

/// JMP absolute: the addressing phase only computed the target, it never
/// writes PC itself, so the operation does that single assignment.
pub(super) fn jmp(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.pc = cpu.operand_address;
    Ok(())
}

/// JMP (indirect) / JMP (absolute,X indirect): both addressing forms load
/// PC directly while resolving the pointer, so there is nothing left for
/// the operand phase to do. Keeping that assignment in `addressing::decode`
/// rather than here is what avoids the double-fetch bug these forms are
/// prone to.
pub(super) fn jmp_indirect(_cpu: &mut Cpu) -> Result<(), CpuError> {
    Ok(())
}

/// JSR pushes the address of the last byte of the JSR instruction (PC - 1,
/// since PC has already moved past the two operand bytes), not PC itself;
/// RTS is what adds the 1 back after pulling.
pub(super) fn jsr(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.push_u16(cpu.registers.pc.wrapping_sub(1));
    cpu.registers.pc = cpu.operand_address;
    Ok(())
}

pub(super) fn rts(cpu: &mut Cpu) -> Result<(), CpuError> {
    let return_address = cpu.pull_u16();
    cpu.registers.pc = return_address.wrapping_add(1);
    Ok(())
}

/// RTI restores P (forcing the unused bit, as PLP does) and PC, and leaves
/// NMI servicing. A queued NMI that arrived during this one is redelivered
/// by the host checking `nmi_queue` after the call, not by RTI itself.
pub(super) fn rti(cpu: &mut Cpu) -> Result<(), CpuError> {
    let pulled = cpu.pull_u8();
    cpu.registers.p = (pulled | StatusFlag::Unused as u8) & !(StatusFlag::Break as u8);
    cpu.registers.pc = cpu.pull_u16();
    cpu.handling_nmi = false;
    Ok(())
}

/// BRK is a two-byte instruction: the byte after the opcode is a signature
/// the handler must skip, not decode as the next instruction. It pushes PC
/// (past that signature byte) and P with B set, then jumps through the
/// IRQ/BRK vector with I set and D cleared, same as a hardware IRQ but
/// distinguishable on the stack by B=1.
pub(super) fn brk(cpu: &mut Cpu) -> Result<(), CpuError> {
    cpu.registers.pc = cpu.registers.pc.wrapping_add(1);
    cpu.push_u16(cpu.registers.pc);
    let pushed = cpu.registers.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8;
    cpu.push_u8(pushed);
    cpu.set_flag(StatusFlag::InterruptDisable, true);
    cpu.set_flag(StatusFlag::Decimal, false);
    cpu.load_vector(InterruptVector::IrqBrk);
    Ok(())
}
