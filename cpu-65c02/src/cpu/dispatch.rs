//! The 256-entry opcode table: for every byte value, which addressing mode
//! to run and which operation handler to call. Unallocated opcodes map to
//! `nop`, reproducing WDC's documented "illegal opcodes execute as NOPs"
//! behavior uniformly as one-byte no-ops.

use super::addressing::Mode as M;
use super::ops_branch_jump::*;
use super::ops_flags_misc::*;
use super::ops_load_store::*;
use super::ops_logic_arith::*;
use super::ops_shift_inc::*;
use super::ops_transfer_stack::*;
use super::Cpu;
use crate::error::CpuError;

pub struct OpEntry {
    pub mode: M,
    pub op: fn(&mut Cpu) -> Result<(), CpuError>,
}

macro_rules! entry {
    ($mode:expr, $op:expr) => {
        OpEntry {
            mode: $mode,
            op: $op,
        }
    };
}

const IMP: M = M::Implied;
const ACC: M = M::Accumulator;
const IMM: M = M::Immediate;
const ZP: M = M::ZeroPage;
const ZPX: M = M::ZeroPageX;
const ZPY: M = M::ZeroPageY;
const ZPI: M = M::ZeroPageIndirect;
const ZPII: M = M::ZeroPageIndexedIndirectX;
const ZPIY: M = M::ZeroPageIndirectIndexedY;
const ABS: M = M::Absolute;
const AIX: M = M::AbsoluteIndexedX;
const AIY: M = M::AbsoluteIndexedY;
const AI: M = M::AbsoluteIndirect;
const AII: M = M::AbsoluteIndexedIndirect;
const REL: M = M::Relative;
const ZPR: M = M::ZeroPageRelative;

pub static TABLE: [OpEntry; 256] = [
    entry!(IMP, brk),        // 0x00
    entry!(ZPII, ora),       // 0x01
    entry!(IMP, nop),        // 0x02
    entry!(IMP, nop),        // 0x03
    entry!(ZP, tsb),         // 0x04
    entry!(ZP, ora),         // 0x05
    entry!(ZP, asl),         // 0x06
    entry!(ZP, rmb::<0>),    // 0x07
    entry!(IMP, php),        // 0x08
    entry!(IMM, ora),        // 0x09
    entry!(ACC, asl_a),      // 0x0A
    entry!(IMP, nop),        // 0x0B
    entry!(ABS, tsb),        // 0x0C
    entry!(ABS, ora),        // 0x0D
    entry!(ABS, asl),        // 0x0E
    entry!(ZPR, bbr::<0>),   // 0x0F
    entry!(REL, bpl),        // 0x10
    entry!(ZPIY, ora),       // 0x11
    entry!(ZPI, ora),        // 0x12
    entry!(IMP, nop),        // 0x13
    entry!(ZP, trb),         // 0x14
    entry!(ZPX, ora),        // 0x15
    entry!(ZPX, asl),        // 0x16
    entry!(ZP, rmb::<1>),    // 0x17
    entry!(IMP, clc),        // 0x18
    entry!(AIY, ora),        // 0x19
    entry!(ACC, inc_a),      // 0x1A
    entry!(IMP, nop),        // 0x1B
    entry!(ABS, trb),        // 0x1C
    entry!(AIX, ora),        // 0x1D
    entry!(AIX, asl),        // 0x1E
    entry!(ZPR, bbr::<1>),   // 0x1F
    entry!(ABS, jsr),        // 0x20
    entry!(ZPII, and),       // 0x21
    entry!(IMP, nop),        // 0x22
    entry!(IMP, nop),        // 0x23
    entry!(ZP, bit),         // 0x24
    entry!(ZP, and),         // 0x25
    entry!(ZP, rol),         // 0x26
    entry!(ZP, rmb::<2>),    // 0x27
    entry!(IMP, plp),        // 0x28
    entry!(IMM, and),        // 0x29
    entry!(ACC, rol_a),      // 0x2A
    entry!(IMP, nop),        // 0x2B
    entry!(ABS, bit),        // 0x2C
    entry!(ABS, and),        // 0x2D
    entry!(ABS, rol),        // 0x2E
    entry!(ZPR, bbr::<2>),   // 0x2F
    entry!(REL, bmi),        // 0x30
    entry!(ZPIY, and),       // 0x31
    entry!(ZPI, and),        // 0x32
    entry!(IMP, nop),        // 0x33
    entry!(ZPX, bit),        // 0x34
    entry!(ZPX, and),        // 0x35
    entry!(ZPX, rol),        // 0x36
    entry!(ZP, rmb::<3>),    // 0x37
    entry!(IMP, sec),        // 0x38
    entry!(AIY, and),        // 0x39
    entry!(ACC, dec_a),      // 0x3A
    entry!(IMP, nop),        // 0x3B
    entry!(AIX, bit),        // 0x3C
    entry!(AIX, and),        // 0x3D
    entry!(AIX, rol),        // 0x3E
    entry!(ZPR, bbr::<3>),   // 0x3F
    entry!(IMP, rti),        // 0x40
    entry!(ZPII, eor),       // 0x41
    entry!(IMP, nop),        // 0x42
    entry!(IMP, nop),        // 0x43
    entry!(IMP, nop),        // 0x44
    entry!(ZP, eor),         // 0x45
    entry!(ZP, lsr),         // 0x46
    entry!(ZP, rmb::<4>),    // 0x47
    entry!(IMP, pha),        // 0x48
    entry!(IMM, eor),        // 0x49
    entry!(ACC, lsr_a),      // 0x4A
    entry!(IMP, nop),        // 0x4B
    entry!(ABS, jmp),        // 0x4C
    entry!(ABS, eor),        // 0x4D
    entry!(ABS, lsr),        // 0x4E
    entry!(ZPR, bbr::<4>),   // 0x4F
    entry!(REL, bvc),        // 0x50
    entry!(ZPIY, eor),       // 0x51
    entry!(ZPI, eor),        // 0x52
    entry!(IMP, nop),        // 0x53
    entry!(IMP, nop),        // 0x54
    entry!(ZPX, eor),        // 0x55
    entry!(ZPX, lsr),        // 0x56
    entry!(ZP, rmb::<5>),    // 0x57
    entry!(IMP, cli),        // 0x58
    entry!(AIY, eor),        // 0x59
    entry!(IMP, phy),        // 0x5A
    entry!(IMP, nop),        // 0x5B
    entry!(IMP, nop),        // 0x5C
    entry!(AIX, eor),        // 0x5D
    entry!(AIX, lsr),        // 0x5E
    entry!(ZPR, bbr::<5>),   // 0x5F
    entry!(IMP, rts),        // 0x60
    entry!(ZPII, adc),       // 0x61
    entry!(IMP, nop),        // 0x62
    entry!(IMP, nop),        // 0x63
    entry!(ZP, stz),         // 0x64
    entry!(ZP, adc),         // 0x65
    entry!(ZP, ror),         // 0x66
    entry!(ZP, rmb::<6>),    // 0x67
    entry!(IMP, pla),        // 0x68
    entry!(IMM, adc),        // 0x69
    entry!(ACC, ror_a),      // 0x6A
    entry!(IMP, nop),        // 0x6B
    entry!(AI, jmp_indirect), // 0x6C
    entry!(ABS, adc),        // 0x6D
    entry!(ABS, ror),        // 0x6E
    entry!(ZPR, bbr::<6>),   // 0x6F
    entry!(REL, bvs),        // 0x70
    entry!(ZPIY, adc),       // 0x71
    entry!(ZPI, adc),        // 0x72
    entry!(IMP, nop),        // 0x73
    entry!(ZPX, stz),        // 0x74
    entry!(ZPX, adc),        // 0x75
    entry!(ZPX, ror),        // 0x76
    entry!(ZP, rmb::<7>),    // 0x77
    entry!(IMP, sei),        // 0x78
    entry!(AIY, adc),        // 0x79
    entry!(IMP, ply),        // 0x7A
    entry!(IMP, nop),        // 0x7B
    entry!(AII, jmp_indirect), // 0x7C
    entry!(AIX, adc),        // 0x7D
    entry!(AIX, ror),        // 0x7E
    entry!(ZPR, bbr::<7>),   // 0x7F
    entry!(REL, bra),        // 0x80
    entry!(ZPII, sta),       // 0x81
    entry!(IMP, nop),        // 0x82
    entry!(IMP, nop),        // 0x83
    entry!(ZP, sty),         // 0x84
    entry!(ZP, sta),         // 0x85
    entry!(ZP, stx),         // 0x86
    entry!(ZP, smb::<0>),    // 0x87
    entry!(IMP, dey),        // 0x88
    entry!(IMM, bit_imm),    // 0x89
    entry!(IMP, txa),        // 0x8A
    entry!(IMP, nop),        // 0x8B
    entry!(ABS, sty),        // 0x8C
    entry!(ABS, sta),        // 0x8D
    entry!(ABS, stx),        // 0x8E
    entry!(ZPR, bbs::<0>),   // 0x8F
    entry!(REL, bcc),        // 0x90
    entry!(ZPIY, sta),       // 0x91
    entry!(ZPI, sta),        // 0x92
    entry!(IMP, nop),        // 0x93
    entry!(ZPX, sty),        // 0x94
    entry!(ZPX, sta),        // 0x95
    entry!(ZPY, stx),        // 0x96
    entry!(ZP, smb::<1>),    // 0x97
    entry!(IMP, tya),        // 0x98
    entry!(AIY, sta),        // 0x99
    entry!(IMP, txs),        // 0x9A
    entry!(IMP, nop),        // 0x9B
    entry!(ABS, stz),        // 0x9C
    entry!(AIX, sta),        // 0x9D
    entry!(AIX, stz),        // 0x9E
    entry!(ZPR, bbs::<1>),   // 0x9F
    entry!(IMM, ldy),        // 0xA0
    entry!(ZPII, lda),       // 0xA1
    entry!(IMM, ldx),        // 0xA2
    entry!(IMP, nop),        // 0xA3
    entry!(ZP, ldy),         // 0xA4
    entry!(ZP, lda),         // 0xA5
    entry!(ZP, ldx),         // 0xA6
    entry!(ZP, smb::<2>),    // 0xA7
    entry!(IMP, tay),        // 0xA8
    entry!(IMM, lda),        // 0xA9
    entry!(IMP, tax),        // 0xAA
    entry!(IMP, nop),        // 0xAB
    entry!(ABS, ldy),        // 0xAC
    entry!(ABS, lda),        // 0xAD
    entry!(ABS, ldx),        // 0xAE
    entry!(ZPR, bbs::<2>),   // 0xAF
    entry!(REL, bcs),        // 0xB0
    entry!(ZPIY, lda),       // 0xB1
    entry!(ZPI, lda),        // 0xB2
    entry!(IMP, nop),        // 0xB3
    entry!(ZPX, ldy),        // 0xB4
    entry!(ZPX, lda),        // 0xB5
    entry!(ZPY, ldx),        // 0xB6
    entry!(ZP, smb::<3>),    // 0xB7
    entry!(IMP, clv),        // 0xB8
    entry!(AIY, lda),        // 0xB9
    entry!(IMP, tsx),        // 0xBA
    entry!(IMP, nop),        // 0xBB
    entry!(AIX, ldy),        // 0xBC
    entry!(AIX, lda),        // 0xBD
    entry!(AIY, ldx),        // 0xBE
    entry!(ZPR, bbs::<3>),   // 0xBF
    entry!(IMM, cpy),        // 0xC0
    entry!(ZPII, cmp),       // 0xC1
    entry!(IMP, nop),        // 0xC2
    entry!(IMP, nop),        // 0xC3
    entry!(ZP, cpy),         // 0xC4
    entry!(ZP, cmp),         // 0xC5
    entry!(ZP, dec),         // 0xC6
    entry!(ZP, smb::<4>),    // 0xC7
    entry!(IMP, iny),        // 0xC8
    entry!(IMM, cmp),        // 0xC9
    entry!(IMP, dex),        // 0xCA
    entry!(IMP, wai),        // 0xCB
    entry!(ABS, cpy),        // 0xCC
    entry!(ABS, cmp),        // 0xCD
    entry!(ABS, dec),        // 0xCE
    entry!(ZPR, bbs::<4>),   // 0xCF
    entry!(REL, bne),        // 0xD0
    entry!(ZPIY, cmp),       // 0xD1
    entry!(ZPI, cmp),        // 0xD2
    entry!(IMP, nop),        // 0xD3
    entry!(IMP, nop),        // 0xD4
    entry!(ZPX, cmp),        // 0xD5
    entry!(ZPX, dec),        // 0xD6
    entry!(ZP, smb::<5>),    // 0xD7
    entry!(IMP, cld),        // 0xD8
    entry!(AIY, cmp),        // 0xD9
    entry!(IMP, phx),        // 0xDA
    entry!(IMP, stp),        // 0xDB
    entry!(IMP, nop),        // 0xDC
    entry!(AIX, cmp),        // 0xDD
    entry!(AIX, dec),        // 0xDE
    entry!(ZPR, bbs::<5>),   // 0xDF
    entry!(IMM, cpx),        // 0xE0
    entry!(ZPII, sbc),       // 0xE1
    entry!(IMP, nop),        // 0xE2
    entry!(IMP, nop),        // 0xE3
    entry!(ZP, cpx),         // 0xE4
    entry!(ZP, sbc),         // 0xE5
    entry!(ZP, inc),         // 0xE6
    entry!(ZP, smb::<6>),    // 0xE7
    entry!(IMP, inx),        // 0xE8
    entry!(IMM, sbc),        // 0xE9
    entry!(IMP, nop),        // 0xEA (NOP)
    entry!(IMP, nop),        // 0xEB
    entry!(ABS, cpx),        // 0xEC
    entry!(ABS, sbc),        // 0xED
    entry!(ABS, inc),        // 0xEE
    entry!(ZPR, bbs::<6>),   // 0xEF
    entry!(REL, beq),        // 0xF0
    entry!(ZPIY, sbc),       // 0xF1
    entry!(ZPI, sbc),        // 0xF2
    entry!(IMP, nop),        // 0xF3
    entry!(IMP, nop),        // 0xF4
    entry!(ZPX, sbc),        // 0xF5
    entry!(ZPX, inc),        // 0xF6
    entry!(ZP, smb::<7>),    // 0xF7
    entry!(IMP, sed),        // 0xF8
    entry!(AIY, sbc),        // 0xF9
    entry!(IMP, plx),        // 0xFA
    entry!(IMP, nop),        // 0xFB
    entry!(IMP, nop),        // 0xFC
    entry!(AIX, sbc),        // 0xFD
    entry!(AIX, inc),        // 0xFE
    entry!(ZPR, bbs::<7>),   // 0xFF
];
