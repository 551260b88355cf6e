//! # Opcode Dispatch Table
//!
//! This module contains the 256-entry table that serves as the single
//! source of truth for instruction decoding. Each entry pairs an opcode
//! byte with its addressing mode and mnemonic; the CPU consumes the pair
//! with two `match` statements (operand resolution, then execution).
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining
//! encodings decode to [`Mnemonic::Und`], a one-byte no-op: PC has already
//! advanced past the opcode byte and no operand byte is consumed.

use crate::addressing::AddressingMode;

/// Instruction mnemonics of the documented NMOS 6502 set.
///
/// `Und` stands in for every unassigned opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya, Und,
}

/// Decoded form of a single opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,
    /// Addressing mode for this encoding.
    pub mode: AddressingMode,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode) -> OpcodeEntry {
    OpcodeEntry { mnemonic, mode }
}

use AddressingMode::{
    Absolute as Abs, AbsoluteX as Abx, AbsoluteY as Aby, Accumulator as Acc,
    Immediate as Imm, Implicit as Imp, Indirect as Ind, IndirectX as Idx,
    IndirectY as Idy, Relative as Rel, ZeroPage as Zpg, ZeroPageX as Zpx,
    ZeroPageY as Zpy,
};
use Mnemonic::*;

/// Complete 256-entry dispatch table indexed by opcode byte value.
///
/// Entries follow the canonical NMOS 6502 instruction encoding; unassigned
/// bytes map to `(Und, Implicit)`.
pub const OPCODE_TABLE: [OpcodeEntry; 256] = [
    // 0x00
    op(Brk, Imp), op(Ora, Idx), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Ora, Zpg), op(Asl, Zpg), op(Und, Imp),
    op(Php, Imp), op(Ora, Imm), op(Asl, Acc), op(Und, Imp),
    op(Und, Imp), op(Ora, Abs), op(Asl, Abs), op(Und, Imp),
    // 0x10
    op(Bpl, Rel), op(Ora, Idy), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Ora, Zpx), op(Asl, Zpx), op(Und, Imp),
    op(Clc, Imp), op(Ora, Aby), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Ora, Abx), op(Asl, Abx), op(Und, Imp),
    // 0x20
    op(Jsr, Abs), op(And, Idx), op(Und, Imp), op(Und, Imp),
    op(Bit, Zpg), op(And, Zpg), op(Rol, Zpg), op(Und, Imp),
    op(Plp, Imp), op(And, Imm), op(Rol, Acc), op(Und, Imp),
    op(Bit, Abs), op(And, Abs), op(Rol, Abs), op(Und, Imp),
    // 0x30
    op(Bmi, Rel), op(And, Idy), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(And, Zpx), op(Rol, Zpx), op(Und, Imp),
    op(Sec, Imp), op(And, Aby), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(And, Abx), op(Rol, Abx), op(Und, Imp),
    // 0x40
    op(Rti, Imp), op(Eor, Idx), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Eor, Zpg), op(Lsr, Zpg), op(Und, Imp),
    op(Pha, Imp), op(Eor, Imm), op(Lsr, Acc), op(Und, Imp),
    op(Jmp, Abs), op(Eor, Abs), op(Lsr, Abs), op(Und, Imp),
    // 0x50
    op(Bvc, Rel), op(Eor, Idy), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Eor, Zpx), op(Lsr, Zpx), op(Und, Imp),
    op(Cli, Imp), op(Eor, Aby), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Eor, Abx), op(Lsr, Abx), op(Und, Imp),
    // 0x60
    op(Rts, Imp), op(Adc, Idx), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Adc, Zpg), op(Ror, Zpg), op(Und, Imp),
    op(Pla, Imp), op(Adc, Imm), op(Ror, Acc), op(Und, Imp),
    op(Jmp, Ind), op(Adc, Abs), op(Ror, Abs), op(Und, Imp),
    // 0x70
    op(Bvs, Rel), op(Adc, Idy), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Adc, Zpx), op(Ror, Zpx), op(Und, Imp),
    op(Sei, Imp), op(Adc, Aby), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Adc, Abx), op(Ror, Abx), op(Und, Imp),
    // 0x80
    op(Und, Imp), op(Sta, Idx), op(Und, Imp), op(Und, Imp),
    op(Sty, Zpg), op(Sta, Zpg), op(Stx, Zpg), op(Und, Imp),
    op(Dey, Imp), op(Und, Imp), op(Txa, Imp), op(Und, Imp),
    op(Sty, Abs), op(Sta, Abs), op(Stx, Abs), op(Und, Imp),
    // 0x90
    op(Bcc, Rel), op(Sta, Idy), op(Und, Imp), op(Und, Imp),
    op(Sty, Zpx), op(Sta, Zpx), op(Stx, Zpy), op(Und, Imp),
    op(Tya, Imp), op(Sta, Aby), op(Txs, Imp), op(Und, Imp),
    op(Und, Imp), op(Sta, Abx), op(Und, Imp), op(Und, Imp),
    // 0xA0
    op(Ldy, Imm), op(Lda, Idx), op(Ldx, Imm), op(Und, Imp),
    op(Ldy, Zpg), op(Lda, Zpg), op(Ldx, Zpg), op(Und, Imp),
    op(Tay, Imp), op(Lda, Imm), op(Tax, Imp), op(Und, Imp),
    op(Ldy, Abs), op(Lda, Abs), op(Ldx, Abs), op(Und, Imp),
    // 0xB0
    op(Bcs, Rel), op(Lda, Idy), op(Und, Imp), op(Und, Imp),
    op(Ldy, Zpx), op(Lda, Zpx), op(Ldx, Zpy), op(Und, Imp),
    op(Clv, Imp), op(Lda, Aby), op(Tsx, Imp), op(Und, Imp),
    op(Ldy, Abx), op(Lda, Abx), op(Ldx, Aby), op(Und, Imp),
    // 0xC0
    op(Cpy, Imm), op(Cmp, Idx), op(Und, Imp), op(Und, Imp),
    op(Cpy, Zpg), op(Cmp, Zpg), op(Dec, Zpg), op(Und, Imp),
    op(Iny, Imp), op(Cmp, Imm), op(Dex, Imp), op(Und, Imp),
    op(Cpy, Abs), op(Cmp, Abs), op(Dec, Abs), op(Und, Imp),
    // 0xD0
    op(Bne, Rel), op(Cmp, Idy), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Cmp, Zpx), op(Dec, Zpx), op(Und, Imp),
    op(Cld, Imp), op(Cmp, Aby), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Cmp, Abx), op(Dec, Abx), op(Und, Imp),
    // 0xE0
    op(Cpx, Imm), op(Sbc, Idx), op(Und, Imp), op(Und, Imp),
    op(Cpx, Zpg), op(Sbc, Zpg), op(Inc, Zpg), op(Und, Imp),
    op(Inx, Imp), op(Sbc, Imm), op(Nop, Imp), op(Und, Imp),
    op(Cpx, Abs), op(Sbc, Abs), op(Inc, Abs), op(Und, Imp),
    // 0xF0
    op(Beq, Rel), op(Sbc, Idy), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Sbc, Zpx), op(Inc, Zpx), op(Und, Imp),
    op(Sed, Imp), op(Sbc, Aby), op(Und, Imp), op(Und, Imp),
    op(Und, Imp), op(Sbc, Abx), op(Inc, Abx), op(Und, Imp),
];
