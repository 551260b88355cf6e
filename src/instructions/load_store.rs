//! # Load and Store Instructions
//!
//! LDA, LDX, LDY load into a register and update N/Z; STA, STX, STY write
//! a register to the effective address and leave the flags alone.

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus};

/// LDA - Load Accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.a = operand.value();
    cpu.set_nz(cpu.a);
}

/// LDX - Load X Register.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.x = operand.value();
    cpu.set_nz(cpu.x);
}

/// LDY - Load Y Register.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.y = operand.value();
    cpu.set_nz(cpu.y);
}

/// STA - Store Accumulator.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.write(operand.address(), cpu.a);
}

/// STX - Store X Register.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.write(operand.address(), cpu.x);
}

/// STY - Store Y Register.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.write(operand.address(), cpu.y);
}
