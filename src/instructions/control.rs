//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, BRK, RTI, NOP, and the UND no-op that unassigned
//! encodings decode to.
//!
//! BRK is a software interrupt: it skips its signature byte, pushes the
//! return address and a status copy with B set, sets I, and vectors
//! through 0xFFFE/F. The live status register's B flag is not touched -
//! B only exists in pushed copies, and monitor ROMs rely on that.

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus};

/// JMP - Jump to the resolved address (Absolute or Indirect).
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.pc = operand.address();
}

/// JSR - Jump to Subroutine.
///
/// PC is already past the two operand bytes; the hardware pushes PC-1
/// (high byte first) and RTS compensates with a +1.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push((return_addr >> 8) as u8);
    cpu.push(return_addr as u8);
    cpu.pc = operand.address();
}

/// RTS - Return from Subroutine.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = ((hi << 8) | lo).wrapping_add(1);
}

/// BRK - Force Interrupt.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut Cpu<M>) {
    // Skip the signature byte so RTI resumes past it.
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push((cpu.pc >> 8) as u8);
    cpu.push(cpu.pc as u8);

    let status = cpu.status() | 0b0001_0000; // B set in the pushed copy only
    cpu.push(status);

    cpu.flag_i = true;
    cpu.pc = cpu.read_word(0xFFFE);
}

/// RTI - Return from Interrupt.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let status = cpu.pull();
    cpu.set_status(status);
    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = (hi << 8) | lo;
}

/// NOP - No Operation.
pub(crate) fn nop<M: MemoryBus>(_cpu: &mut Cpu<M>) {}

/// UND - unassigned encoding; one-byte no-op.
pub(crate) fn und<M: MemoryBus>(_cpu: &mut Cpu<M>) {}
