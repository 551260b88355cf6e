//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX update N/Z from the copied value; TXS does
//! not touch the flags.

use crate::{Cpu, MemoryBus};

/// TAX - Transfer Accumulator to X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.a;
    cpu.set_nz(cpu.x);
}

/// TAY - Transfer Accumulator to Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.a;
    cpu.set_nz(cpu.y);
}

/// TXA - Transfer X to Accumulator.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.x;
    cpu.set_nz(cpu.a);
}

/// TYA - Transfer Y to Accumulator.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.y;
    cpu.set_nz(cpu.a);
}

/// TSX - Transfer Stack Pointer to X.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.sp;
    cpu.set_nz(cpu.x);
}

/// TXS - Transfer X to Stack Pointer. Flags unchanged.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.sp = cpu.x;
}
