//! # Increment and Decrement Instructions
//!
//! INC and DEC are read-modify-write against memory; INX, INY, DEX, DEY
//! operate on the index registers. All wrap at 8 bits and update N/Z.

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus};

/// INC - Increment memory.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = operand.value().wrapping_add(1);
    cpu.write(operand.address(), result);
    cpu.set_nz(result);
}

/// DEC - Decrement memory.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = operand.value().wrapping_sub(1);
    cpu.write(operand.address(), result);
    cpu.set_nz(result);
}

/// INX - Increment X register.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_nz(cpu.x);
}

/// INY - Increment Y register.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_nz(cpu.y);
}

/// DEX - Decrement X register.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_nz(cpu.x);
}

/// DEY - Decrement Y register.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_nz(cpu.y);
}
