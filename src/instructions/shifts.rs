//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. Each operates on the accumulator in Accumulator
//! mode or read-modify-write on memory otherwise; the operand fetch has
//! already happened during resolution, so the write-back here preserves
//! the hardware's fetch-then-store ordering.

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus};

/// Writes a shift/rotate result to the operand's target (accumulator or
/// memory) and updates N/Z.
fn store_result<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand, result: u8) {
    match operand {
        Operand::Accumulator(_) => cpu.a = result,
        Operand::Memory { addr, .. } => cpu.write(addr, result),
        _ => unreachable!("shift target is accumulator or memory"),
    }
    cpu.set_nz(result);
}

/// ASL - Arithmetic Shift Left.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = operand.value();
    cpu.flag_c = value & 0x80 != 0;
    store_result(cpu, operand, value << 1);
}

/// LSR - Logical Shift Right.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = operand.value();
    cpu.flag_c = value & 0x01 != 0;
    store_result(cpu, operand, value >> 1);
}

/// ROL - Rotate Left through carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = operand.value();
    let result = (value << 1) | cpu.flag_c as u8;
    cpu.flag_c = value & 0x80 != 0;
    store_result(cpu, operand, result);
}

/// ROR - Rotate Right through carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = operand.value();
    let result = (value >> 1) | ((cpu.flag_c as u8) << 7);
    cpu.flag_c = value & 0x01 != 0;
    store_result(cpu, operand, result);
}
