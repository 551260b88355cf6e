//! # Flag Instructions
//!
//! Direct status flag manipulation: CLC, SEC, CLI, SEI, CLD, SED, CLV.

use crate::{Cpu, MemoryBus};

/// CLC - Clear Carry.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_c = false;
}

/// SEC - Set Carry.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_c = true;
}

/// CLI - Clear Interrupt Disable.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_i = false;
}

/// SEI - Set Interrupt Disable.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_i = true;
}

/// CLD - Clear Decimal.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_d = false;
}

/// SED - Set Decimal.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_d = true;
}

/// CLV - Clear Overflow.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_v = false;
}
