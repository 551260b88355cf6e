//! # Stack Instructions
//!
//! PHA, PLA, PHP, PLP. Pushed status copies always carry bit 5; PHP
//! additionally forces B in the pushed byte, and PLP's unpack discards
//! bit 5 (it has no storage and reads back as 1).

use crate::{Cpu, MemoryBus};

/// PHA - Push Accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.push(cpu.a);
}

/// PLA - Pull Accumulator.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.pull();
    cpu.set_nz(cpu.a);
}

/// PHP - Push Processor Status with B forced set.
pub(crate) fn php<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let status = cpu.status() | 0b0001_0000;
    cpu.push(status);
}

/// PLP - Pull Processor Status.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let status = cpu.pull();
    cpu.set_status(status);
}
