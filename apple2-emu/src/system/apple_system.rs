//! Apple II system driver.
//!
//! `AppleSystem` is the owned machine value: it wraps a `Cpu<AppleMemory>`
//! and is the only thing a host needs to hold. The terminal frontend (or a
//! test) drives it with `step_n`, feeds it keys with `set_key`, and reads
//! the text page back through `ram_byte`/`take_video_dirty`.

use super::AppleMemory;
use crate::MachineError;
use mos6502::{Cpu, MemoryBus};

/// The emulated machine: CPU, RAM, ROM, keyboard latch, video-dirty flag.
///
/// Strictly single-threaded and synchronous; the host must interleave
/// stepping, key injection, and presentation rather than sharing the
/// value across threads.
#[derive(Debug)]
pub struct AppleSystem {
    /// The 6502 CPU, owning the memory map.
    cpu: Cpu<AppleMemory>,
}

impl AppleSystem {
    /// Creates a machine with zeroed RAM, the given 12 KiB ROM image
    /// installed, and a reset applied.
    ///
    /// Fails with [`MachineError::BadRomSize`] when the image length is
    /// wrong. The image must contain valid vectors at `$FFFC/D` (reset)
    /// and `$FFFE/F` (IRQ/BRK).
    pub fn new(rom_image: &[u8]) -> Result<Self, MachineError> {
        let memory = AppleMemory::new(rom_image)?;
        Ok(Self {
            cpu: Cpu::new(memory),
        })
    }

    /// Warm reset: PC reloads from the reset vector, SP returns to 0xFF,
    /// RAM is left as is.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Executes one instruction.
    pub fn step(&mut self) {
        self.cpu.step();
    }

    /// Executes `n` instructions. Hosts call this once per pacing tick.
    pub fn step_n(&mut self, n: u32) {
        self.cpu.step_n(n);
    }

    /// Stores a byte in the keyboard latch, typically with bit 7 set to
    /// signal the strobe. Must be called between steps, never while a
    /// step is in flight.
    pub fn set_key(&mut self, value: u8) {
        self.cpu.memory_mut().set_key(value);
    }

    /// Current keyboard latch byte (no side effects).
    pub fn key_latch(&self) -> u8 {
        self.cpu.memory().key_latch()
    }

    /// Side-effect-free RAM read for the video presenter.
    pub fn ram_byte(&self, addr: u16) -> u8 {
        self.cpu.memory().ram_byte(addr)
    }

    /// Returns whether the text page may have changed since the last
    /// call, and clears the flag.
    pub fn take_video_dirty(&mut self) -> bool {
        self.cpu.memory_mut().take_video_dirty()
    }

    /// Current program counter (for status displays and tests).
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    /// Reads a byte through the bus, side effects included.
    pub fn peek(&mut self, addr: u16) -> u8 {
        self.cpu.memory_mut().read(addr)
    }

    /// Writes a byte through the bus (for tests and debugging).
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Reference to the CPU (for debugging).
    pub fn cpu(&self) -> &Cpu<AppleMemory> {
        &self.cpu
    }

    /// Mutable reference to the CPU (for tests that pre-load registers).
    pub fn cpu_mut(&mut self) -> &mut Cpu<AppleMemory> {
        &mut self.cpu
    }
}
