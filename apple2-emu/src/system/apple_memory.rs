//! Apple II memory system: 48 KiB RAM, 12 KiB ROM, and the two keyboard
//! soft switches.
//!
//! Memory Map:
//! - `$0000-$BFFF`: RAM (text page 1 at `$0400-$07FF`)
//! - `$C000-$CFFF`: I/O aperture; only KBD (`$C000`) and KBDSTRB (`$C010`)
//!   are populated, everything else reads 0
//! - `$D000-$FFFF`: ROM, loaded once at construction, writes ignored
//!
//! The keyboard latch is a single byte: bit 7 is the strobe (a key is
//! waiting), bits 6..0 the key code. Reading KBD returns the latch
//! unchanged; touching KBDSTRB (read or write) acknowledges the key by
//! clearing the strobe while preserving the code.

use crate::MachineError;
use mos6502::MemoryBus;

/// RAM size in bytes (48 KiB, `$0000-$BFFF`).
pub const RAM_SIZE: usize = 0xC000;
/// ROM size in bytes (12 KiB, `$D000-$FFFF`).
pub const ROM_SIZE: usize = 0x3000;
/// First ROM address.
pub const ROM_START: u16 = 0xD000;

/// Keyboard data soft switch (read-only).
const KBD: u16 = 0xC000;
/// Keyboard strobe acknowledge soft switch.
const KBDSTRB: u16 = 0xC010;

/// Apple II memory system implementing the CPU's `MemoryBus`.
#[derive(Debug)]
pub struct AppleMemory {
    /// 48 KiB main RAM.
    ram: Box<[u8; RAM_SIZE]>,
    /// 12 KiB firmware ROM.
    rom: Box<[u8; ROM_SIZE]>,
    /// Keyboard latch: strobe in bit 7, key code in bits 6..0.
    key_latch: u8,
    /// Raised by any write that can land in text page 1.
    video_dirty: bool,
}

impl AppleMemory {
    /// Creates the memory system with zeroed RAM and the given ROM image.
    ///
    /// The image must be exactly [`ROM_SIZE`] bytes and is expected to
    /// carry valid reset (`$FFFC/D`) and IRQ/BRK (`$FFFE/F`) vectors.
    pub fn new(rom_image: &[u8]) -> Result<Self, MachineError> {
        if rom_image.len() != ROM_SIZE {
            return Err(MachineError::BadRomSize {
                expected: ROM_SIZE,
                actual: rom_image.len(),
            });
        }

        let mut rom = Box::new([0u8; ROM_SIZE]);
        rom.copy_from_slice(rom_image);

        Ok(Self {
            ram: Box::new([0u8; RAM_SIZE]),
            rom,
            key_latch: 0,
            video_dirty: true,
        })
    }

    /// Stores a byte in the keyboard latch.
    ///
    /// The host normally passes a value with bit 7 already set to signal
    /// the strobe; see [`keys::latch_byte`](super::keys::latch_byte).
    pub fn set_key(&mut self, value: u8) {
        self.key_latch = value;
    }

    /// Current keyboard latch byte (no side effects).
    pub fn key_latch(&self) -> u8 {
        self.key_latch
    }

    /// Reads a RAM byte without touching the I/O side of the bus.
    ///
    /// Presenters use this to walk the text page. Addresses at or above
    /// [`RAM_SIZE`] return 0.
    pub fn ram_byte(&self, addr: u16) -> u8 {
        if (addr as usize) < RAM_SIZE {
            self.ram[addr as usize]
        } else {
            0
        }
    }

    /// Returns the video-dirty flag and clears it.
    pub fn take_video_dirty(&mut self) -> bool {
        std::mem::take(&mut self.video_dirty)
    }
}

impl MemoryBus for AppleMemory {
    fn read(&mut self, addr: u16) -> u8 {
        if (addr as usize) < RAM_SIZE {
            self.ram[addr as usize]
        } else if addr >= ROM_START {
            self.rom[(addr - ROM_START) as usize]
        } else if addr == KBD {
            self.key_latch
        } else if addr == KBDSTRB {
            // Acknowledge the pending key: clear the strobe, keep the code.
            self.key_latch &= 0x7F;
            self.key_latch
        } else {
            0
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        // Any address with bit 10 set can land in text page 1; the
        // presenter re-renders the whole page, so this over-approximation
        // is as good as an exact range check.
        if addr & 0x0400 != 0 {
            self.video_dirty = true;
        }

        if (addr as usize) < RAM_SIZE {
            self.ram[addr as usize] = value;
        } else if addr == KBDSTRB {
            self.key_latch &= 0x7F;
        }
        // ROM and unpopulated I/O silently discard writes.
    }
}
