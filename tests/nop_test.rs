//! Tests for NOP and the undefined-opcode no-op.
//!
//! Any opcode outside the documented table advances PC by exactly one
//! byte and changes nothing else.

use mos6502::{Cpu, FlatMemory, MemoryBus, Mnemonic, OPCODE_TABLE};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

#[test]
fn test_nop_only_advances_pc() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.set_flag_c(true);
    cpu.memory_mut().write(0x8000, 0xEA); // NOP

    cpu.step();

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), 0x42);
    assert!(cpu.flag_c());
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_every_unassigned_opcode_is_one_byte_nop() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        if entry.mnemonic != Mnemonic::Und {
            continue;
        }

        let mut cpu = setup_cpu();
        cpu.set_a(0x11);
        cpu.set_x(0x22);
        cpu.set_y(0x33);
        cpu.set_flag_n(true);
        cpu.memory_mut().write(0x8000, opcode as u8);

        let status_before = cpu.status();
        cpu.step();

        assert_eq!(cpu.pc(), 0x8001, "opcode 0x{opcode:02X}");
        assert_eq!(cpu.a(), 0x11);
        assert_eq!(cpu.x(), 0x22);
        assert_eq!(cpu.y(), 0x33);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.status(), status_before);
    }
}
