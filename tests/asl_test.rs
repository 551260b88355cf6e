//! Tests for the ASL and LSR shift instructions.
//!
//! Both have an accumulator form and a read-modify-write memory form.

use mos6502::{Cpu, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();
    cpu.set_a(0b0100_0001);
    cpu.memory_mut().write(0x8000, 0x0A); // ASL A

    cpu.step();

    assert_eq!(cpu.a(), 0b1000_0010);
    assert!(!cpu.flag_c()); // bit 7 was clear
    assert!(cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_asl_carry_out() {
    let mut cpu = setup_cpu();
    cpu.set_a(0b1000_0000);
    cpu.memory_mut().write(0x8000, 0x0A); // ASL A

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_asl_memory_rmw() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0010, 0x40);
    cpu.memory_mut().write(0x8000, 0x06); // ASL $10
    cpu.memory_mut().write(0x8001, 0x10);

    cpu.step();

    assert_eq!(cpu.memory_mut().read(0x0010), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.a(), 0x00); // accumulator untouched
}

#[test]
fn test_lsr_accumulator() {
    let mut cpu = setup_cpu();
    cpu.set_a(0b0000_0011);
    cpu.memory_mut().write(0x8000, 0x4A); // LSR A

    cpu.step();

    assert_eq!(cpu.a(), 0b0000_0001);
    assert!(cpu.flag_c()); // bit 0 was set
    assert!(!cpu.flag_n()); // LSR can never set N
}

#[test]
fn test_lsr_to_zero() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);
    cpu.memory_mut().write(0x8000, 0x4A); // LSR A

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_lsr_memory_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x1234, 0xFE);
    cpu.memory_mut().write(0x8000, 0x4E); // LSR $1234
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);

    cpu.step();

    assert_eq!(cpu.memory_mut().read(0x1234), 0x7F);
    assert!(!cpu.flag_c());
}
