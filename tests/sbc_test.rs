//! Comprehensive tests for the SBC (Subtract with Carry) instruction.
//!
//! In binary mode SBC(v) is ADC(v XOR 0xFF) with the same carry-in; the
//! duality is asserted directly here and property-tested in
//! `proptest_cpu.rs`. Decimal mode debits the complemented operand by
//! 0x66 before the shared correction runs.

use mos6502::{Cpu, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

/// Writes `SBC #value` at the PC.
fn sbc_immediate(cpu: &mut Cpu<FlatMemory>, value: u8) {
    let pc = cpu.pc();
    cpu.memory_mut().write(pc, 0xE9);
    cpu.memory_mut().write(pc + 1, value);
}

#[test]
fn test_sbc_basic_no_borrow() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x50);
    cpu.set_flag_c(true); // carry set = no borrow pending
    sbc_immediate(&mut cpu, 0x20);

    cpu.step();

    assert_eq!(cpu.a(), 0x30);
    assert!(cpu.flag_c()); // no borrow occurred
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_borrow_out() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x20);
    cpu.set_flag_c(true);
    sbc_immediate(&mut cpu, 0x50);

    cpu.step();

    assert_eq!(cpu.a(), 0xD0);
    assert!(!cpu.flag_c()); // borrow occurred
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_with_pending_borrow() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x50);
    cpu.set_flag_c(false); // borrow pending from a previous subtraction
    sbc_immediate(&mut cpu, 0x20);

    cpu.step();

    assert_eq!(cpu.a(), 0x2F);
}

#[test]
fn test_sbc_zero_result() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.set_flag_c(true);
    sbc_immediate(&mut cpu, 0x42);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_signed_overflow() {
    // 0x80 (-128) - 0x01 = 0x7F: negative minus positive yields positive
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    cpu.set_flag_c(true);
    sbc_immediate(&mut cpu, 0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
}

#[test]
fn test_sbc_matches_adc_of_complement() {
    for (a, value, carry) in [(0x37u8, 0x12u8, true), (0x00, 0xFF, false), (0x90, 0x0A, true)] {
        let mut sbc_cpu = setup_cpu();
        sbc_cpu.set_a(a);
        sbc_cpu.set_flag_c(carry);
        sbc_immediate(&mut sbc_cpu, value);
        sbc_cpu.step();

        let mut adc_cpu = setup_cpu();
        adc_cpu.set_a(a);
        adc_cpu.set_flag_c(carry);
        adc_cpu.memory_mut().write(0x8000, 0x69); // ADC #(value ^ 0xFF)
        adc_cpu.memory_mut().write(0x8001, value ^ 0xFF);
        adc_cpu.step();

        assert_eq!(sbc_cpu.a(), adc_cpu.a());
        assert_eq!(sbc_cpu.status(), adc_cpu.status());
    }
}

#[test]
fn test_sbc_decimal_simple() {
    // 46 - 12 = 34 in BCD
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_a(0x46);
    sbc_immediate(&mut cpu, 0x12);

    cpu.step();

    assert_eq!(cpu.a(), 0x34);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_borrow() {
    // 12 - 46 borrows: ten's complement gives 66 with carry clear
    let mut cpu = setup_cpu();
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_a(0x12);
    sbc_immediate(&mut cpu, 0x46);

    cpu.step();

    assert_eq!(cpu.a(), 0x66);
    assert!(!cpu.flag_c());
}
