use rgb::rgb::{cpu::Cpu, registers::Registers, memory::MemoryMap};

fn cpu_with_program(bytes: &[u8]) -> Cpu {
    let mut cpu = Cpu {
        registers: Registers::new(),
        pc: 0,
        sp: 0,
        mmap: MemoryMap::new(),
        halted: false,
        ime: false,
        ime_delay: rgb::rgb::interrupts::ImeDelay::None,
        halt_bug: false,
    };
    cpu.load_program(bytes);
    cpu
}

#[test]
fn test_ld_bc_d16() {
    // Opcode 0x01, followed by low byte 0x34, high byte 0x12
    let mut cpu = cpu_with_program(&[0x01, 0x34, 0x12]);

    // Decode and execute the instruction
    let instruction = cpu.decode();
    cpu.execute(instruction);

    // Verify BC register contains 0x1234
    assert_eq!(cpu.registers.b, 0x12);
    assert_eq!(cpu.registers.c, 0x34);

    // Verify PC was incremented by 3
    assert_eq!(cpu.pc, 3);
}

#[test]
fn test_ld_de_d16() {
    let mut cpu = cpu_with_program(&[0x11, 0xAB, 0xCD]);

    let instruction = cpu.decode();
    cpu.execute(instruction);

    assert_eq!(cpu.registers.d, 0xCD);
    assert_eq!(cpu.registers.e, 0xAB);
    assert_eq!(cpu.pc, 3);
}

#[test]
fn test_ld_hl_d16() {
    let mut cpu = cpu_with_program(&[0x21, 0x56, 0x78]);

    let instruction = cpu.decode();
    cpu.execute(instruction);

    assert_eq!(cpu.registers.h, 0x78);
    assert_eq!(cpu.registers.l, 0x56);
    assert_eq!(cpu.pc, 3);
}

#[test]
fn test_ld_sp_d16() {
    let mut cpu = cpu_with_program(&[0x31, 0xFF, 0xFE]);

    let instruction = cpu.decode();
    cpu.execute(instruction);

    assert_eq!(cpu.sp, 0xFEFF);
    assert_eq!(cpu.pc, 3);
}

#[test]
fn test_ld_b_d8() {
    let mut cpu = cpu_with_program(&[0x06, 0x42]);

    let instruction = cpu.decode();
    cpu.execute(instruction);

    assert_eq!(cpu.registers.b, 0x42);
    assert_eq!(cpu.pc, 2);
}

#[test]
fn test_ld_a_d8() {
    let mut cpu = cpu_with_program(&[0x3E, 0xFF]);

    let instruction = cpu.decode();
    cpu.execute(instruction);

    assert_eq!(cpu.registers.a, 0xFF);
    assert_eq!(cpu.pc, 2);
}

#[test]
fn test_ld_b_c() {
    let mut cpu = cpu_with_program(&[0x41]);
    cpu.registers.c = 0x35;

    let instruction = cpu.decode();
    cpu.execute(instruction);

    assert_eq!(cpu.registers.b, 0x35);
    assert_eq!(cpu.pc, 1);
}

#[test]
fn test_ld_a_h() {
    let mut cpu = cpu_with_program(&[0x7C]);
    cpu.registers.h = 0x99;

    let instruction = cpu.decode();
    cpu.execute(instruction);

    assert_eq!(cpu.registers.a, 0x99);
    assert_eq!(cpu.pc, 1);
}

#[test]
fn test_ld_a_a() {
    let mut cpu = cpu_with_program(&[0x7F]);
    cpu.registers.a = 0x77;

    let instruction = cpu.decode();
    cpu.execute(instruction);

    assert_eq!(cpu.registers.a, 0x77);
    assert_eq!(cpu.pc, 1);
}
