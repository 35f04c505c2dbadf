use crate::rgb::cpu::Cpu;
use crate::rgb::instructions::InstructionKind;
use crate::rgb::interrupts::ImeDelay;

pub fn execute(cpu: &mut Cpu, instruction: &InstructionKind) -> u8 {
    match instruction {
        InstructionKind::NOP => {
            execute_nop()
        }
        InstructionKind::HALT => {
            execute_halt(cpu)
        }
        InstructionKind::STOP => {
            execute_stop(cpu)
        }
        InstructionKind::EI => {
            execute_ei(cpu)
        }
        InstructionKind::DI => {
            execute_di(cpu)
        }
        _ => panic!("Invalid system control instruction"),
    }
}

fn execute_nop() -> u8 {
    // Do nothing
    4
}

fn execute_halt(cpu: &mut Cpu) -> u8 {
    // Game Boy HALT bug: if IME is false but interrupts are pending,
    // don't halt and cause next instruction to execute twice
    if !cpu.ime && cpu.check_pending_interrupts() {
        log::debug!("HALT bug triggered at PC=0x{:04X}", cpu.pc - 1);
        cpu.halt_bug = true;
    } else {
        cpu.halted = true;
        log::debug!("CPU halted at PC=0x{:04X}, IME={}", cpu.pc - 1, cpu.ime);
    }
    4
}

fn execute_stop(cpu: &mut Cpu) -> u8 {
    // STOP instruction - similar to HALT but stops CPU and LCD
    cpu.halted = true;
    4
}

fn execute_ei(cpu: &mut Cpu) -> u8 {
    // Enable interrupts after next instruction (1-instruction delay)
    log::debug!("EI instruction executed at PC=0x{:04X}", cpu.pc - 1);
    cpu.ime_delay = ImeDelay::ArmedThisInstr;
    4
}

fn execute_di(cpu: &mut Cpu) -> u8 {
    // Disable interrupts immediately
    log::debug!("DI instruction executed at PC=0x{:04X}", cpu.pc - 1);
    cpu.ime = false;
    cpu.ime_delay = ImeDelay::None; // Cancel any pending EI
    4
}