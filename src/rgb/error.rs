use std::fmt;

/// Fatal and debug-only conditions the CPU engine can surface from `run_for_cycles`.
///
/// Fatal kinds terminate the run; the host decides whether to restart. `IdleLoopDetected`
/// is only ever raised when compiled with debug assertions (mirrors an inspector-only check).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmuError {
    UnknownOpcode { opcode: u8, pc: u16 },
    UnknownCBOpcode { opcode: u8, pc: u16 },
    UnmappedWrite { address: u16 },
    IdleLoopDetected { pc: u16 },
}

impl fmt::Display for EmuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmuError::UnknownOpcode { opcode, pc } => {
                write!(f, "emulation stopped at PC=0x{:04X}, reason=unknown opcode 0x{:02X}", pc, opcode)
            }
            EmuError::UnknownCBOpcode { opcode, pc } => {
                write!(f, "emulation stopped at PC=0x{:04X}, reason=unknown CB opcode 0x{:02X}", pc, opcode)
            }
            EmuError::UnmappedWrite { address } => {
                write!(f, "emulation stopped, reason=unmapped write to 0x{:04X}", address)
            }
            EmuError::IdleLoopDetected { pc } => {
                write!(f, "emulation stopped at PC=0x{:04X}, reason=idle loop detected", pc)
            }
        }
    }
}

impl std::error::Error for EmuError {}
