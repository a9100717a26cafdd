//! Memory map of the target.

pub const ROM_SIZE: usize = 0x8000;
pub const RAM_SIZE: usize = 0x8000;

/// Address instructions carry 15 bits.
pub const ADDR_MASK: u16 = 0x7FFF;

pub const POINTER_BASE: u16 = 3;
pub const POINTER_SIZE: u16 = 2;
pub const TEMP_BASE: u16 = 5;
pub const TEMP_SIZE: u16 = 8;

// Scratch registers used by generated code
pub const R13: u16 = 13;
pub const R14: u16 = 14;

pub const STATIC_BASE: u16 = 16;
pub const STATIC_SIZE: u16 = 240;

/// First slot handed out to assembler variables.
pub const VAR_BASE: u16 = 16;

pub const STACK_BASE: u16 = 256;

pub const SCREEN: u16 = 0x4000;
pub const KBD: u16 = 0x6000;
