use crate::registers::reg::X86_64Register;

// IMPORTANT: colors are indices into REGISTER_ORDER, so the allocatable
// registers come first and the reserved ones last.
//
// ====================
// Upon change, please make sure the order is maintained!
// ====================
pub const REG_ALLOC_POOL_SIZE: usize = 14;
pub const REGISTER_ORDER: [X86_64Register; REG_ALLOC_POOL_SIZE + 2] = [
  X86_64Register::RAX,
  X86_64Register::RBX,
  X86_64Register::RCX,
  X86_64Register::RDX,
  X86_64Register::RSI,
  X86_64Register::RDI,
  X86_64Register::R8,
  X86_64Register::R9,
  X86_64Register::R10,
  X86_64Register::R11,
  X86_64Register::R12,
  X86_64Register::R13,
  X86_64Register::R14,
  X86_64Register::R15,
  // reserved: never colored, never interfere
  X86_64Register::RBP,
  X86_64Register::RSP,
];

pub const FRAME_POINTER: X86_64Register = X86_64Register::RBP;
pub const STACK_POINTER: X86_64Register = X86_64Register::RSP;
pub const RETURN_VALUE: X86_64Register = X86_64Register::RAX;

/// idiv/imul operate on rdx:rax
pub const MUL_DIV_PAIR: (X86_64Register, X86_64Register) = (X86_64Register::RAX, X86_64Register::RDX);
/// sal/sar/shr take their count in %cl
pub const SHIFT_COUNT: X86_64Register = X86_64Register::RCX;
pub const SHIFT_COUNT_OPERAND: &str = "%cl";

pub const STACK_ELEM_SIZE: i64 = 8;
