use std::fmt;

use strum_macros::AsRefStr;

use crate::registers::consts::REGISTER_ORDER;
use crate::temp::Temp;

/// All general purpose registers of x86_64
#[allow(clippy::upper_case_acronyms)]
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum X86_64Register {
  RAX,
  RBX,
  RCX,
  RDX,
  RSI,
  RDI,
  RBP,
  RSP,
  R8,
  R9,
  R10,
  R11,
  R12,
  R13,
  R14,
  R15,
}

impl X86_64Register {
  pub const fn argument_regs() -> [X86_64Register; 6] {
    [
      X86_64Register::RDI,
      X86_64Register::RSI,
      X86_64Register::RDX,
      X86_64Register::RCX,
      X86_64Register::R8,
      X86_64Register::R9,
    ]
  }

  pub const fn is_caller_saved(&self) -> bool {
    matches!(
      self,
      X86_64Register::RAX
        | X86_64Register::RDI
        | X86_64Register::RSI
        | X86_64Register::RDX
        | X86_64Register::RCX
        | X86_64Register::R8
        | X86_64Register::R9
        | X86_64Register::R10
        | X86_64Register::R11
    )
  }

  pub const fn is_callee_saved(&self) -> bool {
    matches!(
      self,
      X86_64Register::RBX
        | X86_64Register::RBP
        | X86_64Register::R12
        | X86_64Register::R13
        | X86_64Register::R14
        | X86_64Register::R15
    )
  }

  /// The temp standing for this register in the built-in x86_64 description.
  pub fn temp(&self) -> Temp {
    let index = REGISTER_ORDER
      .iter()
      .position(|r| r == self)
      .unwrap_or_else(|| unreachable!("{:?} missing from the register order", self));
    Temp::new(index as u32)
  }
}

impl fmt::Display for X86_64Register {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "%{}", self.as_ref())
  }
}
