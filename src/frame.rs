// Tiger Backend
//! Stack frames and the locations of locals and spill slots.

use enum_as_inner::EnumAsInner;

use crate::registers::MachineDesc;
use crate::temp::{Label, Namer, Temp};
use crate::tree::{BinOp, Exp, Stm};

/// Where a local lives.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumAsInner)]
pub enum Access {
  InReg(Temp),
  /// Byte offset from the frame pointer.
  InFrame(i64),
}

impl Access {
  /// The IR that reads or writes this location, given the frame pointer.
  pub fn to_exp(&self, fp: Exp) -> Exp {
    match *self {
      Access::InReg(t) => Exp::Temp(t),
      Access::InFrame(offset) => Exp::mem(Exp::binop(BinOp::Plus, fp, Exp::Const(offset))),
    }
  }
}

/// The frame of one procedure. The frame pointer is virtual: it equals the
/// stack pointer plus the frame size, which is only known after allocation.
///
/// Locals and spill slots sit below the frame pointer. The outgoing argument
/// area sits at the stack pointer, so the stack pointer never moves inside
/// the body.
#[derive(Debug, Clone)]
pub struct Frame {
  name: Label,
  offset: i64,
  /// Bytes for arguments that do not fit in registers.
  outgoing: i64,
  word_size: i64,
}

impl Frame {
  /// `locals_size` bytes are already taken by the translator's locals.
  pub fn new(name: Label, locals_size: i64, machine: &MachineDesc) -> Self {
    Frame {
      name,
      offset: -locals_size,
      outgoing: 0,
      word_size: machine.word_size(),
    }
  }

  pub fn name(&self) -> &Label {
    &self.name
  }

  /// Escaping locals (and all spill slots) go one word below the last slot.
  pub fn alloc_local(&mut self, escape: bool, namer: &mut Namer) -> Access {
    if escape {
      self.offset -= self.word_size;
      Access::InFrame(self.offset)
    } else {
      Access::InReg(namer.new_temp())
    }
  }

  /// Make room for a call passing `args` arguments on the stack.
  pub fn reserve_outgoing(&mut self, args: usize) {
    self.outgoing = self.outgoing.max(args as i64 * self.word_size);
  }

  pub fn outgoing_size(&self) -> i64 {
    self.outgoing
  }

  pub fn frame_size(&self) -> i64 {
    -self.offset + self.outgoing
  }

  /// Copy every non-reserved callee-saved register into a fresh temp before
  /// `body` and back after it, so the allocator may spill them like any
  /// other value.
  pub fn save_callee_saves(
    &self,
    body: Vec<Stm>,
    machine: &MachineDesc,
    namer: &mut Namer,
  ) -> Vec<Stm> {
    let saved = machine
      .callee_saves()
      .iter()
      .filter(|r| !machine.is_reserved(**r))
      .map(|r| (*r, namer.new_temp()))
      .collect::<Vec<_>>();

    let mut stms = saved
      .iter()
      .map(|(r, t)| Stm::Move(Exp::Temp(*t), Exp::Temp(*r)))
      .collect::<Vec<_>>();
    stms.extend(body);
    stms.extend(
      saved
        .iter()
        .map(|(r, t)| Stm::Move(Exp::Temp(*r), Exp::Temp(*t))),
    );
    stms
  }

  /// Assembler symbol holding the frame size, set by the prologue.
  pub fn framesize_label(&self) -> String {
    format!("{}_framesize", self.name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::registers::X86_64;

  #[test]
  fn test_alloc_local_grows_downwards() {
    let mut namer = Namer::new();
    let mut frame = Frame::new(Label::named("f"), 16, &X86_64);
    assert_eq!(frame.alloc_local(true, &mut namer), Access::InFrame(-24));
    assert_eq!(frame.alloc_local(true, &mut namer), Access::InFrame(-32));
    assert!(frame.alloc_local(false, &mut namer).is_in_reg());
    assert_eq!(frame.frame_size(), 32);
    assert_eq!(frame.framesize_label(), "f_framesize");
  }

  #[test]
  fn test_outgoing_area_is_below_the_locals() {
    let mut namer = Namer::new();
    let mut frame = Frame::new(Label::named("f"), 8, &X86_64);
    frame.reserve_outgoing(3);
    frame.reserve_outgoing(1);
    assert_eq!(frame.outgoing_size(), 24);
    assert_eq!(frame.alloc_local(true, &mut namer), Access::InFrame(-16));
    assert_eq!(frame.frame_size(), 40);
  }

  #[test]
  fn test_callee_saves_are_copied_around_the_body() {
    let mut namer = Namer::new();
    let frame = Frame::new(Label::named("f"), 0, &X86_64);
    let body = vec![Stm::Label(Label::named("body"))];
    let stms = frame.save_callee_saves(body, &X86_64, &mut namer);

    // rbx r12 r13 r14 r15, rbp is the frame pointer
    assert_eq!(stms.len(), 11);
    assert_eq!(stms[5], Stm::Label(Label::named("body")));
    let rbx = X86_64.register_named("rbx").unwrap();
    assert_eq!(stms[0], Stm::Move(Exp::Temp(Temp::new(100)), Exp::Temp(rbx)));
    assert_eq!(stms[6], Stm::Move(Exp::Temp(rbx), Exp::Temp(Temp::new(100))));
  }

  #[test]
  fn test_in_frame_access_is_fp_relative() {
    let fp = Exp::Temp(X86_64.frame_pointer());
    let exp = Access::InFrame(-8).to_exp(fp.clone());
    assert_eq!(exp, Exp::mem(Exp::binop(BinOp::Plus, fp, Exp::Const(-8))));
  }
}
