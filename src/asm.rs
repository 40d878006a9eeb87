// Tiger Backend
//! Abstract Assembly
//!
//! Instructions carry an AT&T template whose operands are written `` `s<i> ``
//! (i-th use), `` `d<i> `` (i-th def) and `` `j<i> `` (i-th jump target).
//! Only emission looks inside the template.

use std::fmt::{Display, Error, Formatter};

use enum_as_inner::EnumAsInner;

use crate::temp::{Label, Temp, TempMap};

/// Where control may go after an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Targets {
  pub labels: Vec<Label>,
  /// Conditional branches also continue with the next instruction.
  pub falls_through: bool,
}

/// Abstract Assembly Instruction
#[derive(Clone, Debug, PartialEq, Eq, EnumAsInner)]
pub enum Instr {
  Label {
    assem: String,
    label: Label,
  },
  Move {
    assem: String,
    dst: Option<Temp>,
    src: Option<Temp>,
  },
  Oper {
    assem: String,
    dst: Vec<Temp>,
    src: Vec<Temp>,
    jumps: Option<Targets>,
  },
}

impl Instr {
  pub fn label(label: Label) -> Self {
    Instr::Label {
      assem: format!("{}:", label),
      label,
    }
  }

  pub fn mov(assem: &str, dst: Temp, src: Temp) -> Self {
    Instr::Move {
      assem: assem.to_string(),
      dst: Some(dst),
      src: Some(src),
    }
  }

  pub fn oper(assem: impl Into<String>, dst: Vec<Temp>, src: Vec<Temp>) -> Self {
    Instr::Oper {
      assem: assem.into(),
      dst,
      src,
      jumps: None,
    }
  }

  /// Unconditional transfer to `labels`.
  pub fn jump(assem: &str, src: Vec<Temp>, labels: Vec<Label>) -> Self {
    Instr::Oper {
      assem: assem.to_string(),
      dst: vec![],
      src,
      jumps: Some(Targets {
        labels,
        falls_through: false,
      }),
    }
  }

  /// Conditional transfer to `labels`, otherwise on to the next instruction.
  pub fn branch(assem: &str, labels: Vec<Label>) -> Self {
    Instr::Oper {
      assem: assem.to_string(),
      dst: vec![],
      src: vec![],
      jumps: Some(Targets {
        labels,
        falls_through: true,
      }),
    }
  }

  pub fn defs(&self) -> Vec<Temp> {
    match self {
      Instr::Label { .. } => vec![],
      Instr::Move { dst, .. } => dst.iter().copied().collect(),
      Instr::Oper { dst, .. } => dst.clone(),
    }
  }

  pub fn uses(&self) -> Vec<Temp> {
    match self {
      Instr::Label { .. } => vec![],
      Instr::Move { src, .. } => src.iter().copied().collect(),
      Instr::Oper { src, .. } => src.clone(),
    }
  }

  pub fn targets(&self) -> Option<&Targets> {
    match self {
      Instr::Oper { jumps, .. } => jumps.as_ref(),
      _ => None,
    }
  }

  /// Whether control can reach the following instruction.
  pub fn falls_through(&self) -> bool {
    self.targets().map_or(true, |t| t.falls_through)
  }

  /// Both operands of a register-to-register move, when present.
  pub fn move_pair(&self) -> Option<(Temp, Temp)> {
    match self {
      Instr::Move {
        src: Some(src),
        dst: Some(dst),
        ..
      } => Some((*src, *dst)),
      _ => None,
    }
  }

  /// Replace `from` by `to` in the use list. Returns whether anything changed.
  pub fn rewrite_uses(&mut self, from: Temp, to: Temp) -> bool {
    match self {
      Instr::Label { .. } => false,
      Instr::Move { src, .. } => rewrite_slot(src.iter_mut(), from, to),
      Instr::Oper { src, .. } => rewrite_slot(src.iter_mut(), from, to),
    }
  }

  /// Replace `from` by `to` in the def list. Returns whether anything changed.
  pub fn rewrite_defs(&mut self, from: Temp, to: Temp) -> bool {
    match self {
      Instr::Label { .. } => false,
      Instr::Move { dst, .. } => rewrite_slot(dst.iter_mut(), from, to),
      Instr::Oper { dst, .. } => rewrite_slot(dst.iter_mut(), from, to),
    }
  }

  /// Fill in the template using `map` for register names.
  pub fn format(&self, map: &TempMap) -> String {
    match self {
      Instr::Label { assem, .. } => assem.clone(),
      Instr::Move { assem, dst, src } => {
        let dst = dst.iter().copied().collect::<Vec<_>>();
        let src = src.iter().copied().collect::<Vec<_>>();
        fill_template(assem, &dst, &src, None, map)
      }
      Instr::Oper {
        assem,
        dst,
        src,
        jumps,
      } => fill_template(assem, dst, src, jumps.as_ref(), map),
    }
  }
}

fn rewrite_slot<'a>(slots: impl Iterator<Item = &'a mut Temp>, from: Temp, to: Temp) -> bool {
  let mut changed = false;
  for slot in slots {
    if *slot == from {
      *slot = to;
      changed = true;
    }
  }
  changed
}

fn fill_template(
  assem: &str,
  dst: &[Temp],
  src: &[Temp],
  jumps: Option<&Targets>,
  map: &TempMap,
) -> String {
  let mut out = String::with_capacity(assem.len());
  let mut chars = assem.chars().peekable();
  while let Some(c) = chars.next() {
    if c != '`' {
      out.push(c);
      continue;
    }
    let kind = chars.next();
    let mut index = 0usize;
    while let Some(d) = chars.peek().and_then(|d| d.to_digit(10)) {
      index = index * 10 + d as usize;
      chars.next();
    }
    match kind {
      Some('s') => out.push_str(&operand(src, index, map)),
      Some('d') => out.push_str(&operand(dst, index, map)),
      Some('j') => match jumps.and_then(|j| j.labels.get(index)) {
        Some(label) => out.push_str(label.name()),
        None => out.push_str(&format!("<j{}?>", index)),
      },
      Some('`') => out.push('`'),
      Some(other) => {
        out.push('`');
        out.push(other);
      }
      None => out.push('`'),
    }
  }
  out
}

fn operand(temps: &[Temp], index: usize, map: &TempMap) -> String {
  match temps.get(index) {
    Some(t) => map.lookup(*t),
    None => format!("<{}?>", index),
  }
}

impl Display for Instr {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    match self {
      Instr::Label { .. } => write!(fmt, "{}", self.format(&TempMap::new())),
      _ => write!(fmt, "\t{}", self.format(&TempMap::new())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_template() {
    let mut map = TempMap::new();
    map.insert(Temp::new(100), "%rbx".to_string());
    map.insert(Temp::new(101), "%rcx".to_string());
    let add = Instr::oper(
      "addq `s0, `d0",
      vec![Temp::new(101)],
      vec![Temp::new(100), Temp::new(101)],
    );
    assert_eq!(add.format(&map), "addq %rbx, %rcx");

    let jl = Instr::branch("jl `j0", vec![Label::named("L3"), Label::named("L4")]);
    assert_eq!(jl.format(&map), "jl L3");
    assert!(jl.falls_through());
  }

  #[test]
  fn test_unallocated_temps_print_by_number() {
    let mv = Instr::mov("movq `s0, `d0", Temp::new(7), Temp::new(120));
    assert_eq!(mv.to_string(), "\tmovq t120, t7");
  }

  #[test]
  fn test_rewrite_keeps_other_slots() {
    let mut op = Instr::oper(
      "imulq `s0",
      vec![Temp::new(0), Temp::new(3)],
      vec![Temp::new(104), Temp::new(0)],
    );
    assert!(op.rewrite_uses(Temp::new(104), Temp::new(130)));
    assert!(!op.rewrite_defs(Temp::new(104), Temp::new(130)));
    assert_eq!(op.uses(), vec![Temp::new(130), Temp::new(0)]);
    assert_eq!(op.defs(), vec![Temp::new(0), Temp::new(3)]);
  }

  #[test]
  fn test_unconditional_jump_does_not_fall_through() {
    let jmp = Instr::jump("jmp `j0", vec![], vec![Label::named("L0")]);
    assert!(!jmp.falls_through());
    assert!(Instr::label(Label::named("L0")).falls_through());
  }
}
