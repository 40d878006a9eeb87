// Tiger Backend
//! Machine description: the register file and calling convention every pass
//! is handed explicitly.

pub(crate) mod consts;
pub(crate) mod reg;

use std::collections::HashSet;

use anyhow::{anyhow, bail, Result};
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::temp::{Temp, FIRST_VIRTUAL_TEMP};

use self::consts::{
  FRAME_POINTER, MUL_DIV_PAIR, REGISTER_ORDER, REG_ALLOC_POOL_SIZE, RETURN_VALUE, SHIFT_COUNT,
  SHIFT_COUNT_OPERAND, STACK_ELEM_SIZE, STACK_POINTER,
};
use self::reg::X86_64Register;

lazy_static! {
  /// The built-in x86_64 SysV description. Read-only; passes still take it
  /// as a parameter.
  pub static ref X86_64: MachineDesc = MachineDesc::x86_64();
}

/// A register file as written in a target TOML file.
///
/// ```toml
/// word_size = 8
/// allocatable = ["r0", "r1"]
/// frame_pointer = "fp"
/// stack_pointer = "sp"
/// return_value = "r0"
/// arguments = ["r0", "r1"]
/// caller_saves = ["r0", "r1"]
/// callee_saves = []
/// mul_div = ["r0", "r1"]
/// shift_count = "r1"
/// shift_count_operand = "%r1"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSpec {
  pub word_size: i64,
  /// Allocatable registers in color order.
  pub allocatable: Vec<String>,
  pub frame_pointer: String,
  pub stack_pointer: String,
  pub return_value: String,
  #[serde(default)]
  pub arguments: Vec<String>,
  #[serde(default)]
  pub caller_saves: Vec<String>,
  #[serde(default)]
  pub callee_saves: Vec<String>,
  pub mul_div: (String, String),
  pub shift_count: String,
  /// How shift instructions spell the count register, `%<shift_count>`
  /// when absent.
  #[serde(default)]
  pub shift_count_operand: Option<String>,
}

impl TargetSpec {
  pub fn from_toml(text: &str) -> Result<Self> {
    toml::from_str(text).map_err(|e| anyhow!("Invalid target description: {}", e))
  }
}

/// Register roles after names have been resolved to temps.
struct Roles {
  arg_regs: Vec<Temp>,
  caller_saves: Vec<Temp>,
  callee_saves: Vec<Temp>,
  return_value: Temp,
  mul_div: (Temp, Temp),
  shift_count: Temp,
  shift_operand: String,
}

/// Temps `0..k` are the allocatable registers (temp `i` has color `i`),
/// followed by the frame pointer and the stack pointer.
#[derive(Debug, Clone)]
pub struct MachineDesc {
  names: Vec<String>,
  k: usize,
  arg_regs: Vec<Temp>,
  caller_saves: Vec<Temp>,
  callee_saves: Vec<Temp>,
  return_value: Temp,
  mul_div: (Temp, Temp),
  shift_count: Temp,
  shift_operand: String,
  word_size: i64,
}

impl MachineDesc {
  fn assemble(names: Vec<String>, k: usize, roles: Roles, word_size: i64) -> Self {
    MachineDesc {
      names,
      k,
      arg_regs: roles.arg_regs,
      caller_saves: roles.caller_saves,
      callee_saves: roles.callee_saves,
      return_value: roles.return_value,
      mul_div: roles.mul_div,
      shift_count: roles.shift_count,
      shift_operand: roles.shift_operand,
      word_size,
    }
  }

  pub fn x86_64() -> Self {
    let names = REGISTER_ORDER
      .iter()
      .map(|r| r.as_ref().to_string())
      .collect::<Vec<_>>();
    let by_role = |filter: fn(&X86_64Register) -> bool| {
      REGISTER_ORDER
        .iter()
        .filter(|r| filter(r))
        .map(|r| r.temp())
        .collect::<Vec<_>>()
    };
    let roles = Roles {
      arg_regs: X86_64Register::argument_regs()
        .iter()
        .map(|r| r.temp())
        .collect(),
      caller_saves: by_role(X86_64Register::is_caller_saved),
      callee_saves: by_role(X86_64Register::is_callee_saved),
      return_value: RETURN_VALUE.temp(),
      mul_div: (MUL_DIV_PAIR.0.temp(), MUL_DIV_PAIR.1.temp()),
      shift_count: SHIFT_COUNT.temp(),
      shift_operand: SHIFT_COUNT_OPERAND.to_string(),
    };
    debug_assert_eq!(FRAME_POINTER.temp().id() as usize, REG_ALLOC_POOL_SIZE);
    debug_assert_eq!(STACK_POINTER.temp().id() as usize, REG_ALLOC_POOL_SIZE + 1);
    Self::assemble(names, REG_ALLOC_POOL_SIZE, roles, STACK_ELEM_SIZE)
  }

  /// Validate a target description and lay out its register temps.
  pub fn from_spec(spec: &TargetSpec) -> Result<Self> {
    if spec.allocatable.is_empty() {
      bail!("Target has no allocatable registers");
    }
    if spec.word_size <= 0 {
      bail!("Word size must be positive, got {}", spec.word_size);
    }
    if spec.frame_pointer == spec.stack_pointer {
      bail!("Frame pointer and stack pointer must be distinct registers");
    }

    let mut names = spec.allocatable.clone();
    names.push(spec.frame_pointer.clone());
    names.push(spec.stack_pointer.clone());
    if names.len() >= FIRST_VIRTUAL_TEMP as usize {
      bail!("Target has {} registers, at most {} are supported", names.len(), FIRST_VIRTUAL_TEMP - 1);
    }
    let mut seen = HashSet::new();
    for name in &names {
      if !seen.insert(name.as_str()) {
        bail!("Register {} is listed twice (reserved registers cannot be allocatable)", name);
      }
    }

    let resolve = |name: &String| -> Result<Temp> {
      names
        .iter()
        .position(|n| n == name)
        .map(|i| Temp::new(i as u32))
        .ok_or_else(|| anyhow!("Unknown register {} in target description", name))
    };
    let resolve_all = |list: &Vec<String>| list.iter().map(resolve).collect::<Result<Vec<_>>>();

    let roles = Roles {
      arg_regs: resolve_all(&spec.arguments)?,
      caller_saves: resolve_all(&spec.caller_saves)?,
      callee_saves: resolve_all(&spec.callee_saves)?,
      return_value: resolve(&spec.return_value)?,
      mul_div: (resolve(&spec.mul_div.0)?, resolve(&spec.mul_div.1)?),
      shift_count: resolve(&spec.shift_count)?,
      shift_operand: spec
        .shift_count_operand
        .clone()
        .unwrap_or_else(|| format!("%{}", spec.shift_count)),
    };
    let k = spec.allocatable.len();
    Ok(Self::assemble(names, k, roles, spec.word_size))
  }

  /// Number of colors.
  pub fn k(&self) -> usize {
    self.k
  }

  pub fn word_size(&self) -> i64 {
    self.word_size
  }

  /// Every register, allocatable first.
  pub fn registers(&self) -> impl Iterator<Item = Temp> {
    (0..self.names.len() as u32).map(Temp::new)
  }

  /// Register with color `i` is `allocatable()[i]`.
  pub fn allocatable(&self) -> impl Iterator<Item = Temp> {
    (0..self.k as u32).map(Temp::new)
  }

  pub fn frame_pointer(&self) -> Temp {
    Temp::new(self.k as u32)
  }

  pub fn stack_pointer(&self) -> Temp {
    Temp::new(self.k as u32 + 1)
  }

  pub fn return_value(&self) -> Temp {
    self.return_value
  }

  pub fn arg_regs(&self) -> &[Temp] {
    &self.arg_regs
  }

  pub fn caller_saves(&self) -> &[Temp] {
    &self.caller_saves
  }

  pub fn callee_saves(&self) -> &[Temp] {
    &self.callee_saves
  }

  pub fn mul_div_pair(&self) -> (Temp, Temp) {
    self.mul_div
  }

  pub fn shift_count(&self) -> Temp {
    self.shift_count
  }

  /// The count register as written in a shift, e.g. `%cl`.
  pub fn shift_count_operand(&self) -> &str {
    &self.shift_operand
  }

  /// Registers that must be considered live at procedure exit.
  pub fn return_sink(&self) -> Vec<Temp> {
    let mut sink = self.callee_saves.clone();
    for t in [self.stack_pointer(), self.return_value] {
      if !sink.contains(&t) {
        sink.push(t);
      }
    }
    sink
  }

  pub fn is_register(&self, t: Temp) -> bool {
    (t.id() as usize) < self.names.len()
  }

  /// Frame and stack pointer: never colored.
  pub fn reserved(&self) -> [Temp; 2] {
    [self.frame_pointer(), self.stack_pointer()]
  }

  /// Frame and stack pointer: excluded from interference and coloring.
  pub fn is_reserved(&self, t: Temp) -> bool {
    self.reserved().contains(&t)
  }

  /// Fixed color of an allocatable register.
  pub fn color_of(&self, t: Temp) -> Option<usize> {
    let id = t.id() as usize;
    if id < self.k {
      Some(id)
    } else {
      None
    }
  }

  pub fn register_of_color(&self, color: usize) -> Temp {
    debug_assert!(color < self.k);
    Temp::new(color as u32)
  }

  /// Bare register name, e.g. `rax`.
  pub fn name(&self, t: Temp) -> Option<&str> {
    self.names.get(t.id() as usize).map(|s| s.as_str())
  }

  /// Assembly spelling, e.g. `%rax`.
  pub fn asm_name(&self, t: Temp) -> Option<String> {
    self.name(t).map(|n| format!("%{}", n))
  }

  pub fn register_named(&self, name: &str) -> Option<Temp> {
    self
      .names
      .iter()
      .position(|n| n == name)
      .map(|i| Temp::new(i as u32))
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;

  const TOY: &str = r#"
    word_size = 8
    allocatable = ["r0", "r1"]
    frame_pointer = "fp"
    stack_pointer = "sp"
    return_value = "r0"
    arguments = ["r0", "r1"]
    caller_saves = ["r0", "r1"]
    callee_saves = []
    mul_div = ["r0", "r1"]
    shift_count = "r1"
  "#;

  /// Two allocatable registers plus the reserved pair.
  pub(crate) fn toy_machine() -> MachineDesc {
    MachineDesc::from_spec(&TargetSpec::from_toml(TOY).unwrap()).unwrap()
  }

  #[test]
  fn test_x86_64_layout() {
    let m = &*X86_64;
    assert_eq!(m.k(), 14);
    assert_eq!(m.name(m.frame_pointer()), Some("rbp"));
    assert_eq!(m.name(m.stack_pointer()), Some("rsp"));
    assert_eq!(m.asm_name(m.return_value()).unwrap(), "%rax");
    assert_eq!(m.arg_regs().len(), 6);
    assert_eq!(m.name(m.arg_regs()[0]), Some("rdi"));
    assert_eq!(m.name(m.shift_count()), Some("rcx"));
    assert_eq!(m.shift_count_operand(), "%cl");
    assert!(m.allocatable().all(|t| !m.is_reserved(t)));
    assert_eq!(m.registers().count(), 16);
  }

  #[test]
  fn test_colors_follow_register_order() {
    let m = &*X86_64;
    for (color, reg) in REGISTER_ORDER.iter().take(m.k()).enumerate() {
      assert_eq!(m.color_of(reg.temp()), Some(color));
      assert_eq!(m.register_of_color(color), reg.temp());
    }
    assert_eq!(m.color_of(m.stack_pointer()), None);
  }

  #[test]
  fn test_return_sink_contains_callee_saves() {
    let m = &*X86_64;
    let sink = m.return_sink();
    assert!(sink.contains(&m.stack_pointer()));
    assert!(sink.contains(&m.return_value()));
    assert!(sink.contains(&X86_64Register::RBX.temp()));
    assert!(!sink.contains(&X86_64Register::RCX.temp()));
  }

  #[test]
  fn test_toy_machine_from_toml() {
    let m = toy_machine();
    assert_eq!(m.k(), 2);
    assert_eq!(m.register_named("sp"), Some(m.stack_pointer()));
    assert_eq!(m.return_sink(), vec![m.stack_pointer(), m.return_value()]);
    assert_eq!(m.shift_count_operand(), "%r1");
  }

  #[test]
  fn test_shift_count_operand_override() {
    let text = format!("{}\nshift_count_operand = \"%r1b\"\n", TOY);
    let m = MachineDesc::from_spec(&TargetSpec::from_toml(&text).unwrap()).unwrap();
    assert_eq!(m.shift_count_operand(), "%r1b");
  }

  #[test]
  fn test_bad_target_descriptions() {
    let reserved_allocatable = TOY.replace(r#"["r0", "r1"]"#, r#"["r0", "sp"]"#);
    let spec = TargetSpec::from_toml(&reserved_allocatable).unwrap();
    assert!(MachineDesc::from_spec(&spec).is_err());

    let unknown = TOY.replace(r#"shift_count = "r1""#, r#"shift_count = "r7""#);
    let spec = TargetSpec::from_toml(&unknown).unwrap();
    assert!(MachineDesc::from_spec(&spec).is_err());
  }
}
