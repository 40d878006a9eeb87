// Tiger Backend
//! Output of allocated procedures: assembly text, the abstract assembly
//! before allocation, or a JSON report.

use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use crate::asm::Instr;
use crate::regalloc::Allocation;
use crate::temp::{Label, TempMap};

/// Procedure entry and exit around an allocated body.
pub fn return_x86(allocs: &[Allocation]) -> Result<String> {
  let mut x86 = String::new();
  for alloc in allocs {
    let name = alloc.frame.name();
    let size = alloc.frame.frame_size();
    writeln!(x86, ".globl {}", name)?;
    writeln!(x86, ".set {}, {}", alloc.frame.framesize_label(), size)?;
    writeln!(x86, "{}:", name)?;
    writeln!(x86, "\tsubq ${}, %rsp", size)?;
    for instr in &alloc.instrs {
      let text = instr.format(&alloc.coloring);
      match instr {
        Instr::Label { .. } => writeln!(x86, "{}", text)?,
        // the return sink has no text
        _ if text.is_empty() => {}
        _ => writeln!(x86, "\t{}", text)?,
      }
    }
    writeln!(x86, "\taddq ${}, %rsp", size)?;
    writeln!(x86, "\tretq")?;
    writeln!(x86)?;
  }
  Ok(x86)
}

/// Selected instructions with temps printed by number.
pub fn return_abs(procs: &[(Label, Vec<Instr>)]) -> Result<String> {
  let mut abs = String::new();
  let names = TempMap::new();
  for (name, instrs) in procs {
    writeln!(abs, "{}:", name)?;
    for (i, instr) in instrs.iter().enumerate() {
      writeln!(abs, "{:>4}  {}", i, instr.format(&names))?;
    }
    writeln!(abs)?;
  }
  Ok(abs)
}

#[derive(Serialize)]
struct Report {
  name: String,
  frame_size: i64,
  outgoing_size: i64,
  rounds: usize,
  spilled: Vec<String>,
  coloring: BTreeMap<String, String>,
  instrs: Vec<String>,
}

impl Report {
  fn new(alloc: &Allocation) -> Self {
    Report {
      name: alloc.frame.name().to_string(),
      frame_size: alloc.frame.frame_size(),
      outgoing_size: alloc.frame.outgoing_size(),
      rounds: alloc.rounds,
      spilled: alloc.spilled.iter().map(|t| t.to_string()).collect(),
      coloring: alloc
        .coloring
        .iter()
        .filter(|(t, _)| t.is_virtual())
        .map(|(t, r)| (t.to_string(), r.clone()))
        .collect(),
      instrs: alloc
        .instrs
        .iter()
        .map(|i| i.format(&alloc.coloring))
        .filter(|s| !s.is_empty())
        .collect(),
    }
  }
}

pub fn return_json(allocs: &[Allocation]) -> Result<String> {
  let reports = allocs.iter().map(Report::new).collect::<Vec<_>>();
  Ok(serde_json::to_string_pretty(&reports)?)
}

/// Write `text` to `path`, or stdout when there is none.
pub fn emit(text: &str, path: Option<&str>) -> Result<()> {
  match path {
    Some(path) => std::fs::write(path, text)?,
    None => print!("{}", text),
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::frame::Frame;
  use crate::registers::X86_64;
  use crate::temp::Temp;

  fn allocation() -> Allocation {
    let mut frame = Frame::new(Label::named("f"), 0, &X86_64);
    let mut namer = crate::temp::Namer::new();
    frame.alloc_local(true, &mut namer);
    frame.reserve_outgoing(1);
    let mut coloring = TempMap::new();
    coloring.insert(Temp::new(100), "%rbx".to_string());
    coloring.insert(X86_64.return_value(), "%rax".to_string());
    Allocation {
      instrs: vec![
        Instr::label(Label::named("L0")),
        Instr::oper("movq $1, `d0", vec![Temp::new(100)], vec![]),
        Instr::mov("movq `s0, `d0", X86_64.return_value(), Temp::new(100)),
        Instr::oper("", vec![], vec![X86_64.return_value()]),
      ],
      coloring,
      spilled: vec![Temp::new(101)],
      rounds: 2,
      frame,
    }
  }

  #[test]
  fn test_x86_prologue_and_epilogue() {
    let text = return_x86(&[allocation()]).unwrap();
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(
      lines,
      vec![
        ".globl f",
        ".set f_framesize, 16",
        "f:",
        "\tsubq $16, %rsp",
        "L0:",
        "\tmovq $1, %rbx",
        "\tmovq %rbx, %rax",
        "\taddq $16, %rsp",
        "\tretq",
        "",
      ]
    );
  }

  #[test]
  fn test_json_report() {
    let text = return_json(&[allocation()]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["name"], "f");
    assert_eq!(value[0]["rounds"], 2);
    assert_eq!(value[0]["frame_size"], 16);
    assert_eq!(value[0]["outgoing_size"], 8);
    assert_eq!(value[0]["spilled"][0], "t101");
    assert_eq!(value[0]["coloring"]["t100"], "%rbx");
    assert_eq!(value[0]["instrs"].as_array().unwrap().len(), 3);
  }

  #[test]
  fn test_abs_numbers_instructions() {
    let alloc = allocation();
    let text = return_abs(&[(Label::named("f"), alloc.instrs)]).unwrap();
    assert!(text.contains("   1  movq $1, t100"));
  }
}
