// Tiger Backend
//! Rewriting spilled temps through frame slots, and dropping moves that
//! allocation made redundant.

use std::collections::HashMap;

use anyhow::Result;

use crate::asm::Instr;
use crate::codegen::Context;
use crate::frame::{Access, Frame};
use crate::registers::MachineDesc;
use crate::temp::{Namer, Temp, TempMap};
use crate::tree::{Exp, Stm};

/// Give each spilled temp a frame slot. Every instruction that touches one
/// gets a fresh temp for it, loaded before and stored after as needed.
/// Returns the new program and the temps introduced.
pub fn rewrite_program(
  instrs: Vec<Instr>,
  spilled: &[Temp],
  frame: &mut Frame,
  machine: &MachineDesc,
  namer: &mut Namer,
) -> Result<(Vec<Instr>, Vec<Temp>)> {
  let slots = spilled
    .iter()
    .map(|t| (*t, frame.alloc_local(true, namer)))
    .collect::<HashMap<Temp, Access>>();
  for (t, slot) in &slots {
    log::debug!("spill {} to {:?}", t, slot);
  }

  let fp = Exp::Temp(machine.frame_pointer());
  let framesize = frame.framesize_label();
  let mut ctx = Context::new(machine, namer, &framesize);
  let mut fresh = vec![];

  for mut instr in instrs {
    let (defs, uses) = (instr.defs(), instr.uses());
    let mut loads = vec![];
    let mut stores = vec![];
    for t in spilled {
      let (used, defined) = (uses.contains(t), defs.contains(t));
      if !used && !defined {
        continue;
      }
      let v = ctx.temp();
      fresh.push(v);
      let slot = slots[t].to_exp(fp.clone());
      if used {
        instr.rewrite_uses(*t, v);
        loads.push(Stm::Move(Exp::Temp(v), slot.clone()));
      }
      if defined {
        instr.rewrite_defs(*t, v);
        stores.push(Stm::Move(slot, Exp::Temp(v)));
      }
    }
    ctx.munch_stmts(loads)?;
    ctx.add_instr(instr);
    ctx.munch_stmts(stores)?;
  }

  Ok((ctx.instrs, fresh))
}

/// Drop moves whose source and destination ended up in the same register.
pub fn remove_redundant_moves(instrs: Vec<Instr>, coloring: &TempMap) -> Vec<Instr> {
  let before = instrs.len();
  let kept = instrs
    .into_iter()
    .filter(|instr| match instr.move_pair() {
      Some((src, dst)) => match (coloring.get(src), coloring.get(dst)) {
        (Some(a), Some(b)) => a != b,
        _ => true,
      },
      None => true,
    })
    .collect::<Vec<_>>();
  log::debug!("removed {} redundant moves", before - kept.len());
  kept
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::registers::X86_64;
  use crate::temp::Label;

  fn t(n: u32) -> Temp {
    Temp::new(n)
  }

  #[test]
  fn test_spilled_use_and_def_share_a_temp() {
    let mut namer = Namer::new().resume_after(Some(t(199)));
    let mut frame = Frame::new(Label::named("f"), 0, &X86_64);
    let instrs = vec![Instr::oper(
      "addq `s0, `d0",
      vec![t(100)],
      vec![t(101), t(100)],
    )];
    let (out, fresh) =
      rewrite_program(instrs, &[t(100)], &mut frame, &X86_64, &mut namer).unwrap();

    assert_eq!(fresh, vec![t(200)]);
    assert_eq!(out.len(), 3);
    let sp = X86_64.stack_pointer();
    assert_eq!(out[0].defs(), vec![t(200)]);
    assert_eq!(out[0].uses(), vec![sp]);
    assert_eq!(out[1].defs(), vec![t(200)]);
    assert_eq!(out[1].uses(), vec![t(101), t(200)]);
    assert_eq!(out[2].uses(), vec![t(200), sp]);
    assert_eq!(out[0].to_string(), "\tmovq f_framesize-8(t15), t200");
    assert_eq!(frame.frame_size(), 8);
  }

  #[test]
  fn test_each_instruction_gets_its_own_temp() {
    let mut namer = Namer::new().resume_after(Some(t(199)));
    let mut frame = Frame::new(Label::named("f"), 16, &X86_64);
    let instrs = vec![
      Instr::oper("movq $1, `d0", vec![t(100)], vec![]),
      Instr::oper("nop", vec![], vec![]),
      Instr::oper("", vec![], vec![t(100)]),
    ];
    let (out, fresh) =
      rewrite_program(instrs, &[t(100)], &mut frame, &X86_64, &mut namer).unwrap();
    assert_eq!(fresh, vec![t(200), t(201)]);
    // def, store, nop, load, use
    assert_eq!(out.len(), 5);
    assert!(out.iter().all(|i| !i.uses().contains(&t(100)) && !i.defs().contains(&t(100))));
    assert_eq!(frame.frame_size(), 24);
  }

  #[test]
  fn test_remove_redundant_moves() {
    let mut coloring = TempMap::new();
    coloring.insert(t(100), "%rax".to_string());
    coloring.insert(t(101), "%rax".to_string());
    coloring.insert(t(102), "%rbx".to_string());
    let instrs = vec![
      Instr::mov("movq `s0, `d0", t(101), t(100)),
      Instr::mov("movq `s0, `d0", t(102), t(100)),
      Instr::oper("", vec![], vec![t(101), t(102)]),
    ];
    let out = remove_redundant_moves(instrs, &coloring);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].move_pair(), Some((t(100), t(102))));
  }
}
