// Tiger Backend
//! Register allocation.
//!
//! Each round builds the flow graph, runs liveness, builds the interference
//! graph and colors it. Actual spills are rewritten through frame slots and
//! the round starts over on the new program.

mod allocation;
mod coalesce;
mod flowgraph;
mod interference;
mod liveness;
mod spill;

use std::collections::HashSet;

use anyhow::{bail, Result};

use crate::args::AllocConfig;
use crate::asm::Instr;
use crate::frame::Frame;
use crate::registers::MachineDesc;
use crate::temp::{Namer, Temp, TempMap};

pub use flowgraph::FlowGraph;
pub use interference::InterferenceGraph;
pub use liveness::Liveness;

use allocation::{ColorResult, Coloring};
use spill::{remove_redundant_moves, rewrite_program};

/// A register-assigned procedure.
#[derive(Debug)]
pub struct Allocation {
  pub instrs: Vec<Instr>,
  pub coloring: TempMap,
  /// Every temp spilled over all rounds.
  pub spilled: Vec<Temp>,
  pub rounds: usize,
  pub frame: Frame,
}

pub struct RegAllocator<'a> {
  machine: &'a MachineDesc,
  config: &'a AllocConfig,
}

impl<'a> RegAllocator<'a> {
  pub fn new(machine: &'a MachineDesc, config: &'a AllocConfig) -> Self {
    RegAllocator { machine, config }
  }

  pub fn allocate(
    &self,
    mut instrs: Vec<Instr>,
    mut frame: Frame,
    namer: &mut Namer,
  ) -> Result<Allocation> {
    let machine = self.machine;
    let original = instrs
      .iter()
      .flat_map(|i| i.defs().into_iter().chain(i.uses()))
      .filter(|t| !machine.is_register(*t))
      .collect::<HashSet<_>>();
    let bound = original.len() + 1;

    let mut introduced = HashSet::new();
    let mut spilled = vec![];
    for round in 1..=bound {
      let flow = FlowGraph::build(&instrs)?;
      let liveness = Liveness::analyze(&flow)?;
      let ig = InterferenceGraph::build(&flow, &liveness, machine);
      let result = Coloring::new(&ig, machine, self.config, &introduced).run()?;
      log::debug!(
        "{} round {}: {} nodes, {} coalesced moves, {} spills",
        frame.name(),
        round,
        ig.len(),
        result.coalesced_moves,
        result.spilled.len()
      );

      if result.spilled.is_empty() {
        let coloring = self.coloring(&ig, &result)?;
        if self.config.eliminate_redundant_moves {
          instrs = remove_redundant_moves(instrs, &coloring);
        }
        return Ok(Allocation {
          instrs,
          coloring,
          spilled,
          rounds: round,
          frame,
        });
      }

      let (rewritten, fresh) = rewrite_program(instrs, &result.spilled, &mut frame, machine, namer)?;
      instrs = rewritten;
      introduced.extend(fresh);
      spilled.extend(result.spilled);
    }
    bail!(
      "Allocation of {} did not settle within {} rounds",
      frame.name(),
      bound
    )
  }

  /// Register names for every node of the final graph.
  fn coloring(&self, ig: &InterferenceGraph, result: &ColorResult) -> Result<TempMap> {
    let mut map = TempMap::new();
    for n in ig.nodes() {
      let t = ig.temp(n);
      let register = match result.colors.get(&t) {
        Some(c) => self.machine.register_of_color(*c),
        None if self.machine.is_register(t) => t,
        None => bail!("Temp {} was neither colored nor spilled", t),
      };
      if let Some(name) = self.machine.asm_name(register) {
        map.insert(t, name);
      }
    }
    Ok(map)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::codegen::munch_proc;
  use crate::registers::tests::toy_machine;
  use crate::registers::X86_64;
  use crate::temp::Label;
  use crate::tree::{BinOp, Exp, Stm};

  fn t(n: u32) -> Temp {
    Temp::new(n)
  }

  fn temp(n: u32) -> Exp {
    Exp::Temp(t(n))
  }

  fn compile(body: Vec<Stm>, machine: &MachineDesc, config: &AllocConfig) -> Result<Allocation> {
    let mut namer = Namer::new().resume_after(Some(t(199)));
    let mut frame = Frame::new(Label::named("f"), 0, machine);
    let instrs = munch_proc(body, &mut frame, machine, &mut namer)?;
    RegAllocator::new(machine, config).allocate(instrs, frame, &mut namer)
  }

  fn keep_moves() -> AllocConfig {
    AllocConfig {
      check_invariants: true,
      eliminate_redundant_moves: false,
      ..AllocConfig::default()
    }
  }

  /// Every temp has a register and no two interfering temps share one.
  fn assert_valid(alloc: &Allocation, machine: &MachineDesc) {
    for instr in &alloc.instrs {
      for t in instr.defs().into_iter().chain(instr.uses()) {
        assert!(alloc.coloring.get(t).is_some(), "{} has no register", t);
      }
    }
    let flow = FlowGraph::build(&alloc.instrs).unwrap();
    let live = Liveness::analyze(&flow).unwrap();
    let ig = InterferenceGraph::build(&flow, &live, machine);
    for (a, b) in ig.edges() {
      let (a, b) = (ig.temp(a), ig.temp(b));
      if machine.is_register(a) && machine.is_register(b) {
        continue;
      }
      assert_ne!(alloc.coloring.get(a), alloc.coloring.get(b), "{} and {} interfere", a, b);
    }
  }

  /// c <- 3; a <- 1; b <- 2; t <- (a + b) * c; r0 <- t
  fn product(machine: &MachineDesc) -> Vec<Stm> {
    let sum = Exp::binop(BinOp::Plus, temp(100), temp(101));
    vec![
      Stm::Move(temp(102), Exp::Const(3)),
      Stm::Move(temp(100), Exp::Const(1)),
      Stm::Move(temp(101), Exp::Const(2)),
      Stm::Move(temp(103), Exp::binop(BinOp::Mul, sum, temp(102))),
      Stm::Move(Exp::Temp(machine.return_value()), temp(103)),
    ]
  }

  #[test]
  fn test_product_on_two_registers_spills_once() {
    let toy = toy_machine();
    let alloc = compile(product(&toy), &toy, &keep_moves()).unwrap();
    assert_eq!(alloc.spilled, vec![t(102)]);
    assert_eq!(alloc.rounds, 2);
    assert_eq!(alloc.frame.frame_size(), 8);
    assert_eq!(alloc.coloring.get(t(100)), Some("%r0"));
    assert_eq!(alloc.coloring.get(t(101)), Some("%r1"));
    assert_valid(&alloc, &toy);
  }

  #[test]
  fn test_redundant_moves_are_removed() {
    let toy = toy_machine();
    let alloc = compile(product(&toy), &toy, &AllocConfig::default()).unwrap();
    for instr in &alloc.instrs {
      if let Some((src, dst)) = instr.move_pair() {
        assert_ne!(alloc.coloring.get(src), alloc.coloring.get(dst));
      }
    }
    // the spill load and store stay, every move is gone
    assert_eq!(alloc.instrs.len(), 8);
    assert!(alloc.instrs.iter().all(|i| i.move_pair().is_none()));
  }

  #[test]
  fn test_sum_on_two_registers_needs_no_spill() {
    let toy = toy_machine();
    let body = vec![
      Stm::Move(temp(100), Exp::Const(1)),
      Stm::Move(temp(101), Exp::Const(2)),
      Stm::Move(temp(102), Exp::binop(BinOp::Plus, temp(100), temp(101))),
      Stm::Move(Exp::Temp(toy.return_value()), temp(102)),
    ];
    let alloc = compile(body, &toy, &keep_moves()).unwrap();
    assert!(alloc.spilled.is_empty());
    assert_eq!(alloc.rounds, 1);
    assert_eq!(alloc.frame.frame_size(), 0);
    assert_valid(&alloc, &toy);
  }

  #[test]
  fn test_without_coalescing() {
    let toy = toy_machine();
    let config = AllocConfig {
      coalescing: false,
      ..keep_moves()
    };
    let alloc = compile(product(&toy), &toy, &config).unwrap();
    assert_valid(&alloc, &toy);
    assert!(alloc.instrs.iter().any(|i| i.move_pair().is_some()));
  }

  #[test]
  fn test_too_many_simultaneous_uses_is_reported() {
    let toy = toy_machine();
    let mut namer = Namer::new().resume_after(Some(t(199)));
    let frame = Frame::new(Label::named("f"), 0, &toy);
    let instrs = vec![
      Instr::oper("movq $1, `d0", vec![t(100)], vec![]),
      Instr::oper("movq $2, `d0", vec![t(101)], vec![]),
      Instr::oper("movq $3, `d0", vec![t(102)], vec![]),
      Instr::oper("", vec![], vec![t(100), t(101), t(102)]),
    ];
    let err = RegAllocator::new(&toy, &AllocConfig::default())
      .allocate(instrs, frame, &mut namer)
      .unwrap_err();
    assert!(err.to_string().contains("within 4 rounds"));
  }

  #[test]
  fn test_spilled_stack_arguments_address_a_fixed_stack_pointer() {
    let toy = toy_machine();
    // g(t100, ..., t104): two register arguments, three on the stack
    let mut body = (0..5)
      .map(|i| Stm::Move(temp(100 + i), Exp::Const(i as i64 + 1)))
      .collect::<Vec<_>>();
    let args = (0..5).map(|i| temp(100 + i)).collect();
    body.push(Stm::Exp(Exp::call(Exp::Name(Label::named("g")), args)));

    let alloc = compile(body, &toy, &keep_moves()).unwrap();
    assert!(!alloc.spilled.is_empty());
    assert_valid(&alloc, &toy);

    let sp = toy.stack_pointer();
    assert!(alloc.instrs.iter().all(|i| !i.defs().contains(&sp)));

    let text = alloc
      .instrs
      .iter()
      .map(|i| i.format(&alloc.coloring))
      .collect::<Vec<_>>();
    for slot in [", (%sp)", ", 8(%sp)", ", 16(%sp)"].iter() {
      assert_eq!(text.iter().filter(|s| s.ends_with(slot)).count(), 1, "{}", slot);
    }

    // spill slots stay above the outgoing area
    let locals = 8 * alloc.spilled.len() as i64;
    assert_eq!(alloc.frame.outgoing_size(), 24);
    assert_eq!(alloc.frame.frame_size(), locals + 24);
    for s in &text {
      if let Some(rest) = s.split("f_framesize-").nth(1) {
        let offset = rest
          .split('(')
          .next()
          .and_then(|n| n.parse::<i64>().ok())
          .unwrap();
        assert!(offset > 0 && offset <= locals, "{}", s);
      }
    }
  }

  #[test]
  fn test_values_live_across_calls_survive() {
    let mut namer = Namer::new().resume_after(Some(t(199)));
    let mut frame = Frame::new(Label::named("f"), 0, &X86_64);
    let rax = X86_64.return_value();
    let body = vec![
      Stm::Move(temp(100), Exp::Const(1)),
      Stm::Move(
        temp(101),
        Exp::call(Exp::Name(Label::named("g")), vec![temp(100)]),
      ),
      Stm::Move(Exp::Temp(rax), Exp::binop(BinOp::Plus, temp(100), temp(101))),
    ];
    let body = frame.save_callee_saves(body, &X86_64, &mut namer);
    let instrs = munch_proc(body, &mut frame, &X86_64, &mut namer).unwrap();
    let alloc = RegAllocator::new(&X86_64, &keep_moves())
      .allocate(instrs, frame, &mut namer)
      .unwrap();
    assert_valid(&alloc, &X86_64);

    if let Some(name) = alloc.coloring.get(t(100)) {
      let reg = X86_64.register_named(&name[1..]).unwrap();
      assert!(!X86_64.caller_saves().contains(&reg));
    }
  }
}
