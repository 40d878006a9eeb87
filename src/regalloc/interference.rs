// Tiger Backend
//! Interference graph and move list.
//!
//! There is a node for every temp defined or used by the procedure and for
//! every machine register. Allocatable registers interfere with each other.
//! The frame and stack pointer never interfere with anything.

use std::collections::HashMap;
use std::fmt::Write;

use crate::registers::MachineDesc;
use crate::regalloc::flowgraph::FlowGraph;
use crate::regalloc::liveness::Liveness;
use crate::temp::{Temp, TempMap};
use crate::utils::{Graph, NodeId};

pub struct InterferenceGraph {
  graph: Graph<Temp>,
  index: HashMap<Temp, NodeId>,
  /// `(src, dst)` of every move between two non-reserved temps, deduplicated.
  moves: Vec<(NodeId, NodeId)>,
}

impl InterferenceGraph {
  /// A graph holding only the machine registers.
  pub fn new(machine: &MachineDesc) -> Self {
    let mut ig = InterferenceGraph {
      graph: Graph::new(),
      index: HashMap::new(),
      moves: vec![],
    };
    for r in machine.registers() {
      ig.add_temp(r);
    }
    let colors = machine.allocatable().collect::<Vec<_>>();
    for (i, a) in colors.iter().enumerate() {
      for b in &colors[i + 1..] {
        ig.add_interference(*a, *b);
      }
    }
    ig
  }

  /// Every definition interferes with whatever is live out of its
  /// instruction, except itself and, for a move, the move's source.
  pub fn build(flow: &FlowGraph, liveness: &Liveness, machine: &MachineDesc) -> Self {
    let mut ig = InterferenceGraph::new(machine);

    for node in flow.nodes() {
      let facts = flow.node(node);
      for t in facts.defs.iter().chain(facts.uses.iter()) {
        ig.add_temp(*t);
      }
    }

    for node in flow.nodes() {
      let facts = flow.node(node);
      let move_src = facts.move_pair.map(|(src, _)| src);
      for d in facts.defs.iter().filter(|d| !machine.is_reserved(**d)) {
        for o in liveness.live_out(node) {
          if *o == *d || machine.is_reserved(*o) || Some(*o) == move_src {
            continue;
          }
          ig.add_interference(*d, *o);
        }
      }
      if let Some((src, dst)) = facts.move_pair {
        if !machine.is_reserved(src) && !machine.is_reserved(dst) {
          ig.add_move(src, dst);
        }
      }
    }

    log::debug!(
      "interference graph: {} nodes, {} moves",
      ig.len(),
      ig.moves.len()
    );
    ig
  }

  /// Node for `t`, created if missing.
  pub fn add_temp(&mut self, t: Temp) -> NodeId {
    if let Some(n) = self.index.get(&t) {
      return *n;
    }
    let n = self.graph.add_node(t);
    self.index.insert(t, n);
    n
  }

  pub fn add_interference(&mut self, a: Temp, b: Temp) {
    if a == b {
      return;
    }
    let a = self.add_temp(a);
    let b = self.add_temp(b);
    self.graph.add_edge(a, b);
  }

  pub fn add_move(&mut self, src: Temp, dst: Temp) {
    let pair = (self.add_temp(src), self.add_temp(dst));
    if !self.moves.contains(&pair) {
      self.moves.push(pair);
    }
  }

  pub fn len(&self) -> usize {
    self.graph.len()
  }

  pub fn is_empty(&self) -> bool {
    self.graph.is_empty()
  }

  pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
    self.graph.ids()
  }

  pub fn temp(&self, n: NodeId) -> Temp {
    *self.graph.node(n)
  }

  pub fn node_of(&self, t: Temp) -> Option<NodeId> {
    self.index.get(&t).copied()
  }

  pub fn adjacent(&self, n: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    self.graph.succs(n).iter().copied()
  }

  pub fn interferes(&self, a: Temp, b: Temp) -> bool {
    match (self.node_of(a), self.node_of(b)) {
      (Some(a), Some(b)) => self.graph.has_edge(a, b),
      _ => false,
    }
  }

  pub fn moves(&self) -> &[(NodeId, NodeId)] {
    &self.moves
  }

  /// Each edge once, lower node first.
  pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
    self
      .nodes()
      .flat_map(move |a| self.adjacent(a).filter(move |b| a < *b).map(move |b| (a, b)))
  }

  /// One line per non-register node: `<temp>: <neighbors>`.
  pub fn dump(&self, machine: &MachineDesc, names: &TempMap) -> String {
    let mut out = String::new();
    for n in self.nodes() {
      let t = self.temp(n);
      if machine.is_register(t) {
        continue;
      }
      let adj = self
        .adjacent(n)
        .map(|m| names.lookup(self.temp(m)))
        .collect::<Vec<_>>()
        .join(" ");
      let _ = writeln!(out, "{}: {}", names.lookup(t), adj);
    }
    out
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use rand::rngs::StdRng;
  use rand::{Rng, SeedableRng};

  use super::*;
  use crate::asm::Instr;
  use crate::registers::tests::toy_machine;
  use crate::registers::X86_64;
  use crate::temp::Label;

  fn t(n: u32) -> Temp {
    Temp::new(n)
  }

  fn build(instrs: &[Instr], machine: &MachineDesc) -> InterferenceGraph {
    let flow = FlowGraph::build(instrs).unwrap();
    let live = Liveness::analyze(&flow).unwrap();
    InterferenceGraph::build(&flow, &live, machine)
  }

  #[test]
  fn test_registers_form_a_clique() {
    let ig = InterferenceGraph::new(&X86_64);
    let colors = X86_64.allocatable().collect::<Vec<_>>();
    for a in &colors {
      for b in &colors {
        assert_eq!(ig.interferes(*a, *b), a != b);
      }
    }
    assert!(!ig.interferes(X86_64.frame_pointer(), colors[0]));
    assert!(!ig.interferes(X86_64.stack_pointer(), X86_64.frame_pointer()));
  }

  #[test]
  fn test_move_source_does_not_interfere_with_destination() {
    // a <- 1; b <- a; use a, b
    let instrs = vec![
      Instr::oper("movq $1, `d0", vec![t(100)], vec![]),
      Instr::mov("movq `s0, `d0", t(101), t(100)),
      Instr::oper("", vec![], vec![t(100), t(101)]),
    ];
    let ig = build(&instrs, &X86_64);
    assert!(!ig.interferes(t(100), t(101)));
    assert_eq!(
      ig.moves(),
      &[(ig.node_of(t(100)).unwrap(), ig.node_of(t(101)).unwrap())]
    );
  }

  #[test]
  fn test_overlapping_live_ranges_interfere() {
    let instrs = vec![
      Instr::oper("movq $1, `d0", vec![t(100)], vec![]),
      Instr::oper("movq $2, `d0", vec![t(101)], vec![]),
      Instr::oper("", vec![], vec![t(100), t(101)]),
    ];
    let ig = build(&instrs, &X86_64);
    assert!(ig.interferes(t(100), t(101)));
    assert!(ig.moves().is_empty());
  }

  #[test]
  fn test_reserved_registers_are_left_out() {
    let sp = X86_64.stack_pointer();
    let instrs = vec![
      Instr::oper("movq $1, `d0", vec![t(100)], vec![]),
      Instr::oper("subq $8, `d0", vec![sp], vec![sp]),
      Instr::mov("movq `s0, `d0", t(101), sp),
      Instr::oper("", vec![], vec![t(100), t(101), sp]),
    ];
    let ig = build(&instrs, &X86_64);
    assert!(!ig.interferes(t(100), sp));
    assert!(ig.interferes(t(100), t(101)));
    assert!(ig.moves().is_empty());
  }

  #[test]
  fn test_call_clobbers_interfere_with_values_live_across() {
    let toy = toy_machine();
    let r0 = toy.return_value();
    let instrs = vec![
      Instr::oper("movq $1, `d0", vec![t(100)], vec![]),
      Instr::oper("callq f", toy.caller_saves().to_vec(), vec![]),
      Instr::oper("", vec![], vec![t(100), r0]),
    ];
    let ig = build(&instrs, &toy);
    for r in toy.caller_saves() {
      assert!(ig.interferes(t(100), *r));
    }
  }

  /// Whether `x` is live on exit from instruction `at`, by searching forward
  /// for a use that no definition hides.
  fn live_out_by_search(instrs: &[Instr], flow: &FlowGraph, at: usize, x: Temp) -> bool {
    let mut seen = BTreeSet::new();
    let mut stack = flow
      .succs(NodeId::index_of(at))
      .map(|n| n.index())
      .collect::<Vec<_>>();
    while let Some(i) = stack.pop() {
      if !seen.insert(i) {
        continue;
      }
      if instrs[i].uses().contains(&x) {
        return true;
      }
      if instrs[i].defs().contains(&x) {
        continue;
      }
      stack.extend(flow.succs(NodeId::index_of(i)).map(|n| n.index()));
    }
    false
  }

  fn random_program(rng: &mut StdRng) -> Vec<Instr> {
    let temps = (100..108).map(t).collect::<Vec<_>>();
    let labels = (0..3).map(|i| Label::named(&format!("L{}", i))).collect::<Vec<_>>();
    let pick = |rng: &mut StdRng, n: usize| -> Vec<Temp> {
      (0..n).map(|_| temps[rng.gen_range(0..temps.len())]).collect()
    };

    let mut instrs = vec![];
    for _ in 0..rng.gen_range(5..30) {
      let instr = match rng.gen_range(0..10) {
        0..=3 => {
          let (nd, ns) = (rng.gen_range(0..3), rng.gen_range(0..3));
          Instr::oper("op", pick(rng, nd), pick(rng, ns))
        }
        4..=6 => {
          let ts = pick(rng, 2);
          Instr::mov("movq `s0, `d0", ts[0], ts[1])
        }
        7 => {
          let target = labels[rng.gen_range(0..labels.len())].clone();
          Instr::branch("je `j0", vec![target])
        }
        _ => {
          let target = labels[rng.gen_range(0..labels.len())].clone();
          Instr::jump("jmp `j0", vec![], vec![target])
        }
      };
      instrs.push(instr);
    }
    // every label exactly once, at random places
    for label in &labels {
      let at = rng.gen_range(0..=instrs.len());
      instrs.insert(at, Instr::label(label.clone()));
    }
    let live = pick(rng, 3);
    instrs.push(Instr::oper("", vec![], live));
    instrs
  }

  #[test]
  fn test_matches_brute_force_liveness() {
    let mut rng = StdRng::seed_from_u64(0x7167e5);
    for _ in 0..200 {
      let instrs = random_program(&mut rng);
      let flow = FlowGraph::build(&instrs).unwrap();
      let live = Liveness::analyze(&flow).unwrap();
      let ig = InterferenceGraph::build(&flow, &live, &X86_64);

      let temps = (100..108).map(t).collect::<Vec<_>>();
      let mut expected = BTreeSet::new();
      for (i, instr) in instrs.iter().enumerate() {
        let move_src = instr.move_pair().map(|(s, _)| s);
        for x in &temps {
          let oracle = live_out_by_search(&instrs, &flow, i, *x);
          assert_eq!(live.live_out(NodeId::index_of(i)).contains(x), oracle);
          if !oracle {
            continue;
          }
          for d in instr.defs() {
            if d != *x && Some(*x) != move_src {
              expected.insert((d.min(*x), d.max(*x)));
            }
          }
        }
      }

      let actual = ig
        .edges()
        .map(|(a, b)| (ig.temp(a), ig.temp(b)))
        .filter(|(a, b)| a.is_virtual() || b.is_virtual())
        .map(|(a, b)| (a.min(b), a.max(b)))
        .collect::<BTreeSet<_>>();
      assert_eq!(actual, expected);
    }
  }
}
