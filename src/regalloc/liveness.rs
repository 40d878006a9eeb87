// Tiger Backend
//! Backward dataflow liveness over a flow graph.
//!
//! in[n]  = use[n] + (out[n] - def[n])
//! out[n] = union of in[s] for every successor s
//!
//! Nodes are visited in reverse order until a full pass changes nothing.
//! Sets only grow, which bounds the number of passes.

use std::collections::BTreeSet;
use std::fmt::Write;

use anyhow::{bail, Result};

use crate::regalloc::flowgraph::FlowGraph;
use crate::temp::{Temp, TempMap};
use crate::utils::NodeId;

pub type LiveSet = BTreeSet<Temp>;

pub struct Liveness {
  live_in: Vec<LiveSet>,
  live_out: Vec<LiveSet>,
  /// Number of passes until the fixpoint.
  passes: usize,
}

impl Liveness {
  pub fn analyze(flow: &FlowGraph) -> Result<Self> {
    let n = flow.len();
    let mut live_in = vec![LiveSet::new(); n];
    let mut live_out = vec![LiveSet::new(); n];
    let mut passes = 0;

    loop {
      passes += 1;
      let mut changed = false;
      for node in flow.nodes().rev() {
        let i = node.index();
        let out = flow
          .succs(node)
          .flat_map(|s| live_in[s.index()].iter().copied())
          .collect::<LiveSet>();

        let facts = flow.node(node);
        let mut inn = facts.uses.iter().copied().collect::<LiveSet>();
        inn.extend(out.iter().filter(|t| !facts.defs.contains(t)).copied());

        if !live_in[i].is_subset(&inn) || !live_out[i].is_subset(&out) {
          bail!("Live sets of instruction {} shrank between passes", facts.index);
        }
        if inn.len() != live_in[i].len() || out.len() != live_out[i].len() {
          changed = true;
          live_in[i] = inn;
          live_out[i] = out;
        }
      }
      if !changed {
        break;
      }
    }

    log::trace!("liveness reached a fixpoint after {} passes", passes);
    Ok(Liveness {
      live_in,
      live_out,
      passes,
    })
  }

  pub fn live_in(&self, node: NodeId) -> &LiveSet {
    &self.live_in[node.index()]
  }

  pub fn live_out(&self, node: NodeId) -> &LiveSet {
    &self.live_out[node.index()]
  }

  pub fn passes(&self) -> usize {
    self.passes
  }

  /// One line per instruction: `<index>: in {..} out {..}`.
  pub fn dump(&self, names: &TempMap) -> String {
    let show = |set: &LiveSet| {
      set
        .iter()
        .map(|t| names.lookup(*t))
        .collect::<Vec<_>>()
        .join(" ")
    };
    let mut out = String::new();
    for (i, (inn, live_out)) in self.live_in.iter().zip(self.live_out.iter()).enumerate() {
      let _ = writeln!(out, "{}: in {{{}}} out {{{}}}", i, show(inn), show(live_out));
    }
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::asm::Instr;
  use crate::temp::Label;

  fn t(n: u32) -> Temp {
    Temp::new(n)
  }

  fn set(ts: &[u32]) -> LiveSet {
    ts.iter().map(|n| t(*n)).collect()
  }

  fn analyze(instrs: &[Instr]) -> (FlowGraph, Liveness) {
    let flow = FlowGraph::build(instrs).unwrap();
    let live = Liveness::analyze(&flow).unwrap();
    (flow, live)
  }

  #[test]
  fn test_diamond() {
    // 0: a <- 1
    // 1: if .. goto L1 else L2
    // 2: L1:
    // 3: b <- a
    // 4: jmp L3
    // 5: L2:
    // 6: b <- 2
    // 7: L3:
    // 8: use b
    let l1 = Label::named("L1");
    let l2 = Label::named("L2");
    let l3 = Label::named("L3");
    let instrs = vec![
      Instr::oper("movq $1, `d0", vec![t(100)], vec![]),
      Instr::branch("je `j0", vec![l1.clone(), l2.clone()]),
      Instr::label(l1),
      Instr::mov("movq `s0, `d0", t(101), t(100)),
      Instr::jump("jmp `j0", vec![], vec![l3.clone()]),
      Instr::label(l2),
      Instr::oper("movq $2, `d0", vec![t(101)], vec![]),
      Instr::label(l3),
      Instr::oper("", vec![], vec![t(101)]),
    ];
    let (flow, live) = analyze(&instrs);
    let node = |i| flow.nodes().nth(i).unwrap();

    assert_eq!(live.live_out(node(0)), &set(&[100]));
    assert_eq!(live.live_in(node(1)), &set(&[100]));
    // a is dead on the else edge
    assert_eq!(live.live_in(node(5)), &set(&[]));
    assert_eq!(live.live_in(node(3)), &set(&[100]));
    assert_eq!(live.live_out(node(3)), &set(&[101]));
    assert_eq!(live.live_in(node(7)), &set(&[101]));
    assert!(live.live_in(node(0)).is_empty());
  }

  #[test]
  fn test_loop_keeps_counter_live() {
    // 0: i <- 0
    // 1: L0:
    // 2: i <- i + 1
    // 3: cmp i
    // 4: jl L0 / L1
    // 5: L1:
    // 6: use i
    let l0 = Label::named("L0");
    let l1 = Label::named("L1");
    let instrs = vec![
      Instr::oper("movq $0, `d0", vec![t(100)], vec![]),
      Instr::label(l0.clone()),
      Instr::oper("addq $1, `d0", vec![t(100)], vec![t(100)]),
      Instr::oper("cmpq $10, `s0", vec![], vec![t(100)]),
      Instr::branch("jl `j0", vec![l0, l1.clone()]),
      Instr::label(l1),
      Instr::oper("", vec![], vec![t(100)]),
    ];
    let (flow, live) = analyze(&instrs);
    for node in flow.nodes().skip(1) {
      assert!(live.live_in(node).contains(&t(100)));
    }
    assert!(live.passes() >= 2);
  }

  #[test]
  fn test_dead_definition_is_not_live() {
    let instrs = vec![
      Instr::oper("movq $1, `d0", vec![t(100)], vec![]),
      Instr::oper("movq $2, `d0", vec![t(100)], vec![]),
      Instr::oper("", vec![], vec![t(100)]),
    ];
    let (flow, live) = analyze(&instrs);
    let first = flow.nodes().next().unwrap();
    assert!(live.live_out(first).is_empty());
    assert_eq!(live.dump(&TempMap::new()).lines().count(), 3);
  }
}
