// Tiger Backend
//! Control flow between the instructions of one procedure.

use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};

use crate::asm::Instr;
use crate::temp::{Label, Temp};
use crate::utils::{Graph, NodeId};

/// One instruction, with the facts liveness needs copied out.
#[derive(Debug, Clone)]
pub struct FlowNode {
  /// Position of the instruction in the procedure.
  pub index: usize,
  pub defs: Vec<Temp>,
  pub uses: Vec<Temp>,
  /// `(src, dst)` of a register-to-register move.
  pub move_pair: Option<(Temp, Temp)>,
}

/// Flow graph: node `i` is instruction `i`.
pub struct FlowGraph {
  graph: Graph<FlowNode>,
}

impl FlowGraph {
  /// Fall-through edges first, then one edge per jump target. A target that
  /// names no label in `instrs` is an error.
  pub fn build(instrs: &[Instr]) -> Result<Self> {
    let mut graph = Graph::new();
    let mut labels: HashMap<&Label, NodeId> = HashMap::new();
    let mut prev: Option<NodeId> = None;

    for (index, instr) in instrs.iter().enumerate() {
      let node = graph.add_node(FlowNode {
        index,
        defs: instr.defs(),
        uses: instr.uses(),
        move_pair: instr.move_pair(),
      });
      if let Some(prev) = prev {
        graph.add_directed_edge(prev, node);
      }
      if let Instr::Label { label, .. } = instr {
        if labels.insert(label, node).is_some() {
          bail!("Label {} is defined twice", label);
        }
      }
      prev = if instr.falls_through() { Some(node) } else { None };
    }

    for (index, instr) in instrs.iter().enumerate() {
      if let Some(targets) = instr.targets() {
        for label in &targets.labels {
          let to = labels
            .get(label)
            .ok_or_else(|| anyhow!("Instruction {} jumps to unknown label {}", index, label))?;
          graph.add_directed_edge(NodeId::index_of(index), *to);
        }
      }
    }

    log::trace!("flow graph with {} nodes", graph.len());
    Ok(FlowGraph { graph })
  }

  pub fn len(&self) -> usize {
    self.graph.len()
  }

  pub fn is_empty(&self) -> bool {
    self.graph.is_empty()
  }

  pub fn nodes(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator {
    self.graph.ids()
  }

  pub fn node(&self, id: NodeId) -> &FlowNode {
    self.graph.node(id)
  }

  pub fn succs(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    self.graph.succs(id).iter().copied()
  }

  pub fn preds(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    self.graph.preds(id).iter().copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn t(n: u32) -> Temp {
    Temp::new(n)
  }

  fn succ_indices(flow: &FlowGraph, i: usize) -> Vec<usize> {
    flow
      .succs(NodeId::index_of(i))
      .map(|n| n.index())
      .collect()
  }

  #[test]
  fn test_straight_line_falls_through() {
    let instrs = vec![
      Instr::oper("movq $1, `d0", vec![t(100)], vec![]),
      Instr::mov("movq `s0, `d0", t(101), t(100)),
    ];
    let flow = FlowGraph::build(&instrs).unwrap();
    assert_eq!(succ_indices(&flow, 0), vec![1]);
    assert!(succ_indices(&flow, 1).is_empty());
    assert_eq!(flow.node(NodeId::index_of(1)).move_pair, Some((t(100), t(101))));
  }

  #[test]
  fn test_branch_has_two_successors_and_jump_one() {
    let l1 = Label::named("L1");
    let l2 = Label::named("L2");
    let instrs = vec![
      Instr::branch("je `j0", vec![l1.clone(), l2.clone()]),
      Instr::label(l2),
      Instr::jump("jmp `j0", vec![], vec![l1.clone()]),
      Instr::oper("nop", vec![], vec![]),
      Instr::label(l1),
    ];
    let flow = FlowGraph::build(&instrs).unwrap();
    assert_eq!(succ_indices(&flow, 0), vec![1, 4]);
    assert_eq!(succ_indices(&flow, 2), vec![4]);
    // unreachable, but still in the graph
    assert_eq!(flow.preds(NodeId::index_of(3)).count(), 0);
    assert_eq!(flow.len(), 5);
  }

  #[test]
  fn test_unknown_label_is_an_error() {
    let instrs = vec![Instr::jump("jmp `j0", vec![], vec![Label::named("nowhere")])];
    assert!(FlowGraph::build(&instrs).is_err());
  }

  #[test]
  fn test_duplicate_label_is_an_error() {
    let instrs = vec![Instr::label(Label::named("L0")), Instr::label(Label::named("L0"))];
    assert!(FlowGraph::build(&instrs).is_err());
  }
}
