// Tiger Backend
//! Move coalescing and freezing for `Coloring`.
//!
//! A move whose ends do not interfere is merged when it is safe:
//! - Briggs: the merged node has fewer than K neighbors of significant degree.
//! - George: when merging into a register, every neighbor of the other end
//!   is insignificant or already interferes with the register.

use std::collections::BTreeSet;

use super::allocation::{Coloring, MoveState, NodeState};

impl Coloring {
  /// Consider one move from the worklist.
  pub(super) fn coalesce(&mut self, m: usize) {
    let (x, y) = self.moves[m];
    let (x, y) = (self.get_alias(x), self.get_alias(y));
    let (u, v) = if self.is_precolored(y) { (y, x) } else { (x, y) };

    if u == v {
      self.set_move_state(m, MoveState::Coalesced);
      self.add_work_list(u);
    } else if self.is_precolored(v) || self.adj_set.contains(&(u, v)) {
      self.set_move_state(m, MoveState::Constrained);
      self.add_work_list(u);
      self.add_work_list(v);
    } else if self.can_coalesce(u, v) {
      log::trace!("coalesce {} into {}", self.temps[v], self.temps[u]);
      self.set_move_state(m, MoveState::Coalesced);
      self.combine(u, v);
      self.add_work_list(u);
    } else {
      self.set_move_state(m, MoveState::Active);
    }
  }

  fn can_coalesce(&self, u: usize, v: usize) -> bool {
    if self.is_precolored(u) {
      self.adjacent(v).into_iter().all(|t| self.ok(t, u))
    } else {
      let nodes = self
        .adjacent(u)
        .into_iter()
        .chain(self.adjacent(v))
        .collect::<BTreeSet<_>>();
      self.conservative(&nodes)
    }
  }

  /// A node that can no longer take part in a move goes to the simplify
  /// worklist once its degree is low.
  fn add_work_list(&mut self, u: usize) {
    if !self.is_precolored(u)
      && self.state[u] == NodeState::Freeze
      && !self.move_related(u)
      && self.degree[u] < self.k
    {
      self.set_state(u, NodeState::Simplify);
    }
  }

  /// George's test for neighbor `t` of a node merging into register `r`.
  fn ok(&self, t: usize, r: usize) -> bool {
    self.degree[t] < self.k || self.is_precolored(t) || self.adj_set.contains(&(t, r))
  }

  /// Briggs' test.
  fn conservative(&self, nodes: &BTreeSet<usize>) -> bool {
    nodes.iter().filter(|n| self.degree[**n] >= self.k).count() < self.k
  }

  fn combine(&mut self, u: usize, v: usize) {
    self.set_state(v, NodeState::Coalesced);
    self.alias[v] = u;
    for m in self.move_list[v].clone() {
      if !self.move_list[u].contains(&m) {
        self.move_list[u].push(m);
      }
    }
    self.enable_moves(&[v]);
    for t in self.adjacent(v) {
      self.add_edge(t, u);
      self.decrement_degree(t);
    }
    if self.degree[u] >= self.k && self.state[u] == NodeState::Freeze {
      self.set_state(u, NodeState::Spill);
    }
  }

  /// Give up on coalescing `u`: it becomes simplifiable.
  pub(super) fn freeze(&mut self, u: usize) {
    self.set_state(u, NodeState::Simplify);
    self.freeze_moves(u);
  }

  pub(super) fn freeze_moves(&mut self, u: usize) {
    for m in self.node_moves(u) {
      let (x, y) = self.moves[m];
      let v = if self.get_alias(y) == self.get_alias(u) {
        self.get_alias(x)
      } else {
        self.get_alias(y)
      };
      self.set_move_state(m, MoveState::Frozen);
      if self.state[v] == NodeState::Freeze && !self.move_related(v) && self.degree[v] < self.k {
        self.set_state(v, NodeState::Simplify);
      }
    }
  }
}
