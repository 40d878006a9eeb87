// Tiger Backend
//! Graph coloring by iterated register coalescing.
//!
//! Every node is in exactly one state and every move in exactly one bucket.
//! `set_state` and `set_move_state` are the only places that change either,
//! and they keep the worklists in step with the state fields.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap, HashSet};

use anyhow::{bail, Result};

use crate::args::AllocConfig;
use crate::regalloc::interference::InterferenceGraph;
use crate::registers::MachineDesc;
use crate::temp::Temp;
use crate::utils::MinHeap;

/// Degree given to machine registers. Large enough to count as significant
/// in every test, small enough not to overflow.
const PRECOLORED_DEGREE: usize = usize::MAX / 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeState {
  Precolored,
  Initial,
  Simplify,
  Freeze,
  Spill,
  Spilled,
  Coalesced,
  Colored,
  SelectStack,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveState {
  Worklist,
  Active,
  Coalesced,
  Constrained,
  Frozen,
}

/// Outcome of one coloring attempt.
#[derive(Debug, Clone)]
pub struct ColorResult {
  /// Color of every temp that got one, registers included.
  pub colors: HashMap<Temp, usize>,
  /// Actual spills, in temp order.
  pub spilled: Vec<Temp>,
  pub coalesced_moves: usize,
}

/// Coloring state for one round. Nodes and moves are dense indices into the
/// vectors below, taken from the interference graph they were built from.
pub struct Coloring {
  pub(super) k: usize,
  pub(super) temps: Vec<Temp>,
  pub(super) state: Vec<NodeState>,
  pub(super) degree: Vec<usize>,
  pub(super) adj_list: Vec<Vec<usize>>,
  pub(super) adj_set: HashSet<(usize, usize)>,
  pub(super) move_list: Vec<Vec<usize>>,
  /// `(src, dst)` node pairs.
  pub(super) moves: Vec<(usize, usize)>,
  pub(super) move_state: Vec<MoveState>,
  pub(super) alias: Vec<usize>,
  color: Vec<Option<usize>>,

  simplify_worklist: BTreeSet<usize>,
  freeze_worklist: BTreeSet<usize>,
  spill_worklist: BTreeSet<usize>,
  select_stack: Vec<usize>,
  worklist_moves: BTreeSet<usize>,
  active_moves: BTreeSet<usize>,

  /// Temps created by spill rewriting, chosen for spilling last.
  avoid_spill: Vec<bool>,
  check_invariants: bool,
}

impl Coloring {
  /// Build the coloring state from an interference graph. Moves are only
  /// recorded when coalescing is enabled.
  pub fn new(
    ig: &InterferenceGraph,
    machine: &MachineDesc,
    config: &AllocConfig,
    avoid_spill: &HashSet<Temp>,
  ) -> Self {
    let n = ig.len();
    let mut coloring = Coloring {
      k: machine.k(),
      temps: Vec::with_capacity(n),
      state: Vec::with_capacity(n),
      degree: Vec::with_capacity(n),
      adj_list: vec![vec![]; n],
      adj_set: HashSet::new(),
      move_list: vec![vec![]; n],
      moves: vec![],
      move_state: vec![],
      alias: (0..n).collect(),
      color: Vec::with_capacity(n),
      simplify_worklist: BTreeSet::new(),
      freeze_worklist: BTreeSet::new(),
      spill_worklist: BTreeSet::new(),
      select_stack: vec![],
      worklist_moves: BTreeSet::new(),
      active_moves: BTreeSet::new(),
      avoid_spill: Vec::with_capacity(n),
      check_invariants: config.check_invariants,
    };

    for node in ig.nodes() {
      let t = ig.temp(node);
      coloring.temps.push(t);
      coloring.avoid_spill.push(avoid_spill.contains(&t));
      if machine.is_register(t) {
        coloring.state.push(NodeState::Precolored);
        coloring.degree.push(PRECOLORED_DEGREE);
        coloring.color.push(machine.color_of(t));
      } else {
        coloring.state.push(NodeState::Initial);
        coloring.degree.push(0);
        coloring.color.push(None);
      }
    }

    for (a, b) in ig.edges() {
      coloring.add_edge(a.index(), b.index());
    }

    if config.coalescing {
      for (src, dst) in ig.moves() {
        let (src, dst) = (src.index(), dst.index());
        let m = coloring.moves.len();
        coloring.moves.push((src, dst));
        coloring.move_state.push(MoveState::Worklist);
        coloring.worklist_moves.insert(m);
        coloring.move_list[src].push(m);
        if dst != src {
          coloring.move_list[dst].push(m);
        }
      }
    }
    coloring
  }

  /// Simplify, coalesce, freeze and potential-spill until every worklist is
  /// empty, then pop the select stack assigning colors.
  pub fn run(mut self) -> Result<ColorResult> {
    self.make_worklist();
    self.check()?;
    loop {
      if let Some(n) = self.simplify_worklist.iter().next().copied() {
        self.simplify(n);
      } else if let Some(m) = self.worklist_moves.iter().next().copied() {
        self.coalesce(m);
      } else if let Some(n) = self.freeze_worklist.iter().next().copied() {
        self.freeze(n);
      } else if !self.spill_worklist.is_empty() {
        self.select_spill();
      } else {
        break;
      }
      self.check()?;
    }
    self.assign_colors();
    self.check()?;
    Ok(self.result())
  }

  /// Move node `n` to state `to`, keeping the worklists in step.
  pub(super) fn set_state(&mut self, n: usize, to: NodeState) {
    let from = self.state[n];
    match from {
      NodeState::Simplify => {
        self.simplify_worklist.remove(&n);
      }
      NodeState::Freeze => {
        self.freeze_worklist.remove(&n);
      }
      NodeState::Spill => {
        self.spill_worklist.remove(&n);
      }
      NodeState::SelectStack => {
        let top = self.select_stack.pop();
        debug_assert_eq!(top, Some(n));
      }
      _ => {}
    }
    match to {
      NodeState::Simplify => {
        self.simplify_worklist.insert(n);
      }
      NodeState::Freeze => {
        self.freeze_worklist.insert(n);
      }
      NodeState::Spill => {
        self.spill_worklist.insert(n);
      }
      NodeState::SelectStack => self.select_stack.push(n),
      _ => {}
    }
    self.state[n] = to;
    log::trace!("{}: {:?} -> {:?}", self.temps[n], from, to);
  }

  /// Move `m` to bucket `to`, keeping the move worklists in step.
  pub(super) fn set_move_state(&mut self, m: usize, to: MoveState) {
    match self.move_state[m] {
      MoveState::Worklist => {
        self.worklist_moves.remove(&m);
      }
      MoveState::Active => {
        self.active_moves.remove(&m);
      }
      _ => {}
    }
    match to {
      MoveState::Worklist => {
        self.worklist_moves.insert(m);
      }
      MoveState::Active => {
        self.active_moves.insert(m);
      }
      _ => {}
    }
    self.move_state[m] = to;
  }

  pub(super) fn is_precolored(&self, n: usize) -> bool {
    self.state[n] == NodeState::Precolored
  }

  pub(super) fn add_edge(&mut self, u: usize, v: usize) {
    if u == v || self.adj_set.contains(&(u, v)) {
      return;
    }
    self.adj_set.insert((u, v));
    self.adj_set.insert((v, u));
    if !self.is_precolored(u) {
      self.adj_list[u].push(v);
      self.degree[u] += 1;
    }
    if !self.is_precolored(v) {
      self.adj_list[v].push(u);
      self.degree[v] += 1;
    }
  }

  /// Neighbors still in the graph.
  pub(super) fn adjacent(&self, n: usize) -> Vec<usize> {
    self.adj_list[n]
      .iter()
      .copied()
      .filter(|w| !matches!(self.state[*w], NodeState::SelectStack | NodeState::Coalesced))
      .collect()
  }

  /// Moves of `n` that may still be coalesced.
  pub(super) fn node_moves(&self, n: usize) -> Vec<usize> {
    self.move_list[n]
      .iter()
      .copied()
      .filter(|m| matches!(self.move_state[*m], MoveState::Active | MoveState::Worklist))
      .collect()
  }

  pub(super) fn move_related(&self, n: usize) -> bool {
    !self.node_moves(n).is_empty()
  }

  pub(super) fn get_alias(&self, mut n: usize) -> usize {
    while self.state[n] == NodeState::Coalesced {
      n = self.alias[n];
    }
    n
  }

  fn make_worklist(&mut self) {
    for n in 0..self.state.len() {
      if self.state[n] != NodeState::Initial {
        continue;
      }
      let to = if self.degree[n] >= self.k {
        NodeState::Spill
      } else if self.move_related(n) {
        NodeState::Freeze
      } else {
        NodeState::Simplify
      };
      self.set_state(n, to);
    }
  }

  fn simplify(&mut self, n: usize) {
    self.set_state(n, NodeState::SelectStack);
    for m in self.adjacent(n) {
      self.decrement_degree(m);
    }
  }

  pub(super) fn decrement_degree(&mut self, m: usize) {
    if self.is_precolored(m) {
      return;
    }
    let d = self.degree[m];
    self.degree[m] = d - 1;
    if d == self.k {
      let mut nodes = self.adjacent(m);
      nodes.push(m);
      self.enable_moves(&nodes);
      if self.state[m] == NodeState::Spill {
        if self.move_related(m) {
          self.set_state(m, NodeState::Freeze);
        } else {
          self.set_state(m, NodeState::Simplify);
        }
      }
    }
  }

  pub(super) fn enable_moves(&mut self, nodes: &[usize]) {
    for n in nodes {
      for m in self.node_moves(*n) {
        if self.move_state[m] == MoveState::Active {
          self.set_move_state(m, MoveState::Worklist);
        }
      }
    }
  }

  /// Pick a potential spill: temps from earlier spill rewriting last, then
  /// highest degree, then lowest temp.
  fn select_spill(&mut self) {
    let choice = self
      .spill_worklist
      .iter()
      .copied()
      .min_by_key(|n| (self.avoid_spill[*n], Reverse(self.degree[*n]), self.temps[*n]));
    if let Some(m) = choice {
      log::trace!("potential spill {}", self.temps[m]);
      self.set_state(m, NodeState::Simplify);
      self.freeze_moves(m);
    }
  }

  fn assign_colors(&mut self) {
    while let Some(&n) = self.select_stack.last() {
      let mut used = MinHeap::new();
      for w in &self.adj_list[n] {
        let a = self.get_alias(*w);
        if matches!(self.state[a], NodeState::Colored | NodeState::Precolored) {
          if let Some(c) = self.color[a] {
            used.push(c);
          }
        }
      }
      let c = used.find_smallest_absent();
      if c < self.k {
        self.color[n] = Some(c);
        self.set_state(n, NodeState::Colored);
      } else {
        self.set_state(n, NodeState::Spilled);
      }
    }
    for n in 0..self.state.len() {
      if self.state[n] == NodeState::Coalesced {
        self.color[n] = self.color[self.get_alias(n)];
      }
    }
  }

  fn result(&self) -> ColorResult {
    let mut colors = HashMap::new();
    let mut spilled = vec![];
    for (n, t) in self.temps.iter().enumerate() {
      match self.state[n] {
        NodeState::Spilled => spilled.push(*t),
        _ => {
          if let Some(c) = self.color[n] {
            colors.insert(*t, c);
          }
        }
      }
    }
    spilled.sort();
    let coalesced_moves = self
      .move_state
      .iter()
      .filter(|s| **s == MoveState::Coalesced)
      .count();
    ColorResult {
      colors,
      spilled,
      coalesced_moves,
    }
  }

  fn check(&self) -> Result<()> {
    if self.check_invariants {
      self.verify()
    } else {
      Ok(())
    }
  }

  /// Node states agree with the worklists, every move is in one bucket,
  /// and the degree of each worklist node counts its live neighbors.
  pub fn verify(&self) -> Result<()> {
    let count = |s: NodeState| self.state.iter().filter(|x| **x == s).count();
    let lists: [(NodeState, &BTreeSet<usize>); 3] = [
      (NodeState::Simplify, &self.simplify_worklist),
      (NodeState::Freeze, &self.freeze_worklist),
      (NodeState::Spill, &self.spill_worklist),
    ];
    for (state, list) in lists.iter() {
      if list.len() != count(*state) || list.iter().any(|n| self.state[*n] != *state) {
        bail!("{:?} worklist disagrees with node states", state);
      }
    }
    if self.select_stack.len() != count(NodeState::SelectStack)
      || self
        .select_stack
        .iter()
        .any(|n| self.state[*n] != NodeState::SelectStack)
    {
      bail!("Select stack disagrees with node states");
    }

    let buckets: [(MoveState, &BTreeSet<usize>); 2] = [
      (MoveState::Worklist, &self.worklist_moves),
      (MoveState::Active, &self.active_moves),
    ];
    for (state, set) in buckets.iter() {
      let expected = self.move_state.iter().filter(|s| **s == *state).count();
      if set.len() != expected || set.iter().any(|m| self.move_state[*m] != *state) {
        bail!("{:?} moves disagree with move states", state);
      }
    }

    let in_graph = |n: usize| {
      matches!(
        self.state[n],
        NodeState::Precolored | NodeState::Simplify | NodeState::Freeze | NodeState::Spill
      )
    };
    for n in 0..self.state.len() {
      let state = self.state[n];
      if !matches!(state, NodeState::Simplify | NodeState::Freeze | NodeState::Spill) {
        continue;
      }
      let live = self.adj_list[n].iter().filter(|w| in_graph(**w)).count();
      if live != self.degree[n] {
        bail!(
          "Degree of {} is {} but it has {} neighbors",
          self.temps[n],
          self.degree[n],
          live
        );
      }
      if state == NodeState::Spill && self.degree[n] < self.k {
        bail!("{} is a spill candidate with low degree", self.temps[n]);
      }
      if state == NodeState::Freeze && (self.degree[n] >= self.k || !self.move_related(n)) {
        bail!("{} is frozen but not low-degree and move-related", self.temps[n]);
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::{Rng, SeedableRng};

  use super::*;
  use crate::registers::tests::toy_machine;
  use crate::registers::X86_64;

  fn t(n: u32) -> Temp {
    Temp::new(n)
  }

  fn checked() -> AllocConfig {
    AllocConfig {
      check_invariants: true,
      ..AllocConfig::default()
    }
  }

  fn color(ig: &InterferenceGraph, machine: &MachineDesc) -> ColorResult {
    Coloring::new(ig, machine, &checked(), &HashSet::new())
      .run()
      .unwrap()
  }

  /// Interfering nodes never share a color, and every temp is either
  /// colored or spilled.
  fn assert_proper(ig: &InterferenceGraph, result: &ColorResult) {
    for n in ig.nodes() {
      let t = ig.temp(n);
      if t.is_virtual() {
        let colored = result.colors.contains_key(&t);
        let spilled = result.spilled.contains(&t);
        assert!(colored != spilled, "{} colored {} spilled {}", t, colored, spilled);
      }
    }
    for (a, b) in ig.edges() {
      let (a, b) = (ig.temp(a), ig.temp(b));
      if let (Some(x), Some(y)) = (result.colors.get(&a), result.colors.get(&b)) {
        assert_ne!(x, y, "{} and {} interfere", a, b);
      }
    }
  }

  #[test]
  fn test_clique_of_k_plus_one_spills_once() {
    let toy = toy_machine();
    let mut ig = InterferenceGraph::new(&toy);
    for (a, b) in [(100, 101), (101, 102), (100, 102)] {
      ig.add_interference(t(a), t(b));
    }
    let result = color(&ig, &toy);
    assert_eq!(result.spilled, vec![t(100)]);
    assert_proper(&ig, &result);
  }

  #[test]
  fn test_spill_prefers_original_temps() {
    let toy = toy_machine();
    let mut ig = InterferenceGraph::new(&toy);
    for (a, b) in [(100, 101), (101, 102), (100, 102)] {
      ig.add_interference(t(a), t(b));
    }
    let introduced = [t(100), t(101)].iter().copied().collect();
    let result = Coloring::new(&ig, &toy, &checked(), &introduced)
      .run()
      .unwrap();
    assert_eq!(result.spilled, vec![t(102)]);
  }

  #[test]
  fn test_move_into_register_is_coalesced() {
    let toy = toy_machine();
    let r0 = toy.return_value();
    let mut ig = InterferenceGraph::new(&toy);
    ig.add_temp(t(100));
    ig.add_move(t(100), r0);
    let result = color(&ig, &toy);
    assert_eq!(result.coalesced_moves, 1);
    assert_eq!(result.colors[&t(100)], toy.color_of(r0).unwrap());
  }

  #[test]
  fn test_interfering_move_is_not_coalesced() {
    let toy = toy_machine();
    let mut ig = InterferenceGraph::new(&toy);
    ig.add_interference(t(100), t(101));
    ig.add_move(t(100), t(101));
    let result = color(&ig, &toy);
    assert_eq!(result.coalesced_moves, 0);
    assert!(result.spilled.is_empty());
    assert_proper(&ig, &result);
  }

  #[test]
  fn test_chain_of_moves_collapses() {
    let mut ig = InterferenceGraph::new(&X86_64);
    for n in 100..110 {
      ig.add_move(t(n), t(n + 1));
    }
    ig.add_interference(t(100), t(200));
    let result = color(&ig, &X86_64);
    assert_eq!(result.coalesced_moves, 10);
    let c = result.colors[&t(100)];
    assert!((101..=110).all(|n| result.colors[&t(n)] == c));
    assert_ne!(result.colors[&t(200)], c);
  }

  fn random_graph(rng: &mut StdRng, machine: &MachineDesc, n: u32, p: f64) -> InterferenceGraph {
    let mut ig = InterferenceGraph::new(machine);
    let temps = (100..100 + n).map(t).collect::<Vec<_>>();
    let registers = machine.allocatable().collect::<Vec<_>>();
    for (i, a) in temps.iter().enumerate() {
      ig.add_temp(*a);
      for b in &temps[i + 1..] {
        if rng.gen_bool(p) {
          ig.add_interference(*a, *b);
        } else if rng.gen_bool(0.05) {
          ig.add_move(*a, *b);
        }
      }
      if rng.gen_bool(0.2) {
        let r = registers[rng.gen_range(0..registers.len())];
        if rng.gen_bool(0.5) {
          ig.add_interference(*a, r);
        } else {
          ig.add_move(r, *a);
        }
      }
    }
    ig
  }

  #[test]
  fn test_random_graphs_color_properly() {
    let mut rng = StdRng::seed_from_u64(20);
    for round in 0..60 {
      let machine = if round % 2 == 0 { toy_machine() } else { X86_64.clone() };
      let p = rng.gen_range(0.05..0.6);
      let n = rng.gen_range(2..40);
      let ig = random_graph(&mut rng, &machine, n, p);
      let result = color(&ig, &machine);
      assert_proper(&ig, &result);
    }
  }

  #[test]
  fn test_low_degree_graphs_never_spill() {
    let mut rng = StdRng::seed_from_u64(7);
    let k = X86_64.k();
    let config = AllocConfig {
      coalescing: false,
      ..checked()
    };
    for _ in 0..40 {
      // keep every degree below K
      let mut ig = InterferenceGraph::new(&X86_64);
      let mut degree = vec![0usize; 60];
      for a in 0..60u32 {
        ig.add_temp(t(100 + a));
        for b in a + 1..60 {
          let (ua, ub) = (a as usize, b as usize);
          if degree[ua] + 1 < k && degree[ub] + 1 < k && rng.gen_bool(0.2) {
            ig.add_interference(t(100 + a), t(100 + b));
            degree[ua] += 1;
            degree[ub] += 1;
          } else if rng.gen_bool(0.03) {
            ig.add_move(t(100 + a), t(100 + b));
          }
        }
      }
      let result = Coloring::new(&ig, &X86_64, &config, &HashSet::new())
        .run()
        .unwrap();
      assert!(result.spilled.is_empty());
      assert_proper(&ig, &result);
    }
  }

  #[test]
  fn test_partition_holds_without_coalescing() {
    let toy = toy_machine();
    let mut ig = InterferenceGraph::new(&toy);
    ig.add_interference(t(100), t(101));
    ig.add_move(t(101), t(102));
    let config = AllocConfig {
      coalescing: false,
      check_invariants: true,
      eliminate_redundant_moves: true,
    };
    let result = Coloring::new(&ig, &toy, &config, &HashSet::new())
      .run()
      .unwrap();
    assert_eq!(result.coalesced_moves, 0);
    assert!(result.spilled.is_empty());
    assert_proper(&ig, &result);
  }
}
