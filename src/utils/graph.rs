use std::collections::BTreeSet;

/// Index of a node in a `Graph`. Only meaningful for the graph that issued it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
  /// Id of the `index`-th node added to a graph.
  pub fn index_of(index: usize) -> Self {
    NodeId(index)
  }

  pub fn index(&self) -> usize {
    self.0
  }
}

/// Graph structure:
/// Nodes live in an arena and refer to each other by dense index.
/// Successor and predecessor sets are ordered, so iteration is reproducible.
/// Undirected graphs store each edge in both directions.
#[derive(Clone, Debug)]
pub struct Graph<T> {
  nodes: Vec<T>,
  succs: Vec<BTreeSet<NodeId>>,
  preds: Vec<BTreeSet<NodeId>>,
}

impl<T> Graph<T> {
  pub fn new() -> Self {
    Graph {
      nodes: Vec::new(),
      succs: Vec::new(),
      preds: Vec::new(),
    }
  }

  pub fn add_node(&mut self, node: T) -> NodeId {
    self.nodes.push(node);
    self.succs.push(BTreeSet::new());
    self.preds.push(BTreeSet::new());
    NodeId(self.nodes.len() - 1)
  }

  pub fn node(&self, id: NodeId) -> &T {
    &self.nodes[id.0]
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// All node ids in insertion order.
  pub fn ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator {
    (0..self.nodes.len()).map(NodeId)
  }

  pub fn succs(&self, id: NodeId) -> &BTreeSet<NodeId> {
    &self.succs[id.0]
  }

  pub fn preds(&self, id: NodeId) -> &BTreeSet<NodeId> {
    &self.preds[id.0]
  }

  /// Idempotently add the edge `from -> to`.
  pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId) {
    self.succs[from.0].insert(to);
    self.preds[to.0].insert(from);
  }

  /// Add an edge between two nodes, i.e. node1 and node2
  pub fn add_edge(&mut self, node1: NodeId, node2: NodeId) {
    self.add_directed_edge(node1, node2);
    self.add_directed_edge(node2, node1);
  }

  pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
    self.succs[from.0].contains(&to)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_directed_edges_track_preds() {
    let mut g = Graph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    g.add_directed_edge(a, b);
    g.add_directed_edge(a, b);
    assert_eq!(g.succs(a).len(), 1);
    assert!(g.preds(b).contains(&a));
    assert!(!g.has_edge(b, a));
  }

  #[test]
  fn test_undirected_edges_are_symmetric() {
    let mut g = Graph::new();
    let ids = (0..3).map(|i| g.add_node(i)).collect::<Vec<_>>();
    g.add_edge(ids[0], ids[2]);
    assert!(g.has_edge(ids[2], ids[0]));
    assert_eq!(*g.node(ids[2]), 2);
    assert_eq!(g.ids().rev().next(), Some(ids[2]));
  }
}
