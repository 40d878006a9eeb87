use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub struct MinHeap<T: Ord>(BinaryHeap<Reverse<T>>);

impl<T: Ord> MinHeap<T> {
  pub fn new() -> Self {
    MinHeap(BinaryHeap::<Reverse<T>>::new())
  }

  pub fn push(&mut self, item: T) {
    self.0.push(Reverse(item));
  }

  pub fn pop(&mut self) -> Option<T> {
    self.0.pop().map(|v| v.0)
  }
}

impl MinHeap<usize> {
  /// Smallest color not pushed so far. Drains the heap.
  pub fn find_smallest_absent(&mut self) -> usize {
    let mut i = 0;
    while let Some(v) = self.pop() {
      if v > i {
        return i;
      }
      if v == i {
        i += 1;
      }
    }
    i
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_minheap() {
    let mut heap = MinHeap::new();
    heap.push(3);
    heap.push(1);
    heap.push(2);
    heap.push(0);
    assert_eq!(heap.find_smallest_absent(), 4);
  }

  #[test]
  fn test_minheap_gap() {
    let mut heap = MinHeap::new();
    heap.push(3);
    heap.push(1);
    heap.push(0);
    assert_eq!(heap.find_smallest_absent(), 2);
  }

  #[test]
  fn test_minheap_duplicates() {
    let mut heap = MinHeap::new();
    for c in [0, 0, 1, 1, 3] {
      heap.push(c);
    }
    assert_eq!(heap.find_smallest_absent(), 2);
  }
}
