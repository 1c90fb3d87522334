use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridroute_core::Coord;

/// A discovered cell with its fixed cost-so-far and heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub coord: Coord,
    /// Steps from the start.
    pub g: u32,
    /// Manhattan distance to the goal.
    pub h: u32,
}

impl SearchNode {
    /// Priority: `g + h`.
    #[inline]
    pub const fn f(&self) -> u32 {
        self.g + self.h
    }
}

// ---------------------------------------------------------------------------
// Heap entry
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    node: SearchNode,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        // Key: f, then g, then insertion order.
        other
            .node
            .f()
            .cmp(&self.node.f())
            .then_with(|| other.node.g.cmp(&self.node.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// The open set of an A* search.
///
/// [`pop`](Frontier::pop) returns the node with minimum `f`. Among equal `f`
/// the node with smaller `g` wins, and among equal `g` the one pushed first.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { node, seq });
    }

    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|e| e.node)
    }

    /// Drop every node and restart the insertion sequence. Keeps the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(row: i32, col: i32, g: u32, h: u32) -> SearchNode {
        SearchNode {
            coord: Coord::new(row, col),
            g,
            h,
        }
    }

    #[test]
    fn pops_minimum_f() {
        let mut fr = Frontier::new();
        fr.push(node(0, 0, 3, 4));
        fr.push(node(0, 1, 1, 1));
        fr.push(node(0, 2, 2, 3));
        let fs: Vec<u32> = std::iter::from_fn(|| fr.pop()).map(|n| n.f()).collect();
        assert_eq!(fs, vec![2, 5, 7]);
        assert_eq!(fr.pop(), None);
    }

    #[test]
    fn equal_f_prefers_lower_g() {
        let mut fr = Frontier::new();
        fr.push(node(0, 0, 4, 0));
        fr.push(node(1, 1, 2, 2));
        assert_eq!(fr.pop().map(|n| n.g), Some(2));
        assert_eq!(fr.pop().map(|n| n.g), Some(4));
    }

    #[test]
    fn equal_keys_are_fifo() {
        let mut fr = Frontier::new();
        for col in 0..5 {
            fr.push(node(0, col, 1, 1));
        }
        let cols: Vec<i32> = std::iter::from_fn(|| fr.pop()).map(|n| n.coord.col).collect();
        assert_eq!(cols, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn clear_resets() {
        let mut fr = Frontier::new();
        fr.push(node(0, 0, 0, 0));
        fr.clear();
        assert!(fr.pop().is_none());
        assert_eq!(fr.next_seq, 0);
    }
}
