use std::fmt;

use tracing::debug;

use crate::math::function::mathfunction::MathFunction;

use super::point::Point;
use super::tabulatederror::TabulatedFunctionError;
use super::tabulatedfunction::{
    FloorIndex,
    TabulatedFunction,
    write_table
};
use super::validation::{
    check_insertable_x,
    check_removable,
    check_table,
    sample_grid
};

// ─────────────────────────────────────────────
// Node arena
// ─────────────────────────────────────────────
//
// Circular doubly linked list with a head sentinel. Nodes are addressed by
// their slot in `nodes`; slot 0 is the sentinel, so an empty list has
// head.next == head.prev == HEAD. Unlinked slots go to `free_slots` and are
// reused by later insertions.

const HEAD: usize = 0;

#[derive(Debug, Clone, Copy)]
struct Node {
    point: Point,
    prev: usize,
    next: usize,
}

#[derive(Debug, Clone)]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<Node>,
    free_slots: Vec<usize>,
    count: usize,
}

impl LinkedListTabulatedFunction {
    pub fn new(x_values: &[f64], y_values: &[f64]) -> Result<LinkedListTabulatedFunction, TabulatedFunctionError> {
        check_table(x_values, y_values)?;
        let mut list = LinkedListTabulatedFunction::empty(x_values.len());
        for (&x, &y) in x_values.iter().zip(y_values.iter()) {
            list.add_node(x, y);
        }
        debug!(count = list.count, "linked list tabulated function built");
        Ok(list)
    }

    /// Samples `source` at `count` equally spaced x over `[from, to]`.
    ///
    /// `from == to` yields `count` knots sharing one x; the sort check is not
    /// applied to this path.
    pub fn from_function<F>(
        source: &F,
        from: f64,
        to: f64,
        count: usize,
    ) -> Result<LinkedListTabulatedFunction, TabulatedFunctionError> where
        F: MathFunction + ?Sized {
        let grid = sample_grid(from, to, count)?;
        let mut list = LinkedListTabulatedFunction::empty(count);
        for x in grid {
            list.add_node(x, source.apply(x));
        }
        debug!(count, from, to, "linked list tabulated function sampled");
        Ok(list)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { list: self, slot: HEAD, remaining: self.count }
    }

    fn empty(capacity: usize) -> LinkedListTabulatedFunction {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node { point: Point::new(f64::NAN, f64::NAN), prev: HEAD, next: HEAD });
        LinkedListTabulatedFunction { nodes, free_slots: Vec::new(), count: 0 }
    }

    fn add_node(&mut self, x: f64, y: f64) {
        self.link_before(HEAD, Point::new(x, y));
    }

    /// Splices a new node in front of `successor`; `HEAD` appends at the tail.
    fn link_before(&mut self, successor: usize, point: Point) -> usize {
        let prev = self.nodes[successor].prev;
        let node = Node { point, prev, next: successor };
        let slot = match self.free_slots.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.nodes[prev].next = slot;
        self.nodes[successor].prev = slot;
        self.count += 1;
        slot
    }

    fn unlink(&mut self, slot: usize) {
        let Node { prev, next, .. } = self.nodes[slot];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free_slots.push(slot);
        self.count -= 1;
    }

    /// Walks from whichever end of the ring is closer to `index`.
    fn node_slot(&self, index: usize) -> Option<usize> {
        if index >= self.count {
            return None;
        }
        let mut slot = HEAD;
        if index < self.count / 2 {
            for _ in 0..=index {
                slot = self.nodes[slot].next;
            }
        } else {
            for _ in index..self.count {
                slot = self.nodes[slot].prev;
            }
        }
        Some(slot)
    }
}

impl TabulatedFunction for LinkedListTabulatedFunction {
    fn count(&self) -> usize {
        self.count
    }

    fn point(&self, index: usize) -> Option<Point> {
        self.node_slot(index).map(|slot| self.nodes[slot].point)
    }

    fn points(&self) -> Vec<Point> {
        self.iter().collect()
    }

    fn set_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError> {
        let slot = self
            .node_slot(index)
            .ok_or(TabulatedFunctionError::IndexOutOfBounds { index, count: self.count })?;
        let x = self.nodes[slot].point.x();
        self.nodes[slot].point = Point::new(x, y);
        Ok(())
    }

    fn index_of_x(&self, x: f64) -> Option<usize> {
        self.iter().position(|pt| pt.x() == x)
    }

    fn index_of_y(&self, y: f64) -> Option<usize> {
        self.iter().position(|pt| pt.y() == y)
    }

    fn floor_index_of_x(&self, x: f64) -> FloorIndex {
        if x < self.left_bound() {
            return FloorIndex::Before;
        }
        if x >= self.right_bound() {
            return FloorIndex::AtOrAfterEnd;
        }
        match self.iter().position(|pt| pt.x() > x) {
            Some(upper) => FloorIndex::Between(upper.saturating_sub(1)),
            None => FloorIndex::AtOrAfterEnd
        }
    }

    fn insert(&mut self, x: f64, y: f64) -> Result<(), TabulatedFunctionError> {
        check_insertable_x(x)?;
        let mut slot = self.nodes[HEAD].next;
        while slot != HEAD {
            let current_x = self.nodes[slot].point.x();
            if current_x == x {
                self.nodes[slot].point = Point::new(x, y);
                return Ok(());
            }
            if current_x > x {
                break;
            }
            slot = self.nodes[slot].next;
        }
        self.link_before(slot, Point::new(x, y));
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<(), TabulatedFunctionError> {
        let slot = self
            .node_slot(index)
            .ok_or(TabulatedFunctionError::IndexOutOfBounds { index, count: self.count })?;
        check_removable(self.count)?;
        self.unlink(slot);
        Ok(())
    }
}

impl MathFunction for LinkedListTabulatedFunction {
    fn apply(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}

impl fmt::Display for LinkedListTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, "LinkedListTabulatedFunction", self)
    }
}

// ─────────────────────────────────────────────
// Iter
// ─────────────────────────────────────────────

/// Knots in ascending x order, following `next` links from the sentinel.
pub struct Iter<'a> {
    list: &'a LinkedListTabulatedFunction,
    slot: usize,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.slot = self.list.nodes[self.slot].next;
        self.remaining -= 1;
        Some(self.list.nodes[self.slot].point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a LinkedListTabulatedFunction {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
