//! The mark phase: a worklist traversal of the object graph.

use crate::gcref::GcRef;
use crate::heap::Heap;

/// Marks everything transitively reachable from the root set.
///
/// The traversal is worklist-driven rather than recursive, so a deep or
/// densely connected pair graph is bounded by heap size, never by call
/// stack depth. Marking is idempotent per slot: the mark bit is
/// test-and-set, and only a freshly marked pair pushes its edges, which is
/// what terminates the walk on cycles.
pub(crate) struct Marker<'a> {
    heap: &'a mut Heap,
    worklist: Vec<GcRef>,
    visited: usize,
}

impl<'a> Marker<'a> {
    pub fn new(heap: &'a mut Heap) -> Self {
        Self {
            heap,
            worklist: Vec::new(),
            visited: 0,
        }
    }

    /// Runs the phase to completion and returns how many objects were
    /// marked. Root order does not affect the result.
    pub fn mark_from(mut self, roots: impl IntoIterator<Item = GcRef>) -> usize {
        for root in roots {
            self.mark(root);
        }
        while let Some(gcref) = self.worklist.pop() {
            self.mark(gcref);
        }
        self.visited
    }

    fn mark(&mut self, gcref: GcRef) {
        let value = match self.heap.slot_mut(gcref) {
            Some(slot) => {
                if !slot.header.set_marked() {
                    return;
                }
                slot.value
            }
            None => return,
        };
        self.visited += 1;
        if let Some(object) = value {
            object.trace(|edge| self.worklist.push(edge));
        }
    }
}
