//! The VM's root set: a bounded operand stack.

use crate::error::VmError;
use crate::gcref::GcRef;

/// Bounded stack of handles the mutator is currently working with.
///
/// This is the collector's root set: everything transitively reachable
/// from an entry here (directly or through pair edges) survives a
/// collection, everything else is garbage. The capacity is fixed at
/// construction; exceeding it is an error, not a reallocation.
pub struct RootStack {
    entries: Vec<GcRef>,
    capacity: usize,
}

impl RootStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a handle. Fails without mutating when the stack is full.
    pub fn push(&mut self, value: GcRef) -> Result<(), VmError> {
        if self.is_full() {
            return Err(VmError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.entries.push(value);
        Ok(())
    }

    /// Removes and returns the most recently pushed handle.
    pub fn pop(&mut self) -> Result<GcRef, VmError> {
        self.entries.pop().ok_or(VmError::StackUnderflow {
            needed: 1,
            available: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Walks the live entries, bottom of the stack first.
    pub fn iter(&self) -> impl Iterator<Item = GcRef> + '_ {
        self.entries.iter().copied()
    }
}
