//! Slot arena owning every heap object, plus the collection entry point.

use std::time::Instant;

use log::{debug, log_enabled, trace, Level};

use crate::gcref::GcRef;
use crate::header::SlotHeader;
use crate::marking::Marker;
use crate::object::Object;
use crate::statistics::CollectionStats;
use crate::sweeper;
use crate::Config;

pub(crate) struct Slot {
    pub header: SlotHeader,
    pub value: Option<Object>,
}

/// The heap: sole owner of object storage.
///
/// Objects occupy slots addressed through [`GcRef`] handles. Sweeping a
/// slot bumps its generation, so a handle minted for a previous occupant
/// resolves to `None` even after the slot is reused.
///
/// The heap does not know the roots; collection is driven by the caller
/// (normally [`Vm`](crate::vm::Vm)), which passes them in.
pub struct Heap {
    pub(crate) slots: Vec<Slot>,
    pub(crate) free: Vec<u32>,
    pub(crate) live: usize,
    threshold: usize,
    min_threshold: usize,
    total_gcs: usize,
    total_allocated: usize,
    total_freed: usize,
}

impl Heap {
    pub fn new(config: &Config) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            threshold: config.initial_threshold.max(config.min_threshold),
            min_threshold: config.min_threshold,
            total_gcs: 0,
            total_allocated: 0,
            total_freed: 0,
        }
    }

    /// Links a new object into the arena and returns its handle.
    ///
    /// The new object starts unmarked and is not rooted; callers that want
    /// it to survive the next collection must make it reachable from the
    /// root set before then.
    pub fn allocate(&mut self, value: Object) -> GcRef {
        self.total_allocated += 1;
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                debug_assert!(slot.value.is_none());
                slot.value = Some(value);
                GcRef::new(index, slot.header.generation())
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    header: SlotHeader::new(),
                    value: Some(value),
                });
                GcRef::new(index, 0)
            }
        }
    }

    /// Resolves a handle. `None` once the object has been swept, even if
    /// the slot has since been reused.
    pub fn get(&self, gcref: GcRef) -> Option<&Object> {
        let slot = self.slots.get(gcref.index())?;
        if slot.header.generation() != gcref.generation() {
            return None;
        }
        slot.value.as_ref()
    }

    /// Mutable variant of [`Heap::get`]. Rewriting a pair's edges through
    /// this is how the mutator builds cyclic structures.
    pub fn get_mut(&mut self, gcref: GcRef) -> Option<&mut Object> {
        let slot = self.slots.get_mut(gcref.index())?;
        if slot.header.generation() != gcref.generation() {
            return None;
        }
        slot.value.as_mut()
    }

    pub fn contains(&self, gcref: GcRef) -> bool {
        self.get(gcref).is_some()
    }

    pub(crate) fn slot_mut(&mut self, gcref: GcRef) -> Option<&mut Slot> {
        let slot = self.slots.get_mut(gcref.index())?;
        if slot.header.generation() != gcref.generation() || slot.value.is_none() {
            return None;
        }
        Some(slot)
    }

    pub fn live_objects(&self) -> usize {
        self.live
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn total_gcs(&self) -> usize {
        self.total_gcs
    }

    pub fn total_allocated(&self) -> usize {
        self.total_allocated
    }

    pub fn total_freed(&self) -> usize {
        self.total_freed
    }

    /// True once the live-object count has reached the threshold, i.e. the
    /// next allocation should collect first.
    pub(crate) fn should_collect(&self) -> bool {
        self.live >= self.threshold
    }

    /// Runs one full stop-the-world collection with `roots` as the root
    /// set: mark everything reachable, sweep the rest, then set the next
    /// threshold to `max(min_threshold, 2 * live)`.
    pub fn collect(&mut self, roots: impl IntoIterator<Item = GcRef>) -> CollectionStats {
        let time = if log_enabled!(Level::Debug) {
            Some(Instant::now())
        } else {
            None
        };
        let before = self.live;

        let marked = Marker::new(self).mark_from(roots);
        trace!("[gc] marked {} objects", marked);
        let freed = sweeper::sweep(self);

        self.threshold = (self.live * 2).max(self.min_threshold);
        self.total_freed += freed;

        if let Some(time) = time {
            debug!(
                "[gc] GC({}) Pause MarkSweep {}->{} objects (threshold {}) {:.4}ms",
                self.total_gcs,
                before,
                self.live,
                self.threshold,
                time.elapsed().as_micros() as f64 / 1000.0
            );
        }
        self.total_gcs += 1;

        CollectionStats {
            collected: freed,
            remaining: self.live,
        }
    }
}
