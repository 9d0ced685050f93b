use std::fmt;

/// What one collection cycle did, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionStats {
    /// Objects reclaimed by the sweep.
    pub collected: usize,
    /// Objects still live afterwards.
    pub remaining: usize,
}

impl fmt::Display for CollectionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Collected {} objects, {} remaining.",
            self.collected, self.remaining
        )
    }
}

/// Cumulative counters for one VM instance.
#[derive(Debug, Clone, Copy)]
pub struct HeapStatistics {
    pub live_objects: usize,
    pub heap_threshold: usize,
    pub total_gc_cycles_count: usize,
    pub total_objects_allocated: usize,
    pub total_objects_freed: usize,
    pub stack_in_use: usize,
    pub stack_capacity: usize,
}

impl fmt::Display for HeapStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Heap statistics:")?;
        writeln!(f, "  Live objects: {}", self.live_objects)?;
        writeln!(f, "  Heap threshold: {}", self.heap_threshold)?;
        writeln!(f, "  Total GC cycles count: {}", self.total_gc_cycles_count)?;
        writeln!(
            f,
            "  Total objects allocated: {}",
            self.total_objects_allocated
        )?;
        writeln!(f, "  Total objects freed: {}", self.total_objects_freed)?;
        writeln!(
            f,
            "  Root stack: {} of {} entries in use",
            self.stack_in_use, self.stack_capacity
        )?;
        Ok(())
    }
}
