use modular_bitfield::prelude::*;

// SlotHeader carries the per-slot metadata the collector needs and sits
// next to the slot's value in the arena.
//
// +------------+------+-----------------------------------------------+
// | name       | bits |                                               |
// +------------+------+-----------------------------------------------+
// | generation |   31 | Bumped when the slot is swept, so handles     |
// |            |      | minted for the previous occupant stop         |
// |            |      | resolving.                                    |
// +------------+------+-----------------------------------------------+
// | mark bit   |    1 | Set during the mark phase, cleared again on   |
// |            |      | sweep. Never set between collections.         |
// +------------+------+-----------------------------------------------+
#[derive(Clone, Copy)]
pub(crate) struct SlotHeader {
    encoded: Encoded,
}

impl SlotHeader {
    pub fn new() -> Self {
        Self {
            encoded: Encoded::new(),
        }
    }

    #[inline(always)]
    pub fn generation(&self) -> u32 {
        self.encoded.generation()
    }

    #[inline(always)]
    pub fn is_marked(&self) -> bool {
        self.encoded.marked()
    }

    /// Test-and-set of the mark bit. Returns `false` if the slot was
    /// already marked.
    #[inline(always)]
    pub fn set_marked(&mut self) -> bool {
        if self.is_marked() {
            return false;
        }
        self.encoded.set_marked(true);
        true
    }

    #[inline(always)]
    pub fn clear_marked(&mut self) {
        self.encoded.set_marked(false);
    }

    /// Invalidates every handle minted for the slot's previous occupant.
    pub fn bump_generation(&mut self) {
        let next = self.encoded.generation().wrapping_add(1) & GENERATION_MASK;
        self.encoded.set_generation(next);
    }
}

const GENERATION_MASK: u32 = (1 << 31) - 1;

#[bitfield(bits = 32)]
#[derive(Clone, Copy)]
struct Encoded {
    generation: B31,
    marked: bool,
}
