#![forbid(unsafe_code)]

use std::time::{SystemTime, UNIX_EPOCH};

/// Monotonic id allocator. The original data used raw wall-clock timestamps,
/// which collide when two records land on the same tick; this allocator keeps
/// timestamp-scale ids but guarantees strict monotonicity, and `next_after`
/// additionally skips past any id already present in the target collection
/// even when the clock runs behind stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn seeded(seed: u64) -> Self {
        Self { next: seed.max(1) }
    }

    pub fn from_clock() -> Self {
        Self::seeded(now_unix_ms())
    }

    pub fn next(&mut self) -> u64 {
        self.next_after(0)
    }

    /// Returns an id strictly greater than both every id handed out so far
    /// and `floor`.
    pub fn next_after(&mut self, floor: u64) -> u64 {
        let id = self.next.max(floor.saturating_add(1));
        self.next = id.saturating_add(1);
        id
    }
}

pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::IdAllocator;

    #[test]
    fn at_ids_01_sequential_ids_are_strictly_increasing() {
        let mut ids = IdAllocator::seeded(1_724_000_000_000);
        let a = ids.next();
        let b = ids.next();
        let c = ids.next();
        assert_eq!(a, 1_724_000_000_000);
        assert!(a < b && b < c);
    }

    #[test]
    fn at_ids_02_next_after_skips_past_stored_maximum() {
        let mut ids = IdAllocator::seeded(10);
        let id = ids.next_after(5_000);
        assert_eq!(id, 5_001);
        // later allocations stay above the bumped point
        assert_eq!(ids.next(), 5_002);
    }

    #[test]
    fn at_ids_03_zero_seed_never_allocates_zero() {
        let mut ids = IdAllocator::seeded(0);
        assert_eq!(ids.next(), 1);
    }
}
