//! Bounded transposition table with a depth-and-age replacement policy.

use std::mem;

use crate::board::Move;

/// How a stored value relates to the `(alpha, beta)` window at store time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,
    LowerBound,
    UpperBound,
}

/// One cached search result.
#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u16,
    pub bound: BoundType,
    pub value: i32,
    pub best_move: Option<Move>,
    /// Search generation the entry was written in (wraps mod 256).
    pub age: u8,
}

/// Direct-mapped cache of search results keyed by Zobrist hash.
///
/// Sized to the largest power of two fitting the requested memory budget;
/// one slot per index, no probing. Owned by a single search - no interior
/// synchronization.
pub struct TranspositionTable {
    table: Vec<Option<TTEntry>>,
    mask: usize,
    age: u8,
}

impl TranspositionTable {
    /// Default size in megabytes.
    pub const DEFAULT_MB: usize = 32;

    /// A table of approximately `size_mb` megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = mem::size_of::<Option<TTEntry>>();
        let budget = size_mb.max(1) * 1024 * 1024 / entry_size;
        // largest power of two that fits the budget
        let num_entries = if budget.is_power_of_two() {
            budget
        } else {
            budget.next_power_of_two() / 2
        }
        .max(1024);

        TranspositionTable {
            table: vec![None; num_entries],
            mask: num_entries - 1,
            age: 0,
        }
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// The entry for `key`, if its slot holds exactly this position.
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<&TTEntry> {
        self.table[self.index(key)]
            .as_ref()
            .filter(|entry| entry.key == key)
    }

    /// Store a result. The slot is replaced when empty, when the incoming
    /// depth is greater, or at equal depth when the existing entry is from
    /// an older search generation.
    pub fn store(
        &mut self,
        key: u64,
        depth: u16,
        bound: BoundType,
        value: i32,
        best_move: Option<Move>,
    ) {
        let index = self.index(key);
        let replace = match &self.table[index] {
            Some(existing) => {
                depth > existing.depth || (depth == existing.depth && existing.age != self.age)
            }
            None => true,
        };

        if replace {
            self.table[index] = Some(TTEntry {
                key,
                depth,
                bound,
                value,
                best_move,
                age: self.age,
            });
        }
    }

    /// Advance the search generation so entries from previous searches lose
    /// their equal-depth protection.
    pub fn new_search(&mut self) {
        self.age = self.age.wrapping_add(1);
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_probe_round_trip() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0xABCD, 5, BoundType::Exact, 42, None);

        let entry = tt.probe(0xABCD).expect("entry should be present");
        assert_eq!(entry.depth, 5);
        assert_eq!(entry.value, 42);
        assert_eq!(entry.bound, BoundType::Exact);
    }

    #[test]
    fn test_probe_rejects_key_mismatch() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0xABCD, 5, BoundType::Exact, 42, None);
        // a different key mapping anywhere must not alias
        assert!(tt.probe(0xDCBA).is_none());
    }

    #[test]
    fn test_deeper_entry_replaces() {
        let mut tt = TranspositionTable::new(1);
        tt.store(7, 3, BoundType::Exact, 1, None);
        tt.store(7, 6, BoundType::LowerBound, 2, None);
        assert_eq!(tt.probe(7).unwrap().depth, 6);
        assert_eq!(tt.probe(7).unwrap().value, 2);
    }

    #[test]
    fn test_shallower_entry_kept_out() {
        let mut tt = TranspositionTable::new(1);
        tt.store(7, 6, BoundType::Exact, 1, None);
        tt.store(7, 3, BoundType::Exact, 2, None);
        assert_eq!(tt.probe(7).unwrap().depth, 6);
        assert_eq!(tt.probe(7).unwrap().value, 1);
    }

    #[test]
    fn test_equal_depth_same_age_kept() {
        let mut tt = TranspositionTable::new(1);
        tt.store(7, 4, BoundType::Exact, 1, None);
        tt.store(7, 4, BoundType::Exact, 2, None);
        assert_eq!(tt.probe(7).unwrap().value, 1);
    }

    #[test]
    fn test_equal_depth_new_age_replaces() {
        let mut tt = TranspositionTable::new(1);
        tt.store(7, 4, BoundType::Exact, 1, None);
        tt.new_search();
        tt.store(7, 4, BoundType::Exact, 2, None);
        assert_eq!(tt.probe(7).unwrap().value, 2);
    }

    #[test]
    fn test_age_wraps() {
        let mut tt = TranspositionTable::new(1);
        for _ in 0..=255 {
            tt.new_search();
        }
        assert_eq!(tt.age, 0);
    }
}
