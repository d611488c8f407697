use std::collections::HashSet;
use tracing::trace;

/// Canonicalizing duplicate filter over the whole generation run.
///
/// Coordinates are rounded to a fixed number of decimal places and packed
/// into an integer key. This is the only mutable shared state in the
/// pipeline; it must stay a single authoritative set, fed by the
/// single-threaded merge pass after parallel expansion.
pub struct LatticeDeduplicator {
    scale: f64,
    seen: HashSet<[i64; 24]>,
}

impl LatticeDeduplicator {
    pub fn new(decimals: u32) -> Self {
        LatticeDeduplicator {
            scale: 10f64.powi(decimals as i32),
            seen: HashSet::new(),
        }
    }

    /// Returns true if `coords` was not seen before this run; false means
    /// the candidate is a duplicate and must be discarded (silently: this
    /// is expected behavior, not data loss)
    pub fn try_insert(&mut self, coords: &[f64; 24]) -> bool {
        let key = self.canonical_key(coords);
        let inserted = self.seen.insert(key);
        if !inserted {
            trace!("duplicate candidate discarded");
        }
        inserted
    }

    /// Number of distinct vectors seen so far
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    fn canonical_key(&self, coords: &[f64; 24]) -> [i64; 24] {
        let mut key = [0i64; 24];
        for (slot, &c) in key.iter_mut().zip(coords.iter()) {
            // (c * scale).round() maps -0.0 and 0.0 to the same key
            *slot = (c * self.scale).round() as i64;
        }
        key
    }
}
