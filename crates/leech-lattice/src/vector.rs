/// Number of minimal vectors of the Leech lattice (its kissing number)
pub const MINIMAL_VECTOR_COUNT: usize = 196_560;

/// Squared norm of every emitted vector after scaling
pub const MINIMAL_NORM_SQ: f64 = 4.0;

/// Tolerance for norm comparisons on integer-valued float vectors
pub const NORM_EPSILON: f64 = 1e-6;

/// Shape class of an emitted vector.
///
/// `Fallback` is part of the collaborator record schema (the reference
/// implementation tagged its synthetic padding with it) but is never
/// emitted here: the padding phase was dropped in favor of the complete
/// construction plus a fatal count check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorClass {
    /// Frame vectors: (±2, 0²³) in legacy mode, (±4, ±4, 0²²)/√8 in
    /// complete mode
    Type1,
    /// Octad-supported vectors: (±2⁸, 0¹⁶)/√8
    Type2,
    /// Odd vectors: (∓3, ±1²³)/√8, complete mode only
    Type3,
    Fallback,
}

/// A minimal vector record as handed to the storage collaborator.
/// Write-once: never mutated after emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeVector {
    /// Sequential id, assigned at insertion starting from 0
    pub id: u64,
    pub coords: [f64; 24],
    pub norm_sq: f64,
    pub class: VectorClass,
}

/// Squared Euclidean norm
#[inline]
pub fn norm_sq(coords: &[f64; 24]) -> f64 {
    coords.iter().map(|c| c * c).sum()
}
