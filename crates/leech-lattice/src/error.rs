#[derive(Debug, PartialEq, Eq)]
pub enum LatticeErr {
    /// Final vector count differs from the configured target. The dataset
    /// is incomplete and must not be handed off; padding it up is never
    /// correct.
    CountMismatch { expected: usize, found: usize },
    /// Stop flag observed mid-build
    Aborted { emitted: usize },
}
