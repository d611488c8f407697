//! Leech lattice minimal-vector generation
//!
//! Enumerates the 196,560 minimal vectors of the Leech lattice from the
//! Golay octad structure:
//! - `LeechVectorGenerator`: the per-shape candidate expansion phases
//! - `LatticeDeduplicator`: the single authoritative duplicate filter
//! - `build_lattice`: fork-join expansion, merge, id assignment and the
//!   fatal final count check

pub mod build;
pub mod dedup;
pub mod error;
pub mod generator;
pub mod vector;

pub use build::{BuildStats, LatticeBuild, build_lattice};
pub use dedup::LatticeDeduplicator;
pub use error::LatticeErr;
pub use generator::{Candidate, LeechVectorGenerator};
pub use vector::{LatticeVector, MINIMAL_NORM_SQ, MINIMAL_VECTOR_COUNT, NORM_EPSILON, VectorClass, norm_sq};
