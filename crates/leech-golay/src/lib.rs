//! Extended binary Golay code G24
//!
//! Construction of the [24,12,8] extended binary Golay code and the pieces
//! built on top of it:
//! - `GolayCode`: systematic encoder G=[I12|A] and parity check H=[Aᵗ|I12]
//! - `CodewordSet`: all 4096 codewords, classified by Hamming weight
//! - `SyndromeTable`: weight-≤3 coset decoding table
//! - `OctadSet`: the 759 weight-8 codewords and their supports

pub mod code;
pub mod codewords;
pub mod error;
pub mod octad;
pub mod syndrome;

pub use code::GolayCode;
pub use codewords::{CODEWORD_COUNT, Codeword, CodewordSet};
pub use error::CodeErr;
pub use octad::{OCTAD_COUNT, Octad, OctadSet};
pub use syndrome::{Decoded, ErrorPattern, SyndromeTable};
