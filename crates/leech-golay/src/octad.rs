use leech_core::bits::{WORD_WIDTH, set_positions};
use tracing::debug;

use crate::codewords::CodewordSet;

/// Number of weight-8 codewords in G24
pub const OCTAD_COUNT: usize = 759;

/// A weight-8 codeword with its 8-position support, sorted ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Octad {
    pub bits: u32,
    pub positions: [u8; 8],
}

/// The 759 octads of G24, in the codeword enumeration order
pub struct OctadSet {
    octads: Vec<Octad>,
}

impl OctadSet {
    /// Filter the codeword set down to the weight-8 words
    pub fn extract(codewords: &CodewordSet) -> Self {
        let octads: Vec<Octad> = codewords
            .words()
            .iter()
            .filter(|word| word.weight == 8)
            .map(|word| {
                let mut positions = [0u8; 8];
                for (slot, pos) in positions.iter_mut().zip(set_positions(word.bits, WORD_WIDTH)) {
                    *slot = pos;
                }
                Octad { bits: word.bits, positions }
            })
            .collect();

        debug!("extracted {} octads", octads.len());
        OctadSet { octads }
    }

    pub fn octads(&self) -> &[Octad] {
        &self.octads
    }

    pub fn len(&self) -> usize {
        self.octads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.octads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::GolayCode;
    use std::collections::HashSet;

    fn octad_set() -> OctadSet {
        OctadSet::extract(&CodewordSet::generate(&GolayCode::new()))
    }

    #[test]
    fn test_exactly_759_octads() {
        assert_eq!(octad_set().len(), OCTAD_COUNT);
    }

    #[test]
    fn test_each_octad_has_weight_eight() {
        for octad in octad_set().octads() {
            assert_eq!(octad.bits.count_ones(), 8);
        }
    }

    #[test]
    fn test_supports_are_sorted_and_distinct() {
        let set = octad_set();
        let mut seen: HashSet<[u8; 8]> = HashSet::new();
        for octad in set.octads() {
            assert!(octad.positions.windows(2).all(|w| w[0] < w[1]));
            assert!(octad.positions.iter().all(|&p| p < 24));
            assert!(seen.insert(octad.positions), "duplicate support {:?}", octad.positions);
        }
        assert_eq!(seen.len(), OCTAD_COUNT);
    }
}
