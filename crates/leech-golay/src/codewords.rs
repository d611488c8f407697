use tracing::debug;

use crate::code::GolayCode;

/// Number of codewords of G24 (2^12 messages)
pub const CODEWORD_COUNT: usize = 4096;

/// A codeword together with its originating message and Hamming weight.
/// Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codeword {
    pub bits: u32,
    pub message: u16,
    pub weight: u32,
}

/// The full set of 4096 codewords, in ascending message order.
///
/// The ordering is significant for downstream reproducibility: octad
/// extraction and lattice vector ids derive from it.
pub struct CodewordSet {
    words: Vec<Codeword>,
}

impl CodewordSet {
    /// Encode every 12-bit message 0..4095
    pub fn generate(code: &GolayCode) -> Self {
        let words: Vec<Codeword> = (0..CODEWORD_COUNT as u16)
            .map(|message| {
                let bits = code.encode_raw(message);
                Codeword {
                    bits,
                    message,
                    weight: bits.count_ones(),
                }
            })
            .collect();

        debug!("generated {} Golay codewords", words.len());
        CodewordSet { words }
    }

    pub fn words(&self) -> &[Codeword] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Count of codewords per Hamming weight 0..=24
    pub fn weight_distribution(&self) -> [u32; 25] {
        let mut dist = [0u32; 25];
        for word in &self.words {
            dist[word.weight as usize] += 1;
        }
        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_exact_weight_distribution() {
        // The G24 weight enumerator: 1, 759, 2576, 759, 1 at weights
        // 0, 8, 12, 16, 24. A wrong parity matrix breaks this exactly.
        let set = CodewordSet::generate(&GolayCode::new());
        let dist = set.weight_distribution();

        let mut expected = [0u32; 25];
        expected[0] = 1;
        expected[8] = 759;
        expected[12] = 2576;
        expected[16] = 759;
        expected[24] = 1;
        assert_eq!(dist, expected);
    }

    #[test]
    fn test_ascending_message_order() {
        let set = CodewordSet::generate(&GolayCode::new());
        assert_eq!(set.len(), CODEWORD_COUNT);
        for (i, word) in set.words().iter().enumerate() {
            assert_eq!(word.message as usize, i);
        }
    }

    #[test]
    fn test_minimum_distance_is_eight() {
        let set = CodewordSet::generate(&GolayCode::new());

        // For a linear code the minimum distance equals the minimum nonzero
        // codeword weight
        let min_weight = set.words().iter().filter(|w| w.bits != 0).map(|w| w.weight).min();
        assert_eq!(min_weight, Some(8));

        // Spot check actual pairs as well
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let a = set.words()[rng.random_range(0..CODEWORD_COUNT)];
            let b = set.words()[rng.random_range(0..CODEWORD_COUNT)];
            if a.bits != b.bits {
                assert!((a.bits ^ b.bits).count_ones() >= 8);
            }
        }
    }
}
