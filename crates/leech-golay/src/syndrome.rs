use core::fmt;

use leech_core::bits::{WORD_WIDTH, bit_mask};
use tracing::debug;

use crate::code::GolayCode;
use crate::error::CodeErr;

/// Number of possible 12-bit syndromes
pub const SYNDROME_SPACE: usize = 4096;

/// Largest error weight the table corrects
pub const MAX_CORRECTABLE: u8 = 3;

/// A minimal-weight coset representative: the error pattern to XOR into a
/// received word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPattern {
    pub bits: u32,
    pub weight: u8,
}

/// Result of a syndrome decode.
///
/// On a table miss (error weight > 3), `success` is false,
/// `errors_corrected` is the -1 sentinel and `info` carries the uncorrected
/// information bits as a best-effort value only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub info: u16,
    pub errors_corrected: i32,
    pub success: bool,
}

/// Map from 12-bit syndrome to its minimal-weight (≤3) error pattern.
///
/// Built by exhaustive enumeration of all weight-0/1/2/3 patterns in
/// increasing weight order. First insertion wins: inserting by increasing
/// weight guarantees the stored representative is the coset minimum, so the
/// enumeration order is load-bearing.
pub struct SyndromeTable {
    code: GolayCode,
    entries: Box<[Option<ErrorPattern>]>,
}

impl SyndromeTable {
    pub fn build(code: GolayCode) -> Self {
        let mut entries = vec![None; SYNDROME_SPACE].into_boxed_slice();

        // Weight 0: the zero-error coset
        entries[0] = Some(ErrorPattern { bits: 0, weight: 0 });

        // Weight 1: 24 single-bit patterns
        for a in 0..WORD_WIDTH {
            insert_if_vacant(&code, &mut entries, bit_mask(a, WORD_WIDTH), 1);
        }

        // Weight 2: C(24,2) = 276 patterns
        for a in 0..WORD_WIDTH {
            for b in a + 1..WORD_WIDTH {
                let bits = bit_mask(a, WORD_WIDTH) | bit_mask(b, WORD_WIDTH);
                insert_if_vacant(&code, &mut entries, bits, 2);
            }
        }

        // Weight 3: C(24,3) = 2024 patterns
        for a in 0..WORD_WIDTH {
            for b in a + 1..WORD_WIDTH {
                for c in b + 1..WORD_WIDTH {
                    let bits = bit_mask(a, WORD_WIDTH) | bit_mask(b, WORD_WIDTH) | bit_mask(c, WORD_WIDTH);
                    insert_if_vacant(&code, &mut entries, bits, 3);
                }
            }
        }

        let populated = entries.iter().filter(|e| e.is_some()).count();
        debug!("syndrome table: {} of {} cosets correctable", populated, SYNDROME_SPACE);

        SyndromeTable { code, entries }
    }

    /// Raw table view: correctable syndrome -> (error bitmask, weight)
    pub fn lookup(&self, syndrome: u16) -> Option<(u32, u8)> {
        self.entries
            .get(syndrome as usize)
            .copied()
            .flatten()
            .map(|p| (p.bits, p.weight))
    }

    /// Number of populated (correctable) syndromes
    pub fn populated(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Correct up to 3 bit errors in a received 24-bit word and recover the
    /// information bits
    pub fn decode(&self, received: u32) -> Result<Decoded, CodeErr> {
        let syn = self.code.syndrome(received)?;
        if syn == 0 {
            return Ok(Decoded {
                info: GolayCode::info_bits(received),
                errors_corrected: 0,
                success: true,
            });
        }

        match self.entries[syn as usize] {
            Some(pattern) => Ok(Decoded {
                info: GolayCode::info_bits(received ^ pattern.bits),
                errors_corrected: pattern.weight as i32,
                success: true,
            }),
            // Error weight > 3: uncorrectable, surface the miss but hand
            // back the raw info bits anyway
            None => Ok(Decoded {
                info: GolayCode::info_bits(received),
                errors_corrected: -1,
                success: false,
            }),
        }
    }
}

impl fmt::Debug for SyndromeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Summarize instead of dumping all 4096 slots
        f.debug_struct("SyndromeTable")
            .field("populated", &self.populated())
            .finish_non_exhaustive()
    }
}

fn insert_if_vacant(code: &GolayCode, entries: &mut [Option<ErrorPattern>], bits: u32, weight: u8) {
    let syn = code.syndrome_raw(bits) as usize;
    if entries[syn].is_none() {
        entries[syn] = Some(ErrorPattern { bits, weight });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leech_core::bits::word_from_positions;
    use rand::Rng;
    use rand::seq::index::sample;

    fn table() -> SyndromeTable {
        SyndromeTable::build(GolayCode::new())
    }

    #[test]
    fn test_clean_word_decodes_with_zero_corrections() {
        let code = GolayCode::new();
        let t = table();
        let word = code.encode(0x5a3).unwrap();
        let d = t.decode(word).unwrap();
        assert!(d.success);
        assert_eq!(d.errors_corrected, 0);
        assert_eq!(d.info, 0x5a3);
    }

    #[test]
    fn test_all_single_bit_flips_corrected() {
        let code = GolayCode::new();
        let t = table();
        let msg: u16 = rand::rng().random_range(0..4096);
        let word = code.encode(msg).unwrap();

        for pos in 0..24 {
            let d = t.decode(word ^ bit_mask(pos, WORD_WIDTH)).unwrap();
            assert!(d.success, "flip at {}", pos);
            assert_eq!(d.errors_corrected, 1);
            assert_eq!(d.info, msg);
        }
    }

    #[test]
    fn test_sampled_double_and_triple_flips_corrected() {
        let code = GolayCode::new();
        let t = table();
        let mut rng = rand::rng();
        let msg: u16 = rng.random_range(0..4096);
        let word = code.encode(msg).unwrap();

        for weight in [2usize, 3] {
            for _ in 0..200 {
                let positions: Vec<u8> = sample(&mut rng, 24, weight).iter().map(|p| p as u8).collect();
                let pattern = word_from_positions(&positions, WORD_WIDTH);
                let d = t.decode(word ^ pattern).unwrap();
                assert!(d.success, "flips at {:?}", positions);
                assert_eq!(d.errors_corrected, weight as i32);
                assert_eq!(d.info, msg);
            }
        }
    }

    #[test]
    fn test_weight_four_error_is_uncorrectable() {
        // Any weight-4 pattern sits in a coset whose minimum weight is 4
        // (a weight-≤3 representative would imply a codeword of weight ≤7)
        let code = GolayCode::new();
        let t = table();
        let word = code.encode(0x123).unwrap();
        let pattern = word_from_positions(&[1, 7, 13, 22], WORD_WIDTH);

        let d = t.decode(word ^ pattern).unwrap();
        assert!(!d.success);
        assert_eq!(d.errors_corrected, -1);
    }

    #[test]
    fn test_table_covers_exactly_weight_le3_cosets() {
        // 1 + 24 + 276 + 2024 distinct cosets
        assert_eq!(table().populated(), 2325);
    }

    #[test]
    fn test_lookup_weights_are_minimal() {
        let t = table();
        assert_eq!(t.lookup(0), Some((0, 0)));
        for syn in 1..SYNDROME_SPACE as u16 {
            if let Some((bits, weight)) = t.lookup(syn) {
                assert_eq!(bits.count_ones() as u8, weight);
                assert!(weight >= 1 && weight <= MAX_CORRECTABLE);
            }
        }
    }

    #[test]
    fn test_decode_rejects_oversized_word() {
        let t = table();
        assert!(matches!(t.decode(0x0100_0000), Err(CodeErr::InvalidLength { .. })));
    }
}
