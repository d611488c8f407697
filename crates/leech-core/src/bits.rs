//! Helpers for fixed-width GF(2) words.
//!
//! Information words are 12 bits wide (`u16`), code words 24 bits wide
//! (`u32`). Position `i` maps to bit `width - 1 - i`, so position 0 is the
//! most significant bit of the word. GF(2) addition is XOR, weight is
//! popcount.

/// Width of an information word in bits
pub const INFO_WIDTH: u32 = 12;

/// Width of a code word in bits
pub const WORD_WIDTH: u32 = 24;

/// Mask covering the low 12 bits of an information word
pub const INFO_MASK: u16 = (1 << INFO_WIDTH) - 1;

/// Mask covering the low 24 bits of a code word
pub const WORD_MASK: u32 = (1 << WORD_WIDTH) - 1;

/// Bit value (0 or 1) at `pos` of a `width`-bit word
#[inline]
pub fn bit_at(word: u32, pos: u32, width: u32) -> u8 {
    debug_assert!(pos < width);
    ((word >> (width - 1 - pos)) & 1) as u8
}

/// Single-bit mask for `pos` of a `width`-bit word
#[inline]
pub fn bit_mask(pos: u32, width: u32) -> u32 {
    debug_assert!(pos < width);
    1 << (width - 1 - pos)
}

/// Positions of all set bits of a `width`-bit word, ascending
pub fn set_positions(word: u32, width: u32) -> impl Iterator<Item = u8> {
    (0..width).filter(move |&pos| bit_at(word, pos, width) == 1).map(|pos| pos as u8)
}

/// Build a `width`-bit word from a list of set positions
pub fn word_from_positions(positions: &[u8], width: u32) -> u32 {
    let mut word = 0u32;
    for &pos in positions {
        word |= bit_mask(pos as u32, width);
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_position_convention() {
        // Position 0 is the MSB of the 24-bit window
        assert_eq!(bit_at(0x80_0000, 0, WORD_WIDTH), 1);
        assert_eq!(bit_at(0x00_0001, 23, WORD_WIDTH), 1);
        assert_eq!(bit_at(0x80_0000, 23, WORD_WIDTH), 0);
    }

    #[test]
    fn test_set_positions_roundtrip() {
        let word = word_from_positions(&[0, 5, 23], WORD_WIDTH);
        assert_eq!(word, 0x80_0000 | 0x04_0000 | 0x00_0001);
        let positions: Vec<u8> = set_positions(word, WORD_WIDTH).collect();
        assert_eq!(positions, vec![0, 5, 23]);
    }

    #[test]
    fn test_masks() {
        assert_eq!(INFO_MASK, 0x0fff);
        assert_eq!(WORD_MASK, 0x00ff_ffff);
    }
}
