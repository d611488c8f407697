use leech_core::bits::{INFO_MASK, INFO_WIDTH, WORD_MASK, WORD_WIDTH, bit_at};

use crate::error::CodeErr;

/// Parity submatrix A of the systematic generator G=[I12|A].
/// This is the standard bordered-circulant construction; any deviation shows
/// up immediately as a wrong codeword weight distribution.
pub const PARITY_A: [[u8; 12]; 12] = [
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0],
    [1, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 1],
    [1, 1, 1, 1, 0, 0, 0, 1, 0, 1, 1, 0],
    [1, 1, 1, 0, 0, 0, 1, 0, 1, 1, 0, 1],
    [1, 1, 0, 0, 0, 1, 0, 1, 1, 0, 1, 1],
    [1, 0, 0, 0, 1, 0, 1, 1, 0, 1, 1, 1],
    [1, 0, 0, 1, 0, 1, 1, 0, 1, 1, 1, 0],
    [1, 0, 1, 0, 1, 1, 0, 1, 1, 1, 0, 0],
    [1, 1, 0, 1, 1, 0, 1, 1, 1, 0, 0, 0],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1],
];

/// Row `row` of A packed as a 12-bit mask (column j at bit 11-j)
const fn a_row_mask(row: usize) -> u16 {
    let mut mask = 0u16;
    let mut j = 0;
    while j < 12 {
        if PARITY_A[row][j] == 1 {
            mask |= 1 << (11 - j);
        }
        j += 1;
    }
    mask
}

/// Precomputed generator rows: row i is identity bit i plus the A-row parity
const fn compute_gen_rows() -> [u32; 12] {
    let mut rows = [0u32; 12];
    let mut i = 0;
    while i < 12 {
        rows[i] = (1u32 << (23 - i)) | a_row_mask(i) as u32;
        i += 1;
    }
    rows
}

/// Per-position column syndromes of H=[Aᵗ|I12]: the syndrome of a single-bit
/// error at position k. The syndrome of any word is the XOR fold over its
/// set bits.
const fn compute_col_syndromes() -> [u16; 24] {
    let mut out = [0u16; 24];
    let mut k = 0;
    while k < 24 {
        out[k] = if k < 12 { a_row_mask(k) } else { 1 << (11 - (k - 12)) };
        k += 1;
    }
    out
}

pub const GEN_ROWS: [u32; 12] = compute_gen_rows();
pub const COL_SYNDROMES: [u16; 24] = compute_col_syndromes();

/// The extended binary Golay code G24, systematic form.
///
/// Information bits occupy the high 12 bits of a codeword (position i is
/// bit 23-i), parity the low 12.
#[derive(Debug, Clone, Copy)]
pub struct GolayCode {
    gen_rows: [u32; 12],
    col_syndromes: [u16; 24],
}

impl GolayCode {
    pub fn new() -> Self {
        GolayCode {
            gen_rows: GEN_ROWS,
            col_syndromes: COL_SYNDROMES,
        }
    }

    /// Encode a 12-bit information word to a 24-bit codeword (info·G mod 2)
    pub fn encode(&self, info: u16) -> Result<u32, CodeErr> {
        if info & !INFO_MASK != 0 {
            return Err(CodeErr::InvalidLength {
                width: INFO_WIDTH,
                value: info as u32,
            });
        }
        Ok(self.encode_raw(info))
    }

    /// Syndrome of a received 24-bit word (H·wordᵗ mod 2); zero means no
    /// detected error
    pub fn syndrome(&self, word: u32) -> Result<u16, CodeErr> {
        if word & !WORD_MASK != 0 {
            return Err(CodeErr::InvalidLength {
                width: WORD_WIDTH,
                value: word,
            });
        }
        Ok(self.syndrome_raw(word))
    }

    /// Extract the systematic information bits of a codeword
    #[inline]
    pub fn info_bits(word: u32) -> u16 {
        (word >> 12) as u16 & INFO_MASK
    }

    pub(crate) fn encode_raw(&self, info: u16) -> u32 {
        let mut word = 0u32;
        for i in 0..INFO_WIDTH {
            if bit_at(info as u32, i, INFO_WIDTH) == 1 {
                word ^= self.gen_rows[i as usize];
            }
        }
        word
    }

    pub(crate) fn syndrome_raw(&self, word: u32) -> u16 {
        let mut syn = 0u16;
        let mut rest = word;
        while rest != 0 {
            let bit = 31 - rest.leading_zeros();
            syn ^= self.col_syndromes[(23 - bit) as usize];
            rest &= !(1 << bit);
        }
        syn
    }
}

impl Default for GolayCode {
    fn default() -> Self {
        Self::new()
    }
}
