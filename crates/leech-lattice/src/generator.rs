use std::f64::consts::FRAC_1_SQRT_2;

use crossbeam_channel::unbounded;
use leech_config::Construction;
use leech_core::bits::{WORD_WIDTH, bit_at};
use leech_golay::{CodewordSet, Octad, OctadSet};
use tracing::{debug, info};

use crate::vector::{VectorClass, norm_sq};

/// All integer-coordinate shapes of the complete construction live on the
/// norm²=32 shell and are scaled by 1/√8 down to norm²=4
const SCALE: f64 = FRAC_1_SQRT_2 / 2.0;

/// Acceptance window for the legacy norm²==8 candidate filter
const LEGACY_NORM_EPSILON: f64 = 0.01;

/// A candidate vector before dedup and id assignment
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub coords: [f64; 24],
    pub class: VectorClass,
}

/// Produces minimal-vector candidates for the merge/dedup pass.
///
/// The octad and odd-shape expansions are data parallel: work items are
/// fanned out to worker threads over a channel and the results are merged
/// back in item order, so the emitted sequence is deterministic regardless
/// of the worker count.
pub struct LeechVectorGenerator {
    octads: Vec<Octad>,
    codeword_bits: Vec<u32>,
    construction: Construction,
    workers: usize,
}

impl LeechVectorGenerator {
    pub fn new(codewords: &CodewordSet, octads: &OctadSet, construction: Construction, workers: usize) -> Self {
        let workers = if workers == 0 {
            std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
        } else {
            workers
        };

        LeechVectorGenerator {
            octads: octads.octads().to_vec(),
            codeword_bits: codewords.words().iter().map(|w| w.bits).collect(),
            construction,
            workers,
        }
    }

    /// Run all phases of the configured construction and return the
    /// candidates in deterministic emission order
    pub fn generate(&self) -> Vec<Candidate> {
        match self.construction {
            Construction::Legacy => self.generate_legacy(),
            Construction::Complete => self.generate_complete(),
        }
    }

    /// Axis + octad phases of the reference implementation, no padding
    fn generate_legacy(&self) -> Vec<Candidate> {
        let mut out = axis_vectors();
        info!("-> axis phase: {} vectors", out.len());

        let expanded = expand_parallel(&self.octads, self.workers, |octad| octad_candidates_legacy(octad));
        let before = out.len();
        out.extend(expanded.into_iter().flatten());
        info!("-> octad phase: {} candidates from {} octads", out.len() - before, self.octads.len());

        out
    }

    /// Full three-shape construction, 196,560 vectors before (trivially
    /// empty) dedup
    fn generate_complete(&self) -> Vec<Candidate> {
        let mut out = pair_vectors();
        info!("-> pair phase: {} vectors", out.len());

        let expanded = expand_parallel(&self.octads, self.workers, |octad| octad_candidates_even(octad));
        let before = out.len();
        out.extend(expanded.into_iter().flatten());
        info!("-> octad phase: {} candidates from {} octads", out.len() - before, self.octads.len());

        let frames = expand_parallel(&self.codeword_bits, self.workers, |&bits| odd_candidates(bits));
        let before = out.len();
        out.extend(frames.into_iter().flatten());
        info!(
            "-> odd phase: {} candidates from {} codewords",
            out.len() - before,
            self.codeword_bits.len()
        );

        out
    }
}

/// Legacy Type 1: (±2, 0²³), one vector per axis and sign. Norm² is 4 by
/// construction.
fn axis_vectors() -> Vec<Candidate> {
    let mut out = Vec::with_capacity(48);
    for pos in 0..24 {
        for sign in [2.0, -2.0] {
            let mut coords = [0.0f64; 24];
            coords[pos] = sign;
            out.push(Candidate { coords, class: VectorClass::Type1 });
        }
    }
    out
}

/// Complete-mode frame vectors: (±4, ±4, 0²²)/√8, all C(24,2)·4 = 1104
/// position/sign combinations
fn pair_vectors() -> Vec<Candidate> {
    let mut out = Vec::with_capacity(1104);
    for i in 0..24 {
        for j in i + 1..24 {
            for sign_i in [4.0, -4.0] {
                for sign_j in [4.0, -4.0] {
                    let mut coords = [0.0f64; 24];
                    coords[i] = sign_i * SCALE;
                    coords[j] = sign_j * SCALE;
                    out.push(Candidate { coords, class: VectorClass::Type1 });
                }
            }
        }
    }
    out
}

/// Legacy Type 2 expansion of one octad: ±1 on the 8 support positions for
/// each of the 256 sign patterns, filtered on norm²==8, then rescaled by
/// 1/√2 onto the norm²=4 shell
fn octad_candidates_legacy(octad: &Octad) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(256);
    for sign_bits in 0u32..256 {
        let mut coords = [0.0f64; 24];
        for (bit_idx, &pos) in octad.positions.iter().enumerate() {
            let sign = if sign_bits & (1 << bit_idx) != 0 { 1.0 } else { -1.0 };
            coords[pos as usize] = sign;
        }

        if (norm_sq(&coords) - 8.0).abs() > LEGACY_NORM_EPSILON {
            continue;
        }
        for c in coords.iter_mut() {
            *c *= FRAC_1_SQRT_2;
        }
        out.push(Candidate { coords, class: VectorClass::Type2 });
    }
    debug!("octad {:#08x}: {} candidates", octad.bits, out.len());
    out
}

/// Complete-mode Type 2 expansion of one octad: (±2⁸, 0¹⁶)/√8 with an even
/// number of minus signs (the coordinate-sum condition of the lattice),
/// 128 vectors per octad
fn octad_candidates_even(octad: &Octad) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(128);
    for sign_bits in 0u32..256 {
        if sign_bits.count_ones() % 2 != 0 {
            continue;
        }
        let mut coords = [0.0f64; 24];
        for (bit_idx, &pos) in octad.positions.iter().enumerate() {
            let sign = if sign_bits & (1 << bit_idx) != 0 { -2.0 } else { 2.0 };
            coords[pos as usize] = sign * SCALE;
        }
        out.push(Candidate { coords, class: VectorClass::Type2 });
    }
    out
}

/// Complete-mode Type 3 expansion of one codeword: (∓3, ±1²³)/√8.
///
/// Base vector is -1 on the codeword support and +1 elsewhere; for each
/// position k one entry is shifted by ±4 (support → +3, elsewhere → -3),
/// which restores the coordinate-sum condition. 24 vectors per codeword,
/// 98,304 in total, pairwise distinct and closed under negation (the
/// negative arises from the complement codeword).
fn odd_candidates(codeword: u32) -> Vec<Candidate> {
    let mut base = [0.0f64; 24];
    for (pos, slot) in base.iter_mut().enumerate() {
        *slot = if bit_at(codeword, pos as u32, WORD_WIDTH) == 1 {
            -SCALE
        } else {
            SCALE
        };
    }

    let mut out = Vec::with_capacity(24);
    for k in 0..24 {
        let mut coords = base;
        coords[k] = if bit_at(codeword, k as u32, WORD_WIDTH) == 1 {
            3.0 * SCALE
        } else {
            -3.0 * SCALE
        };
        out.push(Candidate { coords, class: VectorClass::Type3 });
    }
    out
}

/// Fork-join map over independent work items. Results come back over a
/// channel tagged with their item index and are returned in item order.
fn expand_parallel<T, F>(items: &[T], workers: usize, expand: F) -> Vec<Vec<Candidate>>
where
    T: Sync,
    F: Fn(&T) -> Vec<Candidate> + Sync,
{
    if workers <= 1 || items.len() <= 1 {
        return items.iter().map(expand).collect();
    }

    let (work_tx, work_rx) = unbounded::<usize>();
    let (result_tx, result_rx) = unbounded::<(usize, Vec<Candidate>)>();
    for idx in 0..items.len() {
        work_tx.send(idx).expect("work channel closed before fan-out finished");
    }
    drop(work_tx);

    let mut slots: Vec<Vec<Candidate>> = (0..items.len()).map(|_| Vec::new()).collect();
    let expand = &expand;

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let work_rx = work_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                while let Ok(idx) = work_rx.recv() {
                    if result_tx.send((idx, expand(&items[idx]))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(result_tx);

        for (idx, candidates) in result_rx.iter() {
            slots[idx] = candidates;
        }
    });

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{MINIMAL_NORM_SQ, NORM_EPSILON};
    use leech_core::bits::word_from_positions;
    use leech_golay::GolayCode;

    fn first_octad() -> Octad {
        Octad {
            bits: word_from_positions(&[0, 1, 2, 3, 4, 5, 6, 7], WORD_WIDTH),
            positions: [0, 1, 2, 3, 4, 5, 6, 7],
        }
    }

    #[test]
    fn test_axis_phase_yields_48_norm_4_vectors() {
        let vectors = axis_vectors();
        assert_eq!(vectors.len(), 48);
        for v in &vectors {
            assert!((norm_sq(&v.coords) - MINIMAL_NORM_SQ).abs() < NORM_EPSILON);
            let nonzero: Vec<f64> = v.coords.iter().copied().filter(|c| *c != 0.0).collect();
            assert_eq!(nonzero.len(), 1);
            assert_eq!(nonzero[0].abs(), 2.0);
        }
    }

    #[test]
    fn test_pair_phase_yields_1104_norm_4_vectors() {
        let vectors = pair_vectors();
        assert_eq!(vectors.len(), 1104);
        for v in &vectors {
            assert!((norm_sq(&v.coords) - MINIMAL_NORM_SQ).abs() < NORM_EPSILON);
            assert_eq!(v.coords.iter().filter(|c| **c != 0.0).count(), 2);
        }
    }

    #[test]
    fn test_legacy_octad_all_positive_pattern() {
        // Support {0..7}, all-positive signs: norm² 8 pre-scaling, 4 after
        let octad = first_octad();
        let mut coords = [0.0f64; 24];
        for pos in 0..8 {
            coords[pos] = 1.0;
        }
        assert!((norm_sq(&coords) - 8.0).abs() < NORM_EPSILON);

        let candidates = octad_candidates_legacy(&octad);
        // Every ±1 pattern on 8 positions has norm² exactly 8
        assert_eq!(candidates.len(), 256);
        let all_positive = candidates
            .iter()
            .find(|c| c.coords[..8].iter().all(|x| *x > 0.0))
            .unwrap();
        assert!((norm_sq(&all_positive.coords) - MINIMAL_NORM_SQ).abs() < NORM_EPSILON);
    }

    #[test]
    fn test_even_octad_expansion_yields_128() {
        let candidates = octad_candidates_even(&first_octad());
        assert_eq!(candidates.len(), 128);
        for c in &candidates {
            assert!((norm_sq(&c.coords) - MINIMAL_NORM_SQ).abs() < NORM_EPSILON);
            let minus = c.coords.iter().filter(|x| **x < 0.0).count();
            assert_eq!(minus % 2, 0);
        }
    }

    #[test]
    fn test_odd_expansion_shape() {
        let code = GolayCode::new();
        let codeword = code.encode(0x001).unwrap();
        let candidates = odd_candidates(codeword);
        assert_eq!(candidates.len(), 24);
        for c in &candidates {
            assert!((norm_sq(&c.coords) - MINIMAL_NORM_SQ).abs() < NORM_EPSILON);
            // Exactly one entry of magnitude 3/√8, rest 1/√8
            let big = c.coords.iter().filter(|x| x.abs() > 2.0 * SCALE).count();
            assert_eq!(big, 1);
        }
    }

    #[test]
    fn test_parallel_expansion_matches_sequential() {
        let octads: Vec<Octad> = vec![first_octad(); 9];
        let sequential = expand_parallel(&octads, 1, octad_candidates_even);
        let parallel = expand_parallel(&octads, 4, octad_candidates_even);
        assert_eq!(sequential.len(), parallel.len());
        for (s, p) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(s.len(), p.len());
            for (a, b) in s.iter().zip(p.iter()) {
                assert_eq!(a.coords, b.coords);
            }
        }
    }
}
