use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use leech_config::BuildConfig;
use leech_core::assert_warn;
use leech_golay::{CodewordSet, GolayCode, OCTAD_COUNT, OctadSet, SyndromeTable};
use tracing::{debug, info};

use crate::dedup::LatticeDeduplicator;
use crate::error::LatticeErr;
use crate::generator::LeechVectorGenerator;
use crate::vector::{LatticeVector, MINIMAL_NORM_SQ, NORM_EPSILON, VectorClass, norm_sq};

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildStats {
    pub candidates: usize,
    pub duplicates: usize,
    pub type1: usize,
    pub type2: usize,
    pub type3: usize,
    pub elapsed: Duration,
}

/// Result of a full generation run: the ordered vector records, the
/// syndrome-decoding table and run statistics. Write-once; the storage
/// collaborator takes ownership from here.
#[derive(Debug)]
pub struct LatticeBuild {
    pub vectors: Vec<LatticeVector>,
    pub syndromes: SyndromeTable,
    pub stats: BuildStats,
}

/// Run the whole pipeline: Golay code -> octads -> candidate expansion ->
/// merge/dedup -> sequential id assignment -> final count verification.
///
/// The count check is fatal: a dataset that does not reach the configured
/// target is refused rather than padded. It is skipped when `limit` asks
/// for a truncated run.
pub fn build_lattice(cfg: &BuildConfig, stop: Option<&AtomicBool>) -> Result<LatticeBuild, LatticeErr> {
    let started = Instant::now();

    let code = GolayCode::new();
    let codewords = CodewordSet::generate(&code);
    let octads = OctadSet::extract(&codewords);
    assert_warn!(
        octads.len() == OCTAD_COUNT,
        "expected {} octads, extracted {}",
        OCTAD_COUNT,
        octads.len()
    );
    info!("Golay code ready: {} codewords, {} octads", codewords.len(), octads.len());

    // The decoding table is part of the handoff alongside the vectors
    let syndromes = SyndromeTable::build(code);
    info!("syndrome table ready: {} correctable cosets", syndromes.populated());

    let generator = LeechVectorGenerator::new(&codewords, &octads, cfg.construction, cfg.workers);
    let candidates = generator.generate();
    info!("expansion produced {} candidates", candidates.len());

    // Merge pass: single authoritative dedup set, global view
    let mut dedup = LatticeDeduplicator::new(cfg.dedup_decimals);
    let mut vectors: Vec<LatticeVector> = Vec::with_capacity(candidates.len());
    let mut stats = BuildStats {
        candidates: candidates.len(),
        ..BuildStats::default()
    };

    for (i, candidate) in candidates.iter().enumerate() {
        if let Some(stop) = stop {
            if i % 4096 == 0 && stop.load(Ordering::Relaxed) {
                return Err(LatticeErr::Aborted { emitted: vectors.len() });
            }
        }
        if let Some(limit) = cfg.limit {
            if vectors.len() >= limit {
                debug!("limit of {} vectors reached, stopping early", limit);
                break;
            }
        }

        if !dedup.try_insert(&candidate.coords) {
            stats.duplicates += 1;
            continue;
        }

        let norm_sq = norm_sq(&candidate.coords);
        assert_warn!(
            (norm_sq - MINIMAL_NORM_SQ).abs() < NORM_EPSILON,
            "candidate off the minimal shell: norm² {}",
            norm_sq
        );

        match candidate.class {
            VectorClass::Type1 => stats.type1 += 1,
            VectorClass::Type2 => stats.type2 += 1,
            VectorClass::Type3 => stats.type3 += 1,
            VectorClass::Fallback => {}
        }

        vectors.push(LatticeVector {
            id: vectors.len() as u64,
            coords: candidate.coords,
            norm_sq,
            class: candidate.class,
        });
    }

    stats.elapsed = started.elapsed();
    info!(
        "merged {} vectors ({} duplicates discarded) in {:.2?}",
        vectors.len(),
        stats.duplicates,
        stats.elapsed
    );

    if cfg.limit.is_none() && vectors.len() != cfg.target_count {
        return Err(LatticeErr::CountMismatch {
            expected: cfg.target_count,
            found: vectors.len(),
        });
    }

    Ok(LatticeBuild { vectors, syndromes, stats })
}
