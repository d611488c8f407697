use serde::Deserialize;
use std::sync::Arc;

/// Which minimal-vector construction the generator runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Construction {
    /// Full three-shape construction, yields exactly 196,560 vectors
    Complete,
    /// Axis + octad phases of the reference implementation, without its
    /// synthetic padding. Falls short of 196,560 by design and the build
    /// reports the mismatch instead of hiding it.
    Legacy,
}

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub construction: Construction,
    pub debug_log: Option<String>,

    /// Expected total vector count; a final count differing from this is a
    /// fatal integrity failure (unless `limit` is set)
    pub target_count: usize,
    /// Decimal places used when canonicalizing coordinates for dedup
    pub dedup_decimals: u32,
    /// Worker threads for the expansion phases, 0 = auto
    pub workers: usize,
    /// Stop after emitting this many vectors (skips the count check)
    pub limit: Option<usize>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            construction: Construction::Complete,
            debug_log: None,
            target_count: 196_560,
            dedup_decimals: 6,
            workers: 0,
            limit: None,
        }
    }
}

impl BuildConfig {
    /// Validate that all configuration fields are properly set.
    pub fn validate(&self) -> Result<(), &str> {
        if self.target_count == 0 {
            return Err("target_count must be nonzero");
        }
        if self.dedup_decimals == 0 || self.dedup_decimals > 9 {
            return Err("dedup_decimals must be in 1..=9");
        }
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err("limit must be nonzero when set");
            }
        }
        Ok(())
    }
}

/// Global shared configuration, immutable after construction.
#[derive(Debug, Clone)]
pub struct SharedConfig {
    cfg: Arc<BuildConfig>,
}

impl SharedConfig {
    pub fn from_config(cfg: BuildConfig) -> Self {
        // Check config for validity before returning the SharedConfig object
        match cfg.validate() {
            Ok(_) => {}
            Err(e) => panic!("Invalid builder configuration: {}", e),
        }

        Self { cfg: Arc::new(cfg) }
    }

    /// Access immutable config.
    pub fn config(&self) -> Arc<BuildConfig> {
        Arc::clone(&self.cfg)
    }
}
