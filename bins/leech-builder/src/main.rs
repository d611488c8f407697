use clap::Parser;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leech_config::{BuildConfig, SharedConfig, toml_config};
use leech_core::debug;
use leech_lattice::{LatticeErr, build_lattice};
use tracing::{error, info, warn};

/// Load configuration file
fn load_config_from_toml(cfg_path: &str) -> SharedConfig {
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            println!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Leech lattice minimal-vector builder",
    long_about = "Builds the Golay code G24 and enumerates the 196,560 minimal vectors of the Leech lattice"
)]
struct Args {
    /// TOML config with generator parameters (defaults used when omitted)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() {
    eprintln!("leech-builder: Golay G24 / Leech lattice minimal-vector generator");
    eprintln!(" -> 4096 codewords, 759 octads, 196,560 minimal vectors\n");

    let args = Args::parse();
    let shared = match args.config.as_deref() {
        Some(path) => load_config_from_toml(path),
        None => SharedConfig::from_config(BuildConfig::default()),
    };
    let cfg = shared.config();
    let _log_guard = debug::setup_logging_default(cfg.debug_log.clone());

    // Ctrl+C raises the stop flag; the merge pass checks it periodically
    let stop = Arc::new(AtomicBool::new(false));
    let s = stop.clone();
    ctrlc::set_handler(move || {
        s.store(true, Ordering::SeqCst);
    })
    .expect("failed to set Ctrl+C handler");

    match build_lattice(&cfg, Some(&stop)) {
        Ok(build) => {
            let stats = build.stats;
            info!(
                "build complete: {} vectors (type1 {}, type2 {}, type3 {}), {} duplicates discarded, {:.2?}",
                build.vectors.len(),
                stats.type1,
                stats.type2,
                stats.type3,
                stats.duplicates,
                stats.elapsed
            );
            info!(
                "syndrome table: {} correctable syndromes exposed for decoding",
                build.syndromes.populated()
            );
            info!("dataset verified, ready for handoff");
        }
        Err(LatticeErr::CountMismatch { expected, found }) => {
            error!(
                "integrity failure: expected {} vectors, generated {}; refusing to hand off an incomplete dataset",
                expected, found
            );
            std::process::exit(1);
        }
        Err(LatticeErr::Aborted { emitted }) => {
            warn!("build aborted by stop flag after {} vectors", emitted);
            std::process::exit(130);
        }
    }
}
