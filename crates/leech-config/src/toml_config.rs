use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::build_config::{BuildConfig, Construction, SharedConfig};

/// Build `SharedConfig` from a TOML configuration file
pub fn from_toml_str(toml_str: &str) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.2";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref generator) = root.generator {
        if !generator.extra.is_empty() {
            return Err(format!("Unrecognized fields: generator::{:?}", sorted_keys(&generator.extra)).into());
        }
    }

    // Build config from required and optional values
    let mut cfg = BuildConfig {
        construction: root.construction,
        debug_log: root.debug_log,
        ..BuildConfig::default()
    };

    if let Some(generator) = root.generator {
        apply_generator_patch(&mut cfg, generator);
    }

    if let Err(e) = cfg.validate() {
        return Err(format!("Invalid builder configuration: {}", e).into());
    }

    Ok(SharedConfig::from_config(cfg))
}

/// Build `SharedConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `SharedConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let cfg = from_reader(r)?;
    Ok(cfg)
}

fn apply_generator_patch(dst: &mut BuildConfig, src: GeneratorDto) {
    if let Some(v) = src.target_count {
        dst.target_count = v;
    }
    if let Some(v) = src.dedup_decimals {
        dst.dedup_decimals = v;
    }
    if let Some(v) = src.workers {
        dst.workers = v;
    }

    // Option
    dst.limit = src.limit;
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    construction: Construction,
    debug_log: Option<String>,

    #[serde(default)]
    generator: Option<GeneratorDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct GeneratorDto {
    pub target_count: Option<usize>,
    pub dedup_decimals: Option<u32>,
    pub workers: Option<usize>,
    pub limit: Option<usize>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let cfg = from_toml_str(
            r#"
            config_version = "0.2"
            construction = "Complete"
            "#,
        )
        .unwrap();
        let cfg = cfg.config();
        assert_eq!(cfg.construction, Construction::Complete);
        assert_eq!(cfg.target_count, 196_560);
        assert_eq!(cfg.dedup_decimals, 6);
        assert_eq!(cfg.workers, 0);
        assert_eq!(cfg.limit, None);
    }

    #[test]
    fn test_generator_section_patch() {
        let cfg = from_toml_str(
            r#"
            config_version = "0.2"
            construction = "Legacy"

            [generator]
            workers = 4
            limit = 1000
            dedup_decimals = 8
            "#,
        )
        .unwrap();
        let cfg = cfg.config();
        assert_eq!(cfg.construction, Construction::Legacy);
        assert_eq!(cfg.workers, 4);
        assert_eq!(cfg.limit, Some(1000));
        assert_eq!(cfg.dedup_decimals, 8);
    }

    #[test]
    fn test_wrong_version_rejected() {
        let err = from_toml_str(
            r#"
            config_version = "0.1"
            construction = "Complete"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("config_version"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = from_toml_str(
            r#"
            config_version = "0.2"
            construction = "Complete"
            bogus = 1
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }
}
