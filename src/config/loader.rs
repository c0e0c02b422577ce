use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{AdviceConfig, MedcostConfig, SimulationConfig};
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".medcost.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, resetting invalid sections to defaults
pub fn parse_and_validate_config(contents: &str) -> Result<MedcostConfig> {
    let mut config = toml::from_str::<MedcostConfig>(contents)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;

    if let Err(e) = config.simulation.validate() {
        log::warn!("Invalid simulation settings: {}. Using defaults.", e);
        config.simulation = SimulationConfig::default();
    }

    if let Err(e) = config.advice.validate() {
        log::warn!("Invalid advice settings: {}. Using defaults.", e);
        config.advice = AdviceConfig::default();
    }

    Ok(config)
}

/// Try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<MedcostConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &Error) {
    // Only log actual errors, not "file not found"
    if !matches!(error, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound) {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: PathBuf) -> MedcostConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 11;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No {} found. Using default config.", CONFIG_FILE_NAME);
            MedcostConfig::default()
        })
}

/// Load configuration, honouring an explicit path when given
pub fn load_config(explicit: Option<&Path>) -> MedcostConfig {
    if let Some(path) = explicit {
        return try_load_config_from_path(path).unwrap_or_else(|| {
            log::warn!(
                "Could not load config from {}. Using default config.",
                path.display()
            );
            MedcostConfig::default()
        });
    }

    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            MedcostConfig::default()
        }
    }
}
