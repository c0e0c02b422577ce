//! Configuration loaded from `.medcost.toml`.
//!
//! Every field has a default, so an absent or partial file is fine. Invalid
//! sections fall back to their defaults with a logged warning.

mod core;
mod loader;

pub use self::core::{
    AdviceConfig, MedcostConfig, SimulationConfig, DEFAULT_DATA_FILE,
    DEFAULT_PROCESSING_DELAY_MS,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

/// Default configuration file written by `medcost init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# medcost configuration

# Historical predictions shown in the User Data page
data_file = "Regression.csv"

# Cosmetic delay before an estimate is displayed
processing_delay_ms = 2000

[simulation]
seed = 42
mean = 5000.0
std_dev = 2000.0
samples = 1000
bins = 30

[advice]
obesity_bmi_threshold = 30.0
"#;
