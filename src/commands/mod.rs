//! CLI command implementations.
//!
//! - **run**: interactive terminal interface (the default)
//! - **estimate**: one-shot estimate printed to stdout
//! - **report**: self-contained HTML report
//! - **init**: write a default `.medcost.toml`

pub mod estimate;
pub mod init;
pub mod report;
pub mod run;

pub use estimate::{handle_estimate, EstimateConfig};
pub use init::init_config;
pub use report::{handle_report, ReportConfig};
pub use run::{handle_run, RunConfig};
