// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod page;
pub mod progress;
pub mod session;
pub mod tui;

// Re-export commonly used types
pub use crate::core::{
    advise, estimate, format_currency, Advice, Categorical, EstimateResult, InputRecord, Region,
    Sex, Smoker, Submission,
};

pub use crate::config::{load_config, MedcostConfig};

pub use crate::data::{load_historical, DataView, HistoricalTable, SimulatedDistribution};

pub use crate::errors::{Error, Result};

pub use crate::page::Page;

pub use crate::session::SessionStore;
