use crate::core::{InputRecord, Region, Sex, Smoker};
use crate::errors::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary
    Terminal,
    /// Machine readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "medcost")]
#[command(about = "Interactive medical cost estimator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .medcost.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The six form inputs.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Age in years (0-120)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(0..=120))]
    pub age: u32,

    /// Body mass index (0-100)
    #[arg(long, default_value_t = 25.0)]
    pub bmi: f64,

    /// Number of children (0-10)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=10))]
    pub children: u32,

    #[arg(long, value_enum, default_value = "male")]
    pub sex: Sex,

    /// Smoking history
    #[arg(long, value_enum, default_value = "yes")]
    pub smoker: Smoker,

    /// Region of residence (java/a, kalimantan/b, sulawesi/c, papua/d)
    #[arg(long, value_enum, default_value = "java")]
    pub region: Region,
}

impl InputArgs {
    pub fn to_record(&self) -> Result<InputRecord> {
        InputRecord::new(
            self.age,
            self.bmi,
            self.children,
            self.sex,
            self.smoker,
            self.region,
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive terminal interface
    Run {
        /// Historical data CSV (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Processing delay in milliseconds (overrides config)
        #[arg(long = "delay-ms")]
        delay_ms: Option<u64>,
    },

    /// Compute a single estimate
    Estimate {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Skip the processing delay
        #[arg(long = "no-delay")]
        no_delay: bool,

        /// Plain output: no colors, no emoji
        #[arg(long)]
        plain: bool,
    },

    /// Write an HTML report with the estimate and all charts
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Historical data CSV (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Output HTML file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write a default .medcost.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["medcost"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_estimate_defaults() {
        let cli = Cli::try_parse_from(["medcost", "estimate"]).unwrap();
        match cli.command {
            Some(Commands::Estimate { input, format, .. }) => {
                assert_eq!(input.to_record().unwrap(), InputRecord::default());
                assert_eq!(format, OutputFormat::Terminal);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_region_letter_alias() {
        let cli = Cli::try_parse_from(["medcost", "estimate", "--region", "c"]).unwrap();
        match cli.command {
            Some(Commands::Estimate { input, .. }) => assert_eq!(input.region, Region::Sulawesi),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_age_out_of_range_rejected_by_parser() {
        assert!(Cli::try_parse_from(["medcost", "estimate", "--age", "121"]).is_err());
    }

    #[test]
    fn test_bmi_out_of_range_rejected_by_record() {
        let cli = Cli::try_parse_from(["medcost", "estimate", "--bmi", "100.5"]).unwrap();
        match cli.command {
            Some(Commands::Estimate { input, .. }) => assert!(input.to_record().is_err()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_report_requires_output() {
        assert!(Cli::try_parse_from(["medcost", "report"]).is_err());
    }
}
