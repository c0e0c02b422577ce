use anyhow::Result;
use clap::Parser;
use medcost::cli::{Cli, Commands};
use medcost::commands::{EstimateConfig, ReportConfig, RunConfig};
use medcost::config::load_config;
use medcost::formatting::FormattingConfig;
use medcost::observability::{init_tracing, install_panic_hook, set_phase, Phase};
use std::time::Duration;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let settings = {
        let _phase = set_phase(Phase::Startup);
        load_config(cli.config.as_deref())
    };

    match cli.command.unwrap_or(Commands::Run {
        data: None,
        delay_ms: None,
    }) {
        Commands::Run { data, delay_ms } => medcost::commands::handle_run(RunConfig {
            settings,
            data_file: data,
            delay_ms,
        }),
        Commands::Estimate {
            input,
            format,
            no_delay,
            plain,
        } => {
            let delay = if no_delay {
                Duration::ZERO
            } else {
                Duration::from_millis(settings.processing_delay_ms)
            };
            let formatting = if plain {
                FormattingConfig::plain()
            } else {
                FormattingConfig::from_env()
            };
            medcost::commands::handle_estimate(EstimateConfig {
                record: input.to_record()?,
                format,
                delay,
                formatting,
                obesity_threshold: settings.advice.obesity_bmi_threshold,
            })
        }
        Commands::Report {
            input,
            data,
            output,
        } => {
            let data_file = data.unwrap_or_else(|| settings.data_file.clone());
            medcost::commands::handle_report(ReportConfig {
                record: input.to_record()?,
                data_file,
                output,
                settings,
            })
        }
        Commands::Init { force } => medcost::commands::init_config(force),
    }
}
