use clap::Parser;
use form_autofill::cli::commands::{FillArgs, cmd_classify, cmd_fill};
use form_autofill::cli::config::{Cli, Commands, load_config, log_level};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Fill {
            page,
            settings,
            form,
            trigger,
            strategy,
            seed,
            output,
            trace,
        } => {
            let args = FillArgs {
                page,
                settings,
                form,
                trigger,
                strategy,
                seed,
                output,
                trace,
            };
            cmd_fill(&args, &config)?;
        }
        Commands::Classify { page } => {
            cmd_classify(&page)?;
        }
    }

    Ok(())
}
