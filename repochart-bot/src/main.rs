//! `repochart` binary: run the bot, or render a chart / print the summary once.

use anyhow::Result;
use clap::Parser;
use repochart_bot::{handle_chart, handle_summary, load_config, run_bot, Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Console logging for the one-shot commands; stderr keeps stdout for their output.
fn init_cli_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Chart { branch, output } => {
            init_cli_tracing();
            match handle_chart(branch, output).await? {
                Some(path) => println!("Chart written to {}", path.display()),
                None => println!("The repository has no branches; nothing to chart."),
            }
            Ok(())
        }
        Commands::Summary => {
            init_cli_tracing();
            println!("{}", handle_summary().await?);
            Ok(())
        }
    }
}
