//! labchat terminal client entry point.
//!
//! Binary name: `labchat`
//!
//! Parses CLI arguments, sets up tracing, loads configuration, then dispatches
//! to the interactive chat loop or a one-shot command.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use labchat_observe::tracing_setup::LogFormat;

use cli::{Cli, Commands};
use state::{AppState, ConfigOverrides};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,labchat=debug",
        _ => "trace",
    };
    let log_format = if cli.json { LogFormat::Json } else { LogFormat::Text };
    labchat_observe::tracing_setup::init_tracing(filter, log_format, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let command = cli.command.clone().unwrap_or(Commands::Chat);

    let result = match command {
        // Shell completions don't need app state
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "labchat", &mut std::io::stdout());
            Ok(())
        }
        Commands::Chat => {
            let state = init_state(&cli).await?;
            cli::chat::loop_runner::run_chat_loop(&state).await
        }
        Commands::Ask { message, html } => {
            let state = init_state(&cli).await?;
            cli::ask::ask(&state, &message, html, cli.json).await
        }
        Commands::History { session_id } => {
            let state = init_state(&cli).await?;
            cli::history::show_history(&state, &session_id, cli.json).await
        }
    };

    labchat_observe::tracing_setup::shutdown_tracing();
    result
}

async fn init_state(cli: &Cli) -> anyhow::Result<AppState> {
    AppState::init(ConfigOverrides {
        base_url: cli.base_url.clone(),
        api_key: cli.api_key.clone(),
        theme: cli.theme,
    })
    .await
}
