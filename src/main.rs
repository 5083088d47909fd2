use clap::Parser;
use intent_router::adapter::inbound::cli::command::{CheckCommand, Cli, ColorChoice, Commands};
use intent_router::adapter::inbound::cli::output::{self, OutputConfig};
use intent_router::adapter::inbound::cli::{agents, check, classify};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig { json: cli.json });

    let result = match cli.command {
        Commands::Classify(args) => classify::execute(args).await,
        Commands::Agents(arg) => agents::execute(&arg.config),
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(&arg.config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
