use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod graph;
mod services;

pub use cli::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use graph::*;
pub use services::baseline::DecisionTable;
pub use services::checker::{plan_checks, run_checks};
pub use services::collector::collect_catalog;
pub use services::config::Settings;
pub use services::output::Console;
pub use services::scopes::resolve_scopes;
pub use services::storage::{read_catalog, write_catalog, write_results};

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let settings = Settings::resolve(&cli)?;
    let console = Console::new(settings.color);
    tracing::debug!(?settings, "resolved settings");

    console.info("Loading token...\n");
    let token = TokenFile::load(&settings.auth_file)?;
    let client = GraphClient::new(&settings.graph_url, Box::new(token))?;

    if commands::handle_collect_command(&cli, &settings, &console, &client)? {
        return Ok(());
    }
    commands::handle_check_command(&cli, &settings, &console, &client)?;

    Ok(())
}
