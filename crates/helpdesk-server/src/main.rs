//! Helpdesk server binary - parse flags, load configuration, serve the API

use std::process;
use std::sync::Arc;

use tracing::info;

use helpdesk_server::cli::Cli;
use helpdesk_server::config::Config;
use helpdesk_server::error::Result;
use helpdesk_server::state::AppState;
use helpdesk_server::{logging, routes};
use helpdesk_store::Store;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    logging::init(cli.verbose, &config.logging.level);

    if let Err(e) = run(config).await {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    Config::load_with_file(cli.config.as_deref())?.with_bind_override(cli.bind.as_deref())
}

async fn run(config: Config) -> Result<()> {
    let store = Arc::new(Store::new());
    let state = AppState::new(store);
    let app = routes::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.server.bind).await?;
    info!(bind = %config.server.bind, "helpdesk server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
