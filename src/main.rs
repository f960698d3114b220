use crate::config::Config;
use crate::db::init_db;
use crate::router::respond;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod request;
mod responses;
mod router;
mod state;
mod templates;
mod weather;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = AppState::new(config);

    // Schema first, then the optional demo dataset.
    if let Err(e) = init_db(&state.db, &state.config.schema_path) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }
    if let Some(seed) = &state.config.seed_path {
        if let Err(e) = init_db(&state.db, seed) {
            error!(error = %e, seed = %seed, "seeding failed");
            std::process::exit(1);
        }
    }

    let addr = state.config.bind_addr;
    info!(%addr, workers = state.config.max_workers, "starting SmartStay");

    let server = Server::bind(&addr).max_workers(state.config.max_workers);

    let result = server.serve(move |req, _info| respond(req, &state));

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
