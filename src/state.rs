use crate::config::Config;
use crate::db::Database;

/// Everything a request handler can reach. Shared read-only by all workers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            db: Database::new(config.db_path.clone()),
            config,
        }
    }
}
