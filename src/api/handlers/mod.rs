use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::settings::AppConfig;
use crate::database::DbPool;

pub mod game;
pub mod players;

pub struct AppState {
    pub pool: DbPool,
    pub catalog: Arc<Catalog>,
    pub config: AppConfig,
}
