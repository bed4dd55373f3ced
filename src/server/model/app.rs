use sea_orm::DatabaseConnection;

use crate::server::service::setting::SettingsCache;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub settings: SettingsCache,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            settings: SettingsCache::new(),
        }
    }
}
