use sea_orm::DatabaseConnection;

/// Shared by every handler; services are built per request from the pool.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}
