//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use sea_orm::{Database, DatabaseConnection};

use crate::error::TestError;

/// A fully initialized test environment: an in-memory SQLite database with
/// the requested tables created and catalogs seeded.
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }
}
