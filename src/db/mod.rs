pub mod categories;
pub mod questions;

use sqlx::sqlite::SqlitePool;
use sqlx::Error;

pub use categories::Category;
pub use questions::{NewQuestion, Question};

pub async fn establish_connection(path: &str) -> Result<SqlitePool, Error> {
    SqlitePool::connect(format!("sqlite:{}", path).as_str()).await
}

pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
