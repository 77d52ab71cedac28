use trivia_api::db;
use trivia_api::server::app::run_server;
use trivia_api::server::rng::QuizRng;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenv::dotenv().ok();
    let path = dotenv::var("DB_PATH").expect("DB_PATH must be set");
    let pool = db::establish_connection(&path).await?;
    db::run_migrations(&pool).await?;

    run_server(pool, QuizRng::from_entropy()).await
}
