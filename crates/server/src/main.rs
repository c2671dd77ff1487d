use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};
use server::{config::Config, router, state::AppState, utils::shutdown::shutdown_signal};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    let db = create_connection(&config.database_url).await?;
    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Database migrations applied");
    }

    let app = router(AppState { db });

    let addr = config.bind_addr().await?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Running axum on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
