use tracing_subscriber::EnvFilter;

use holocron::{config::Config, model::app::AppState, router, seed, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");

    seed::seed_database(&db)
        .await
        .expect("Failed to seed database");

    let listener = startup::bind_listener(&config)
        .await
        .expect("Failed to bind listener");

    tracing::info!("Starting server");

    let app = router::routes().with_state(AppState { db });

    axum::serve(listener, app)
        .await
        .expect("Failed to serve connections");
}
