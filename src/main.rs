use muelle::server::{
    config::Config,
    model::app::AppState,
    router,
    service::kpi::aggregator::KpiAggregatorService,
    startup,
    util::time::parse_period,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database error: {}", e);
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "recompute" {
        run_recompute(&db, &args[2..]).await;
        return;
    }

    tracing::info!("Starting server on {}:{}", config.host, config.port);

    let routes = router::routes().with_state(AppState::from(db));

    let listener = match tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}:{}: {}", config.host, config.port, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, routes).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// One-shot batch entry point: `muelle recompute <YYYY-MM-DD> [--force]`.
/// Prints the summary as JSON; exit 0 on success, non-zero on any error
/// (the transaction rollback has already been applied by then).
async fn run_recompute(db: &sea_orm::DatabaseConnection, args: &[String]) {
    let Some(raw_period) = args.first() else {
        eprintln!("Usage: muelle recompute <YYYY-MM-DD> [--force]");
        std::process::exit(2);
    };

    let periodo = match parse_period(raw_period) {
        Ok(periodo) => periodo,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    let force = args.iter().any(|a| a == "--force");

    let aggregator = KpiAggregatorService::new(db);
    match aggregator.recompute(periodo, force).await {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Recompute failed: {}", e);
            std::process::exit(1);
        }
    }
}
