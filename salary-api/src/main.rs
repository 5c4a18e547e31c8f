//! Salary Classification API - serves a trained salary-class model over HTTP.

use std::env;
use std::sync::Arc;

use salary_api::{app, load_configured_model, logging, AppState, Config, EncoderTable};
use tokio::net::TcpListener;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    println!("salary-api {}", VERSION);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Handle --version / -V
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        print_version();
        return Ok(());
    }

    // Load configuration
    let config = Config::load().map_err(|e| {
        format!(
            "Failed to load configuration: {}. \
             Check config.toml or the SALARY__SECTION__KEY environment variables.",
            e
        )
    })?;

    // Initialize tracing
    logging::init(&config.logging.level);
    tracing::info!("Starting salary-api {}", VERSION);

    // Encoders are required; the model is not
    let encoders = EncoderTable::from_defaults()?;
    tracing::info!("Label encoders created");

    let model = load_configured_model(&config);

    let state = Arc::new(AppState::new(config.clone(), encoders, model));
    let app = app(state);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
