mod config;
mod core;
mod models;
mod routes;
mod services;

use crate::config::Settings;
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use routes::submit::AppState;
use services::SupabaseClient;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration comes first so the log level and format can honor the
    // [logging] section; the bare LOG_LEVEL / LOG_FORMAT variables still win.
    let settings = Settings::load().unwrap_or_else(|e| panic!("Configuration error: {}", e));

    // Initialize logging
    let (log_level, log_format) = settings.logging.effective();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Flourish waitlist service...");
    info!("Configuration loaded successfully");

    // Initialize the Supabase client once; it holds only connection
    // configuration and is shared across all workers.
    let supabase = Arc::new(SupabaseClient::new(
        settings.supabase.url,
        settings.supabase.anon_key,
        settings.supabase.table,
    ));

    info!("Supabase client initialized");

    // Build application state
    let app_state = AppState { supabase };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
