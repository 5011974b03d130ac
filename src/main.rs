use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payroll::config::Config;
use payroll::modules::{health, payroll as payroll_module, taxes};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payroll=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting payroll service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let service = Arc::new(
        config
            .build_payroll_service()
            .context("Failed to build payroll service")?,
    );

    tracing::info!(
        "Tax provider: {} ({} brackets)",
        service.tax_provider().name(),
        service.tax_provider().table().brackets().len()
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(service.clone()))
            .configure(health::configure)
            .configure(payroll_module::configure_payroll_routes)
            .configure(taxes::controllers::configure_tax_routes)
            .route("/", web::get().to(index))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Philippine Payroll Deduction Service",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
