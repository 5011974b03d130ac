use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::payroll::services::PayrollService;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub contribution_schedule: bool,
    /// Number of brackets in the provider's table
    pub tax_brackets: usize,
    pub tax_provider: String,
}

/// GET /health - Liveness probe
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Ready once the contribution schedule is valid
pub async fn readiness_check(service: web::Data<Arc<PayrollService>>) -> impl Responder {
    let mut checks = ReadinessChecks {
        contribution_schedule: true,
        tax_brackets: service.tax_provider().table().brackets().len(),
        tax_provider: service.tax_provider().name().to_string(),
    };

    if let Err(e) = service.schedule().validate() {
        checks.contribution_schedule = false;
        tracing::error!("Contribution schedule readiness check failed: {}", e);
    }

    let ready = checks.contribution_schedule;
    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
