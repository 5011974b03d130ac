//! Tax endpoints
//!
//! Exposes the active withholding schedule and single-salary computations
//! through whichever provider the payroll service is configured with.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::payroll::services::PayrollService;
use crate::modules::taxes::models::TaxComputationRequest;

/// Compute withholding tax for one salary
///
/// POST /taxes/compute
pub async fn compute_tax(
    service: web::Data<Arc<PayrollService>>,
    request: web::Json<TaxComputationRequest>,
) -> Result<HttpResponse, AppError> {
    let computation = service.compute_tax(&request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(computation))
}

/// List the active bracket table
///
/// GET /taxes/brackets
pub async fn list_brackets(service: web::Data<Arc<PayrollService>>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "provider": service.tax_provider().name(),
        "brackets": service.tax_provider().table().brackets(),
    }))
}

/// Configure tax routes
pub fn configure_tax_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/taxes")
            .route("/compute", web::post().to(compute_tax))
            .route("/brackets", web::get().to(list_brackets)),
    );
}
