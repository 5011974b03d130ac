use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::payroll::models::EmployeeRecord;
use crate::modules::payroll::services::PayrollService;

/// Request body for a payroll run
#[derive(Debug, Deserialize)]
pub struct RunPayrollRequest {
    pub employees: Vec<EmployeeRecord>,
    /// Round every amount to centavos in the response
    #[serde(default)]
    pub round: bool,
}

/// Run payroll for a roster
/// POST /payroll/run
pub async fn run_payroll(
    service: web::Data<Arc<PayrollService>>,
    request: web::Json<RunPayrollRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let run = service.run(&request.employees).await?;

    if request.round {
        Ok(HttpResponse::Ok().json(run.rounded()))
    } else {
        Ok(HttpResponse::Ok().json(run))
    }
}

/// Configure payroll routes
pub fn configure_payroll_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/payroll").route("/run", web::post().to(run_payroll)));
}
