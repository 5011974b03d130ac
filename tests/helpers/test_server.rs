// Test Server Helpers
//
// Builds the payroll application for actix-web's in-process test service.

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use payroll::modules::contributions::ContributionSchedule;
use payroll::modules::payroll::services::{PayrollService, PayrollSettings};
use payroll::modules::taxes::{BracketTaxProvider, TaxProvider};

/// Payroll service with default rates and the given provider
pub fn payroll_service(provider: Arc<dyn TaxProvider>, tax_timeout: Duration) -> Arc<PayrollService> {
    Arc::new(PayrollService::new(
        Arc::new(ContributionSchedule::default()),
        provider,
        PayrollSettings {
            max_concurrency: 4,
            tax_timeout,
        },
    ))
}

/// Payroll service backed by the deterministic bracket resolver
pub fn default_payroll_service() -> Arc<PayrollService> {
    payroll_service(
        Arc::new(BracketTaxProvider::default()),
        Duration::from_secs(2),
    )
}

/// Register every application route, as main does
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    payroll::modules::health::configure(cfg);
    payroll::modules::payroll::configure_payroll_routes(cfg);
    payroll::modules::taxes::controllers::configure_tax_routes(cfg);
}
