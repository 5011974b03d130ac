//! Integration tests for the remote tax provider
//!
//! Spawns a real HTTP server with actix-test standing in for the external
//! tax service, then drives `RemoteTaxProvider` and a full payroll run
//! against it.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpRequest, HttpResponse};
use helpers::*;
use payroll::core::AppError;
use payroll::modules::payroll::models::TaxStatus;
use payroll::modules::taxes::{
    RemoteTaxProvider, TaxBracketTable, TaxCalculator, TaxComputationRequest, TaxProvider,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

#[derive(Deserialize)]
struct IncomingTaxRequest {
    monthly_salary: Decimal,
    annual_taxable_income: Option<Decimal>,
    tax_table: String,
}

/// Fake tax service: resolves against the table it was sent
async fn compute(body: web::Json<IncomingTaxRequest>) -> HttpResponse {
    let table = match TaxBracketTable::from_json(&body.tax_table) {
        Ok(table) => table,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };

    let mut request = TaxComputationRequest::monthly(body.monthly_salary);
    if let Some(annual) = body.annual_taxable_income {
        request = request.with_annual_taxable_income(annual);
    }

    match TaxCalculator::new(table).calculate_tax(&request) {
        Ok(computation) => HttpResponse::Ok().json(computation),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

async fn compute_authorized(req: HttpRequest, body: web::Json<IncomingTaxRequest>) -> HttpResponse {
    let authorized = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .map(|h| h == "Bearer test-key")
        .unwrap_or(false);

    if !authorized {
        return HttpResponse::Unauthorized().finish();
    }
    compute(body).await
}

async fn broken() -> HttpResponse {
    HttpResponse::InternalServerError().body("model overloaded")
}

async fn slow() -> HttpResponse {
    tokio::time::sleep(Duration::from_secs(3)).await;
    HttpResponse::Ok().json(serde_json::json!({ "monthly_withholding_tax": 0 }))
}

fn spawn_tax_service() -> actix_test::TestServer {
    actix_test::start(|| {
        App::new()
            .route("/tax", web::post().to(compute))
            .route("/tax/auth", web::post().to(compute_authorized))
            .route("/tax/broken", web::post().to(broken))
            .route("/tax/slow", web::post().to(slow))
    })
}

fn provider(url: String, api_key: Option<&str>) -> RemoteTaxProvider {
    RemoteTaxProvider::new(
        url,
        api_key.map(str::to_string),
        TaxBracketTable::bir_2023(),
        Duration::from_millis(500),
    )
    .expect("valid provider")
}

#[actix_web::test]
async fn test_remote_provider_round_trip() {
    let srv = spawn_tax_service();
    let provider = provider(srv.url("/tax"), None);

    let computation = provider
        .compute_monthly_tax(&TaxComputationRequest::monthly(dec!(25000)))
        .await
        .unwrap();
    assert_eq!(computation.monthly_withholding_tax, dec!(625));
    assert_eq!(computation.annualized_tax, None);

    let computation = provider
        .compute_monthly_tax(
            &TaxComputationRequest::monthly(dec!(25000)).with_annual_taxable_income(dec!(300000)),
        )
        .await
        .unwrap();
    assert_eq!(computation.annualized_tax, Some(dec!(7500)));
}

#[actix_web::test]
async fn test_remote_provider_sends_bearer_token() {
    let srv = spawn_tax_service();

    let authorized = provider(srv.url("/tax/auth"), Some("test-key"));
    assert!(authorized
        .compute_monthly_tax(&TaxComputationRequest::monthly(dec!(25000)))
        .await
        .is_ok());

    let anonymous = provider(srv.url("/tax/auth"), None);
    let result = anonymous
        .compute_monthly_tax(&TaxComputationRequest::monthly(dec!(25000)))
        .await;
    assert!(matches!(result, Err(AppError::TaxResolution(_))));
}

#[actix_web::test]
async fn test_remote_provider_surfaces_server_errors() {
    let srv = spawn_tax_service();
    let provider = provider(srv.url("/tax/broken"), None);

    let err = provider
        .compute_monthly_tax(&TaxComputationRequest::monthly(dec!(25000)))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::TaxResolution(_)));
    assert!(err.to_string().contains("model overloaded"));
}

#[actix_web::test]
async fn test_remote_provider_times_out() {
    let srv = spawn_tax_service();
    let provider = provider(srv.url("/tax/slow"), None);

    let err = provider
        .compute_monthly_tax(&TaxComputationRequest::monthly(dec!(25000)))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("timed out"), "{}", err);
}

#[actix_web::test]
async fn test_payroll_run_over_remote_provider() {
    let srv = spawn_tax_service();
    let service = payroll_service(
        Arc::new(provider(srv.url("/tax"), None)),
        Duration::from_secs(2),
    );

    let run = service.run(&TestDataFactory::sample_roster()).await.unwrap();

    assert!(run.results.iter().all(|r| r.tax_status == TaxStatus::Resolved));
    assert_eq!(run.results[0].deductions.tax, dec!(625));
    // 120,000 × 12 = 1,440,000 -> 262,500 / 12
    assert_eq!(run.results[3].deductions.tax, dec!(21875));
}

#[actix_web::test]
async fn test_payroll_run_degrades_when_remote_is_down() {
    let srv = spawn_tax_service();
    let service = payroll_service(
        Arc::new(provider(srv.url("/tax/broken"), None)),
        Duration::from_secs(2),
    );

    let run = service.run(&TestDataFactory::sample_roster()).await.unwrap();

    assert_eq!(run.totals.degraded_count, 4);
    assert_eq!(run.totals.tax, Decimal::ZERO);
    assert_eq!(
        run.totals.net_pay,
        run.totals.gross_pay - run.totals.total_employee_deductions()
    );
}
