use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{AppError, Result};
use crate::modules::taxes::models::{TaxBracketTable, TaxComputation, TaxComputationRequest};

use super::tax_provider::TaxProvider;

/// Tax provider that delegates to an external JSON service.
///
/// The service receives the bracket table as a JSON string alongside the
/// salary and answers `{ monthly_withholding_tax, annualized_tax? }`.
pub struct RemoteTaxProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    table: TaxBracketTable,
    tax_table_json: String,
}

#[derive(Serialize)]
struct RemoteTaxRequest<'a> {
    monthly_salary: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    annual_taxable_income: Option<Decimal>,
    tax_table: &'a str,
}

impl RemoteTaxProvider {
    /// Build a provider with a per-request timeout.
    ///
    /// The serialized table is parsed back before the provider is usable,
    /// so a table the remote side could not read fails here.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        table: TaxBracketTable,
        timeout: Duration,
    ) -> Result<Self> {
        let tax_table_json = table.to_json()?;
        TaxBracketTable::from_json(&tax_table_json)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
            table,
            tax_table_json,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TaxProvider for RemoteTaxProvider {
    async fn compute_monthly_tax(&self, request: &TaxComputationRequest) -> Result<TaxComputation> {
        request.validate()?;

        let payload = RemoteTaxRequest {
            monthly_salary: request.monthly_salary,
            annual_taxable_income: request.annual_taxable_income,
            tax_table: &self.tax_table_json,
        };

        let mut builder = self.client.post(&self.endpoint).json(&payload);
        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::tax_resolution(format!("Tax service timed out: {}", e))
            } else {
                AppError::tax_resolution(format!("Tax service request failed: {}", e))
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::tax_resolution(format!(
                "Tax service error {}: {}",
                status, error_body
            )));
        }

        response
            .json::<TaxComputation>()
            .await
            .map_err(|e| AppError::tax_resolution(format!("Failed to parse tax service response: {}", e)))
    }

    fn name(&self) -> &str {
        "remote"
    }

    fn table(&self) -> &TaxBracketTable {
        &self.table
    }
}
