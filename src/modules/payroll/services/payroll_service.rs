use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::core::{AppError, Result};
use crate::modules::contributions::ContributionSchedule;
use crate::modules::payroll::models::{
    validate_roster, EmployeeRecord, PayrollResult, PayrollRun, TaxStatus,
};
use crate::modules::taxes::{TaxComputation, TaxComputationRequest, TaxProvider};

use super::payroll_calculator::PayrollCalculator;

/// Fan-out and timeout settings for a payroll run
#[derive(Debug, Clone, Copy)]
pub struct PayrollSettings {
    /// Maximum tax calls in flight at once
    pub max_concurrency: usize,
    /// Deadline for a single tax provider call
    pub tax_timeout: Duration,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            max_concurrency: 8,
            tax_timeout: Duration::from_millis(2_000),
        }
    }
}

/// Runs payroll for a roster against a pluggable tax provider.
///
/// Tax calls for different employees run concurrently; a failed or slow
/// call degrades only that employee's result.
pub struct PayrollService {
    schedule: Arc<ContributionSchedule>,
    tax_provider: Arc<dyn TaxProvider>,
    settings: PayrollSettings,
}

impl PayrollService {
    pub fn new(
        schedule: Arc<ContributionSchedule>,
        tax_provider: Arc<dyn TaxProvider>,
        settings: PayrollSettings,
    ) -> Self {
        Self {
            schedule,
            tax_provider,
            settings,
        }
    }

    pub fn schedule(&self) -> &ContributionSchedule {
        &self.schedule
    }

    pub fn tax_provider(&self) -> &dyn TaxProvider {
        self.tax_provider.as_ref()
    }

    /// Compute payroll for every employee, preserving roster order
    ///
    /// # Errors
    /// `InvalidInput` when the roster is rejected (no results are produced);
    /// `AggregationInconsistency` if totals fail to reconcile.
    pub async fn run(&self, employees: &[EmployeeRecord]) -> Result<PayrollRun> {
        validate_roster(employees)?;

        info!(
            employees = employees.len(),
            provider = %self.tax_provider.name(),
            concurrency = self.settings.max_concurrency,
            "Starting payroll run"
        );

        let results: Vec<PayrollResult> = stream::iter(employees)
            .map(|employee| self.process_employee(employee))
            .buffered(self.settings.max_concurrency.max(1))
            .collect()
            .await;

        PayrollCalculator::finalize(results)
    }

    /// Compute a single withholding tax, surfacing provider failures
    pub async fn compute_tax(&self, request: &TaxComputationRequest) -> Result<TaxComputation> {
        request.validate()?;
        let computation = self.call_provider(request).await?;
        if computation.monthly_withholding_tax < Decimal::ZERO {
            return Err(AppError::tax_resolution(format!(
                "Negative withholding tax {}",
                computation.monthly_withholding_tax
            )));
        }
        Ok(computation)
    }

    async fn process_employee(&self, employee: &EmployeeRecord) -> PayrollResult {
        let (tax, status) = match self.resolve_tax(employee).await {
            Ok(computation) => (computation.monthly_withholding_tax, TaxStatus::Resolved),
            Err(e) => {
                warn!(
                    employee_id = employee.id,
                    provider = %self.tax_provider.name(),
                    error = %e,
                    "Tax resolution failed, withholding 0"
                );
                (Decimal::ZERO, TaxStatus::Degraded { reason: e.to_string() })
            }
        };

        debug!(employee_id = employee.id, tax = %tax, "Employee payroll computed");

        PayrollCalculator::calculate_employee(employee, &self.schedule, tax, status)
    }

    async fn resolve_tax(&self, employee: &EmployeeRecord) -> Result<TaxComputation> {
        let request = TaxComputationRequest::monthly(employee.monthly_salary);
        let computation = self.call_provider(&request).await?;
        computation.ensure_within(employee.monthly_salary)?;
        Ok(computation)
    }

    async fn call_provider(&self, request: &TaxComputationRequest) -> Result<TaxComputation> {
        tokio::time::timeout(
            self.settings.tax_timeout,
            self.tax_provider.compute_monthly_tax(request),
        )
        .await
        .map_err(|_| {
            AppError::tax_resolution(format!(
                "Tax provider '{}' timed out after {}ms",
                self.tax_provider.name(),
                self.settings.tax_timeout.as_millis()
            ))
        })?
    }
}
