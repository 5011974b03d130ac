use rust_decimal::Decimal;
use tracing::{error, info};

use crate::core::{format_peso, Result};
use crate::modules::contributions::{ContributionCalculator, ContributionSchedule};
use crate::modules::payroll::models::{
    validate_roster, EmployeeRecord, PayrollResult, PayrollRun, TaxStatus, Totals,
};
use crate::modules::taxes::{TaxBracketTable, TaxCalculator, TaxComputationRequest};

/// Synchronous, fully deterministic payroll computation
pub struct PayrollCalculator;

impl PayrollCalculator {
    /// Payroll result for one employee given an already resolved tax
    pub fn calculate_employee(
        employee: &EmployeeRecord,
        schedule: &ContributionSchedule,
        withholding_tax: Decimal,
        tax_status: TaxStatus,
    ) -> PayrollResult {
        let breakdown = ContributionCalculator::calculate(employee.monthly_salary, schedule);
        PayrollResult::new(employee.clone(), &breakdown, withholding_tax, tax_status)
    }

    /// Run the whole roster sequentially against the bracket resolver
    ///
    /// # Errors
    /// `InvalidInput` for a negative or out-of-range salary, blank name or
    /// duplicate id, before anything is computed.
    pub fn process(
        employees: &[EmployeeRecord],
        schedule: &ContributionSchedule,
        table: &TaxBracketTable,
    ) -> Result<PayrollRun> {
        validate_roster(employees)?;

        let tax_calculator = TaxCalculator::new(table.clone());
        let mut results = Vec::with_capacity(employees.len());

        for employee in employees {
            let tax = tax_calculator
                .calculate_tax(&TaxComputationRequest::monthly(employee.monthly_salary))?;
            results.push(Self::calculate_employee(
                employee,
                schedule,
                tax.monthly_withholding_tax,
                TaxStatus::Resolved,
            ));
        }

        Self::finalize(results)
    }

    /// Reduce per-employee partials into totals and reconcile them
    pub fn finalize(results: Vec<PayrollResult>) -> Result<PayrollRun> {
        let totals = results
            .iter()
            .map(Totals::of)
            .fold(Totals::default(), |acc, partial| acc.merge(&partial));

        if let Err(e) = totals.reconcile(&results) {
            error!(error = %e, "Payroll totals failed to reconcile");
            debug_assert!(false, "{}", e);
            return Err(e);
        }

        info!(
            employees = totals.employee_count,
            degraded = totals.degraded_count,
            gross_pay = %format_peso(totals.gross_pay),
            net_pay = %format_peso(totals.net_pay),
            payroll_cost = %format_peso(totals.total_payroll_cost()),
            "Payroll run completed"
        );

        Ok(PayrollRun::new(results, totals))
    }
}
