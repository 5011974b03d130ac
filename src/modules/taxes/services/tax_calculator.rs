use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::taxes::models::{TaxBracketTable, TaxComputation, TaxComputationRequest};

const MONTHS_PER_YEAR: i64 = 12;

/// Deterministic progressive withholding tax resolver
#[derive(Debug, Clone, Default)]
pub struct TaxCalculator {
    table: TaxBracketTable,
}

impl TaxCalculator {
    pub fn new(table: TaxBracketTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TaxBracketTable {
        &self.table
    }

    /// Compute monthly withholding tax.
    ///
    /// Annualizes the salary (or uses the supplied annual taxable income),
    /// applies the marginal rate of the matching bracket, then spreads the
    /// annual tax back over twelve months.
    pub fn calculate_tax(&self, request: &TaxComputationRequest) -> Result<TaxComputation> {
        request.validate()?;

        let months = Decimal::from(MONTHS_PER_YEAR);
        let annual_income = match request.annual_taxable_income {
            Some(annual) => annual,
            None => request.monthly_salary.checked_mul(months).ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Monthly salary {} is too large to annualize",
                    request.monthly_salary
                ))
            })?,
        };

        let annual_tax = self.annual_tax(annual_income);

        Ok(TaxComputation {
            monthly_withholding_tax: annual_tax / months,
            annualized_tax: request.annual_taxable_income.map(|_| annual_tax),
        })
    }

    /// Annual tax for an annual income already known to be non-negative
    pub fn annual_tax(&self, annual_income: Decimal) -> Decimal {
        self.table.bracket_for(annual_income).annual_tax(annual_income)
    }
}
