use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{format_peso, max_amount, AppError, Result};

/// Input to a withholding tax computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxComputationRequest {
    pub monthly_salary: Decimal,
    /// Takes precedence over `monthly_salary × 12` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_taxable_income: Option<Decimal>,
}

impl TaxComputationRequest {
    pub fn monthly(monthly_salary: Decimal) -> Self {
        Self {
            monthly_salary,
            annual_taxable_income: None,
        }
    }

    pub fn with_annual_taxable_income(mut self, annual_taxable_income: Decimal) -> Self {
        self.annual_taxable_income = Some(annual_taxable_income);
        self
    }

    /// Reject negative or out-of-range amounts before any bracket lookup
    pub fn validate(&self) -> Result<()> {
        check_amount("Monthly salary", self.monthly_salary)?;
        if let Some(annual) = self.annual_taxable_income {
            check_amount("Annual taxable income", annual)?;
        }
        Ok(())
    }
}

fn check_amount(label: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(AppError::invalid_input(format!(
            "{} cannot be negative, got {}",
            label, amount
        )));
    }
    if amount > max_amount() {
        return Err(AppError::invalid_input(format!(
            "{} {} exceeds the maximum of {}",
            label,
            amount,
            format_peso(max_amount())
        )));
    }
    Ok(())
}

/// Withholding tax produced by a tax provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxComputation {
    pub monthly_withholding_tax: Decimal,
    /// Only reported when an annual taxable income was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annualized_tax: Option<Decimal>,
}

impl TaxComputation {
    /// Check the figure is usable as a deduction from `gross_pay`
    pub fn ensure_within(&self, gross_pay: Decimal) -> Result<()> {
        if self.monthly_withholding_tax < Decimal::ZERO {
            return Err(AppError::tax_resolution(format!(
                "Negative withholding tax {}",
                self.monthly_withholding_tax
            )));
        }
        if self.monthly_withholding_tax > gross_pay {
            return Err(AppError::tax_resolution(format!(
                "Withholding tax {} exceeds gross pay {}",
                self.monthly_withholding_tax, gross_pay
            )));
        }
        Ok(())
    }
}
