use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// SSS contribution rates and Monthly Salary Credit bounds (2023 schedule)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SssRates {
    /// Employee share of the MSC (0.045)
    pub employee_rate: Decimal,
    /// Employer share of the MSC (0.095)
    pub employer_rate: Decimal,
    pub min_msc: Decimal,
    pub max_msc: Decimal,
}

/// PhilHealth premium rate and salary base bounds (2024 schedule)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhilHealthRates {
    /// Total premium rate, split evenly between employee and employer
    pub rate: Decimal,
    pub min_salary_base: Decimal,
    pub max_salary_base: Decimal,
}

/// Pag-IBIG (HDMF) rates, compensation ceiling and per-side cap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagIbigRates {
    /// Employee rate when salary <= `low_salary_threshold`
    pub employee_rate_low: Decimal,
    /// Employee rate above the threshold
    pub employee_rate_high: Decimal,
    pub employer_rate: Decimal,
    pub low_salary_threshold: Decimal,
    pub max_compensation_base: Decimal,
    /// Applied to each side independently after rate multiplication
    pub share_cap: Decimal,
}

/// Immutable rate regime for the three statutory programs.
///
/// Passed explicitly into every contribution rule so a legislated change
/// is a new value, not an edit to calculation code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContributionSchedule {
    pub sss: SssRates,
    pub philhealth: PhilHealthRates,
    pub pagibig: PagIbigRates,
}

impl Default for SssRates {
    fn default() -> Self {
        Self {
            employee_rate: Decimal::new(45, 3),
            employer_rate: Decimal::new(95, 3),
            min_msc: Decimal::from(4_000),
            max_msc: Decimal::from(30_000),
        }
    }
}

impl Default for PhilHealthRates {
    fn default() -> Self {
        Self {
            rate: Decimal::new(5, 2),
            min_salary_base: Decimal::from(10_000),
            max_salary_base: Decimal::from(100_000),
        }
    }
}

impl Default for PagIbigRates {
    fn default() -> Self {
        Self {
            employee_rate_low: Decimal::new(1, 2),
            employee_rate_high: Decimal::new(2, 2),
            employer_rate: Decimal::new(2, 2),
            low_salary_threshold: Decimal::from(1_500),
            max_compensation_base: Decimal::from(10_000),
            share_cap: Decimal::from(100),
        }
    }
}

impl ContributionSchedule {
    /// Validate that every rate is a fraction and every range is ordered
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("sss.employee_rate", self.sss.employee_rate),
            ("sss.employer_rate", self.sss.employer_rate),
            ("philhealth.rate", self.philhealth.rate),
            ("pagibig.employee_rate_low", self.pagibig.employee_rate_low),
            ("pagibig.employee_rate_high", self.pagibig.employee_rate_high),
            ("pagibig.employer_rate", self.pagibig.employer_rate),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(AppError::configuration(format!(
                    "{} must be between 0 and 1, got {}",
                    name, rate
                )));
            }
        }

        if self.sss.min_msc < Decimal::ZERO || self.sss.min_msc > self.sss.max_msc {
            return Err(AppError::configuration(format!(
                "SSS MSC range is invalid: min {} max {}",
                self.sss.min_msc, self.sss.max_msc
            )));
        }

        if self.philhealth.min_salary_base < Decimal::ZERO
            || self.philhealth.min_salary_base > self.philhealth.max_salary_base
        {
            return Err(AppError::configuration(format!(
                "PhilHealth salary base range is invalid: min {} max {}",
                self.philhealth.min_salary_base, self.philhealth.max_salary_base
            )));
        }

        let pagibig_amounts = [
            ("pagibig.low_salary_threshold", self.pagibig.low_salary_threshold),
            ("pagibig.max_compensation_base", self.pagibig.max_compensation_base),
            ("pagibig.share_cap", self.pagibig.share_cap),
        ];
        for (name, amount) in pagibig_amounts {
            if amount < Decimal::ZERO {
                return Err(AppError::configuration(format!(
                    "{} cannot be negative, got {}",
                    name, amount
                )));
            }
        }

        Ok(())
    }
}
