use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::round_centavos;
use crate::modules::contributions::ContributionBreakdown;

use super::employee::EmployeeRecord;

/// Employee-side deductions withheld from gross pay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    pub sss: Decimal,
    pub philhealth: Decimal,
    pub pagibig: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Employer-side contributions paid on top of gross pay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    pub sss: Decimal,
    pub philhealth: Decimal,
    pub pagibig: Decimal,
    pub total: Decimal,
}

/// Whether the withholding tax came from the provider or a fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaxStatus {
    Resolved,
    /// Provider failed; tax was substituted with zero
    Degraded { reason: String },
}

/// Payroll outcome for one employee in one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    pub employee: EmployeeRecord,
    pub gross_pay: Decimal,
    pub deductions: Deductions,
    pub contributions: EmployerContributions,
    pub net_pay: Decimal,
    pub total_employer_cost: Decimal,
    pub tax_status: TaxStatus,
}

impl PayrollResult {
    /// Assemble the result from the contribution breakdown and withholding tax
    pub fn new(
        employee: EmployeeRecord,
        breakdown: &ContributionBreakdown,
        withholding_tax: Decimal,
        tax_status: TaxStatus,
    ) -> Self {
        let gross_pay = employee.monthly_salary;

        let total_deductions = breakdown.employee_total() + withholding_tax;
        let net_pay = gross_pay - total_deductions;

        let total_employer_contrib = breakdown.employer_total();
        let total_employer_cost = gross_pay + total_employer_contrib;

        Self {
            employee,
            gross_pay,
            deductions: Deductions {
                sss: breakdown.sss.employee_share,
                philhealth: breakdown.philhealth.employee_share,
                pagibig: breakdown.pagibig.employee_share,
                tax: withholding_tax,
                total: total_deductions,
            },
            contributions: EmployerContributions {
                sss: breakdown.sss.employer_share,
                philhealth: breakdown.philhealth.employer_share,
                pagibig: breakdown.pagibig.employer_share,
                total: total_employer_contrib,
            },
            net_pay,
            total_employer_cost,
            tax_status,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.tax_status, TaxStatus::Degraded { .. })
    }

    /// Copy with every amount rounded to centavos, for display only
    pub fn rounded(&self) -> Self {
        Self {
            employee: self.employee.clone(),
            gross_pay: round_centavos(self.gross_pay),
            deductions: Deductions {
                sss: round_centavos(self.deductions.sss),
                philhealth: round_centavos(self.deductions.philhealth),
                pagibig: round_centavos(self.deductions.pagibig),
                tax: round_centavos(self.deductions.tax),
                total: round_centavos(self.deductions.total),
            },
            contributions: EmployerContributions {
                sss: round_centavos(self.contributions.sss),
                philhealth: round_centavos(self.contributions.philhealth),
                pagibig: round_centavos(self.contributions.pagibig),
                total: round_centavos(self.contributions.total),
            },
            net_pay: round_centavos(self.net_pay),
            total_employer_cost: round_centavos(self.total_employer_cost),
            tax_status: self.tax_status.clone(),
        }
    }
}
