use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{round_centavos, AppError, Result};
use crate::modules::contributions::ContributionShare;

use super::payroll_result::PayrollResult;

/// Organization-wide sums for one payroll run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub gross_pay: Decimal,
    pub net_pay: Decimal,
    pub sss: ContributionShare,
    pub philhealth: ContributionShare,
    pub pagibig: ContributionShare,
    pub tax: Decimal,
    pub employee_count: usize,
    pub degraded_count: usize,
}

impl Totals {
    /// Totals of a single result, used as a partial before merging
    pub fn of(result: &PayrollResult) -> Self {
        Self {
            gross_pay: result.gross_pay,
            net_pay: result.net_pay,
            sss: ContributionShare::new(result.deductions.sss, result.contributions.sss),
            philhealth: ContributionShare::new(
                result.deductions.philhealth,
                result.contributions.philhealth,
            ),
            pagibig: ContributionShare::new(result.deductions.pagibig, result.contributions.pagibig),
            tax: result.deductions.tax,
            employee_count: 1,
            degraded_count: usize::from(result.is_degraded()),
        }
    }

    /// Field-wise summation over results, in iteration order
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a PayrollResult>) -> Self {
        results
            .into_iter()
            .fold(Self::default(), |acc, result| acc.merge(&Self::of(result)))
    }

    /// Combine two partial totals
    pub fn merge(mut self, other: &Totals) -> Self {
        self.gross_pay += other.gross_pay;
        self.net_pay += other.net_pay;
        self.sss += other.sss;
        self.philhealth += other.philhealth;
        self.pagibig += other.pagibig;
        self.tax += other.tax;
        self.employee_count += other.employee_count;
        self.degraded_count += other.degraded_count;
        self
    }

    /// Employee shares of all programs plus withholding tax
    pub fn total_employee_deductions(&self) -> Decimal {
        self.sss.employee_share
            + self.philhealth.employee_share
            + self.pagibig.employee_share
            + self.tax
    }

    pub fn total_employer_contributions(&self) -> Decimal {
        self.sss.employer_share + self.philhealth.employer_share + self.pagibig.employer_share
    }

    /// Gross pay plus employer contributions
    pub fn total_payroll_cost(&self) -> Decimal {
        self.gross_pay + self.total_employer_contributions()
    }

    /// Check these totals against a fresh summation of the results.
    ///
    /// A mismatch is a logic bug, never a user error.
    pub fn reconcile(&self, results: &[PayrollResult]) -> Result<()> {
        let expected = Self::from_results(results);
        if *self != expected {
            return Err(AppError::AggregationInconsistency(format!(
                "totals net pay {} over {} employees, results sum to {} over {}",
                self.net_pay, self.employee_count, expected.net_pay, expected.employee_count
            )));
        }
        Ok(())
    }

    /// Copy with every amount rounded to centavos, for display only
    pub fn rounded(&self) -> Self {
        let share = |s: ContributionShare| {
            ContributionShare::new(round_centavos(s.employee_share), round_centavos(s.employer_share))
        };
        Self {
            gross_pay: round_centavos(self.gross_pay),
            net_pay: round_centavos(self.net_pay),
            sss: share(self.sss),
            philhealth: share(self.philhealth),
            pagibig: share(self.pagibig),
            tax: round_centavos(self.tax),
            employee_count: self.employee_count,
            degraded_count: self.degraded_count,
        }
    }
}

/// Dashboard figures derived from [`Totals`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    pub total_employee_deductions: Decimal,
    pub total_employer_contributions: Decimal,
    pub total_payroll_cost: Decimal,
    pub sss_remittance: Decimal,
    pub philhealth_remittance: Decimal,
    pub pagibig_remittance: Decimal,
}

impl From<&Totals> for PayrollSummary {
    fn from(totals: &Totals) -> Self {
        Self {
            total_employee_deductions: totals.total_employee_deductions(),
            total_employer_contributions: totals.total_employer_contributions(),
            total_payroll_cost: totals.total_payroll_cost(),
            sss_remittance: totals.sss.total(),
            philhealth_remittance: totals.philhealth.total(),
            pagibig_remittance: totals.pagibig.total(),
        }
    }
}
