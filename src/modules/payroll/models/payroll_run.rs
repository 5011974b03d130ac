use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payroll_result::PayrollResult;
use super::totals::{PayrollSummary, Totals};

/// Output of one payroll run, handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRun {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// One entry per employee, in roster order
    pub results: Vec<PayrollResult>,
    pub totals: Totals,
    pub summary: PayrollSummary,
}

impl PayrollRun {
    pub fn new(results: Vec<PayrollResult>, totals: Totals) -> Self {
        let summary = PayrollSummary::from(&totals);
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            results,
            totals,
            summary,
        }
    }

    pub fn degraded_results(&self) -> impl Iterator<Item = &PayrollResult> {
        self.results.iter().filter(|r| r.is_degraded())
    }

    /// Round every amount to centavos for display.
    ///
    /// Totals are rounded independently of the rows, so rounded rows may
    /// not sum exactly to the rounded totals.
    pub fn rounded(&self) -> Self {
        let totals = self.totals.rounded();
        Self {
            run_id: self.run_id,
            generated_at: self.generated_at,
            results: self.results.iter().map(PayrollResult::rounded).collect(),
            summary: PayrollSummary::from(&totals),
            totals,
        }
    }
}
