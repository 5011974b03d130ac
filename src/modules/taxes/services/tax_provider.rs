use async_trait::async_trait;

use crate::core::Result;
use crate::modules::taxes::models::{TaxBracketTable, TaxComputation, TaxComputationRequest};

use super::tax_calculator::TaxCalculator;

/// Capability that turns a monthly salary into a withholding tax figure.
///
/// The bracket resolver is the default; remote services plug in behind
/// the same trait.
#[async_trait]
pub trait TaxProvider: Send + Sync {
    /// Compute the monthly withholding tax for one employee
    async fn compute_monthly_tax(&self, request: &TaxComputationRequest) -> Result<TaxComputation>;

    /// Provider name for logs
    fn name(&self) -> &str;

    /// Bracket table this provider computes against
    fn table(&self) -> &TaxBracketTable;
}

/// In-process provider backed by the deterministic bracket resolver
#[derive(Debug, Clone, Default)]
pub struct BracketTaxProvider {
    calculator: TaxCalculator,
}

impl BracketTaxProvider {
    pub fn new(table: TaxBracketTable) -> Self {
        Self {
            calculator: TaxCalculator::new(table),
        }
    }
}

#[async_trait]
impl TaxProvider for BracketTaxProvider {
    async fn compute_monthly_tax(&self, request: &TaxComputationRequest) -> Result<TaxComputation> {
        self.calculator.calculate_tax(request)
    }

    fn name(&self) -> &str {
        "bracket"
    }

    fn table(&self) -> &TaxBracketTable {
        self.calculator.table()
    }
}
