use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// One row of a progressive annual income tax schedule.
///
/// The upper bound is implicit: the next bracket's lower bound, or
/// unbounded for the last row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Annual income at which this bracket opens ("over X")
    pub lower_bound: Decimal,
    /// Rate applied to the excess over `lower_bound` (0.15 for 15%)
    pub marginal_rate: Decimal,
    /// Cumulative tax owed at exactly `lower_bound`
    pub tax_on_base: Decimal,
}

impl TaxBracket {
    pub fn new(lower_bound: Decimal, marginal_rate: Decimal, tax_on_base: Decimal) -> Self {
        Self {
            lower_bound,
            marginal_rate,
            tax_on_base,
        }
    }

    /// Annual tax for an income that falls inside this bracket
    pub fn annual_tax(&self, annual_income: Decimal) -> Decimal {
        self.tax_on_base + (annual_income - self.lower_bound) * self.marginal_rate
    }
}

/// Validated, ordered bracket schedule covering [0, ∞).
///
/// Construction is the only place the table is checked; lookups trust it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct TaxBracketTable {
    brackets: Vec<TaxBracket>,
}

impl TaxBracketTable {
    /// Build a table, rejecting gaps, overlaps, bad rates and a
    /// `tax_on_base` that disagrees with the brackets below it
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self> {
        let first = brackets
            .first()
            .ok_or_else(|| AppError::invalid_input("Tax bracket table cannot be empty"))?;

        if !first.lower_bound.is_zero() {
            return Err(AppError::invalid_input(format!(
                "First tax bracket must start at 0, got {}",
                first.lower_bound
            )));
        }

        for (i, bracket) in brackets.iter().enumerate() {
            if bracket.marginal_rate < Decimal::ZERO || bracket.marginal_rate > Decimal::ONE {
                return Err(AppError::invalid_input(format!(
                    "Bracket {} marginal rate must be between 0 and 1, got {}",
                    i, bracket.marginal_rate
                )));
            }
            if bracket.tax_on_base < Decimal::ZERO {
                return Err(AppError::invalid_input(format!(
                    "Bracket {} tax on base cannot be negative, got {}",
                    i, bracket.tax_on_base
                )));
            }
        }

        for (i, pair) in brackets.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);

            if next.lower_bound <= prev.lower_bound {
                return Err(AppError::invalid_input(format!(
                    "Tax brackets must be sorted ascending: bracket {} starts at {} after {}",
                    i + 1,
                    next.lower_bound,
                    prev.lower_bound
                )));
            }

            let expected = prev.annual_tax(next.lower_bound);
            if next.tax_on_base != expected {
                return Err(AppError::invalid_input(format!(
                    "Bracket {} tax on base is {} but the brackets below it accumulate {}",
                    i + 1,
                    next.tax_on_base,
                    expected
                )));
            }
        }

        Ok(Self { brackets })
    }

    /// Parse and validate a JSON array of brackets
    pub fn from_json(json: &str) -> Result<Self> {
        let brackets: Vec<TaxBracket> = serde_json::from_str(json)
            .map_err(|e| AppError::invalid_input(format!("Invalid tax table format: {}", e)))?;
        Self::new(brackets)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.brackets)?)
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Find the bracket an annual income falls in.
    ///
    /// An income exactly on a boundary belongs to the bracket that opens there.
    pub fn bracket_for(&self, annual_income: Decimal) -> &TaxBracket {
        self.brackets
            .iter()
            .rev()
            .find(|b| b.lower_bound <= annual_income)
            .unwrap_or(&self.brackets[0])
    }

    /// BIR revised withholding tax table effective 2023-01-01 (RA 10963)
    pub fn bir_2023() -> Self {
        let rows = [
            (0, 0, 0),
            (250_000, 15, 0),
            (400_000, 20, 22_500),
            (800_000, 25, 102_500),
            (2_000_000, 30, 402_500),
            (8_000_000, 35, 2_202_500),
        ];

        Self {
            brackets: rows
                .iter()
                .map(|&(lower, rate_pct, base)| {
                    TaxBracket::new(
                        Decimal::from(lower),
                        Decimal::new(rate_pct, 2),
                        Decimal::from(base),
                    )
                })
                .collect(),
        }
    }
}

impl Default for TaxBracketTable {
    fn default() -> Self {
        Self::bir_2023()
    }
}

impl TryFrom<Vec<TaxBracket>> for TaxBracketTable {
    type Error = AppError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self> {
        Self::new(brackets)
    }
}

impl From<TaxBracketTable> for Vec<TaxBracket> {
    fn from(table: TaxBracketTable) -> Self {
        table.brackets
    }
}
