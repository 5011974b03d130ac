use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{format_peso, max_amount, AppError, Result};

/// One employee on the payroll roster. Read-only input to a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: u64,
    pub name: String,
    pub monthly_salary: Decimal,
}

impl EmployeeRecord {
    pub fn new(id: u64, name: impl Into<String>, monthly_salary: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            monthly_salary,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input(format!(
                "Employee {} has an empty name",
                self.id
            )));
        }

        if self.monthly_salary < Decimal::ZERO {
            return Err(AppError::invalid_input(format!(
                "Employee {} has a negative monthly salary: {}",
                self.id, self.monthly_salary
            )));
        }

        if self.monthly_salary > max_amount() {
            return Err(AppError::invalid_input(format!(
                "Employee {} monthly salary {} exceeds the maximum of {}",
                self.id,
                self.monthly_salary,
                format_peso(max_amount())
            )));
        }

        Ok(())
    }
}

/// Validate every record and reject duplicate identifiers.
///
/// Runs before any calculation so a bad roster produces no partial output.
pub fn validate_roster(employees: &[EmployeeRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(employees.len());

    for employee in employees {
        employee.validate()?;

        if !seen.insert(employee.id) {
            return Err(AppError::invalid_input(format!(
                "Duplicate employee id {}",
                employee.id
            )));
        }
    }

    Ok(())
}
