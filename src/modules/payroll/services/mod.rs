pub mod payroll_calculator;
pub mod payroll_service;

pub use payroll_calculator::PayrollCalculator;
pub use payroll_service::{PayrollService, PayrollSettings};
