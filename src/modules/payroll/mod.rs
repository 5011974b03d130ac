pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure_payroll_routes;
pub use models::{EmployeeRecord, PayrollResult, PayrollRun, TaxStatus, Totals};
pub use services::{PayrollCalculator, PayrollService, PayrollSettings};
