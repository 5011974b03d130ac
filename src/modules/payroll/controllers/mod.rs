pub mod payroll_controller;

pub use payroll_controller::{configure_payroll_routes, run_payroll, RunPayrollRequest};
