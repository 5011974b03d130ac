pub mod employee;
pub mod payroll_result;
pub mod payroll_run;
pub mod totals;

pub use employee::{validate_roster, EmployeeRecord};
pub use payroll_result::{Deductions, EmployerContributions, PayrollResult, TaxStatus};
pub use payroll_run::PayrollRun;
pub use totals::{PayrollSummary, Totals};
