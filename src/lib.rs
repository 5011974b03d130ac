//! Philippine payroll deduction library
//!
//! Computes SSS, PhilHealth and Pag-IBIG contributions, BIR withholding tax
//! and net pay for a roster of employees, with organization-wide totals.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::contributions;
pub use modules::payroll;
pub use modules::taxes;
