pub mod contributions;
pub mod health;
pub mod payroll;
pub mod taxes;
