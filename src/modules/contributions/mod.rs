pub mod models;
pub mod services;

pub use models::{ContributionBreakdown, ContributionSchedule, ContributionShare};
pub use services::ContributionCalculator;
