pub mod contribution_schedule;
pub mod contribution_share;

pub use contribution_schedule::{ContributionSchedule, PagIbigRates, PhilHealthRates, SssRates};
pub use contribution_share::{ContributionBreakdown, ContributionShare};
