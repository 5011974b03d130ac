use rust_decimal::Decimal;

use crate::modules::contributions::models::{
    ContributionBreakdown, ContributionSchedule, ContributionShare, PagIbigRates, PhilHealthRates,
    SssRates,
};

/// Statutory contribution rules for SSS, PhilHealth and Pag-IBIG.
///
/// Every rule is pure: same salary and rates, same shares. Amounts are
/// left unrounded; centavo rounding happens at the presentation boundary.
/// Callers must reject negative salaries before invoking these.
pub struct ContributionCalculator;

impl ContributionCalculator {
    /// Compute all three programs for one monthly salary
    pub fn calculate(salary: Decimal, schedule: &ContributionSchedule) -> ContributionBreakdown {
        ContributionBreakdown {
            sss: Self::sss(salary, &schedule.sss),
            philhealth: Self::philhealth(salary, &schedule.philhealth),
            pagibig: Self::pagibig(salary, &schedule.pagibig),
        }
    }

    /// Map a salary to its SSS Monthly Salary Credit.
    ///
    /// Clamped to [min_msc, max_msc]; in between, a salary with a remainder
    /// of at most 500 over a thousand goes to the 500 step, anything above
    /// that goes to the next thousand.
    pub fn sss_msc(salary: Decimal, rates: &SssRates) -> Decimal {
        if salary < rates.min_msc {
            return rates.min_msc;
        }
        if salary > rates.max_msc {
            return rates.max_msc;
        }

        let thousand = Decimal::ONE_THOUSAND;
        let half = Decimal::from(500);
        let remainder = salary % thousand;

        if remainder.is_zero() {
            salary
        } else if remainder <= half {
            (salary / thousand).floor() * thousand + half
        } else {
            (salary / thousand).ceil() * thousand
        }
    }

    /// SSS: MSC × fixed employee / employer rates
    pub fn sss(salary: Decimal, rates: &SssRates) -> ContributionShare {
        let msc = Self::sss_msc(salary, rates);
        ContributionShare::new(msc * rates.employee_rate, msc * rates.employer_rate)
    }

    /// PhilHealth: clamped base × rate, split evenly
    pub fn philhealth(salary: Decimal, rates: &PhilHealthRates) -> ContributionShare {
        let base = salary.clamp(rates.min_salary_base, rates.max_salary_base);
        let total = base * rates.rate;
        let half = total / Decimal::TWO;
        ContributionShare::new(half, half)
    }

    /// Pag-IBIG: ceiling on the compensation base, then each side capped on its own
    pub fn pagibig(salary: Decimal, rates: &PagIbigRates) -> ContributionShare {
        let employee_rate = if salary <= rates.low_salary_threshold {
            rates.employee_rate_low
        } else {
            rates.employee_rate_high
        };
        let base = salary.min(rates.max_compensation_base);

        let employee_share = (base * employee_rate).min(rates.share_cap);
        let employer_share = (base * rates.employer_rate).min(rates.share_cap);

        ContributionShare::new(employee_share, employer_share)
    }
}
