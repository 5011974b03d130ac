// Property-based tests for the statutory contribution rules
//
// Validates:
// - Every share is non-negative for any non-negative salary
// - SSS shares stay within the MSC clamps and MSC lands on a 500 step
// - PhilHealth shares stay within the salary base clamps
// - Pag-IBIG shares never exceed the per-side cap
// - Rules are deterministic

use payroll::modules::contributions::{ContributionCalculator, ContributionSchedule};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn salary_from_centavos(centavos: u64) -> Decimal {
    Decimal::new(centavos as i64, 2)
}

proptest! {
    #[test]
    fn test_all_shares_non_negative(centavos in 0u64..100_000_000u64) {
        let salary = salary_from_centavos(centavos);
        let breakdown = ContributionCalculator::calculate(salary, &ContributionSchedule::default());

        for share in [breakdown.sss, breakdown.philhealth, breakdown.pagibig] {
            prop_assert!(share.employee_share >= Decimal::ZERO);
            prop_assert!(share.employer_share >= Decimal::ZERO);
        }
    }

    #[test]
    fn test_sss_bounded_by_msc_clamps(centavos in 0u64..100_000_000u64) {
        let salary = salary_from_centavos(centavos);
        let rates = ContributionSchedule::default().sss;
        let share = ContributionCalculator::sss(salary, &rates);

        prop_assert!(share.employee_share >= rates.min_msc * rates.employee_rate);
        prop_assert!(share.employee_share <= rates.max_msc * rates.employee_rate);
        prop_assert!(share.employer_share >= rates.min_msc * rates.employer_rate);
        prop_assert!(share.employer_share <= rates.max_msc * rates.employer_rate);
    }

    #[test]
    fn test_sss_msc_is_a_500_step_not_below_salary(centavos in 400_000u64..3_000_000u64) {
        let salary = salary_from_centavos(centavos);
        let rates = ContributionSchedule::default().sss;
        let msc = ContributionCalculator::sss_msc(salary, &rates);

        prop_assert_eq!(msc % dec!(500), Decimal::ZERO, "MSC {} for salary {}", msc, salary);
        prop_assert!(msc >= salary);
        prop_assert!(msc - salary < dec!(1000));
    }

    #[test]
    fn test_philhealth_bounded_by_base_clamps(centavos in 0u64..100_000_000u64) {
        let salary = salary_from_centavos(centavos);
        let rates = ContributionSchedule::default().philhealth;
        let share = ContributionCalculator::philhealth(salary, &rates);

        prop_assert_eq!(share.employee_share, share.employer_share);
        prop_assert!(share.total() >= rates.min_salary_base * rates.rate);
        prop_assert!(share.total() <= rates.max_salary_base * rates.rate);
    }

    #[test]
    fn test_pagibig_never_exceeds_cap(centavos in 0u64..100_000_000u64) {
        let salary = salary_from_centavos(centavos);
        let share = ContributionCalculator::pagibig(salary, &ContributionSchedule::default().pagibig);

        prop_assert!(share.employee_share <= dec!(100));
        prop_assert!(share.employer_share <= dec!(100));
    }

    #[test]
    fn test_rules_are_deterministic(centavos in 0u64..100_000_000u64) {
        let salary = salary_from_centavos(centavos);
        let schedule = ContributionSchedule::default();

        prop_assert_eq!(
            ContributionCalculator::calculate(salary, &schedule),
            ContributionCalculator::calculate(salary, &schedule)
        );
    }
}

#[test]
fn test_sss_msc_reference_values() {
    let rates = ContributionSchedule::default().sss;

    assert_eq!(ContributionCalculator::sss_msc(dec!(4000), &rates), dec!(4000));
    assert_eq!(ContributionCalculator::sss_msc(dec!(30000), &rates), dec!(30000));
    assert_eq!(ContributionCalculator::sss_msc(dec!(4250), &rates), dec!(4500));
    assert_eq!(ContributionCalculator::sss_msc(dec!(4750), &rates), dec!(5000));
}

#[test]
fn test_philhealth_reference_values() {
    let rates = ContributionSchedule::default().philhealth;

    let low = ContributionCalculator::philhealth(dec!(5000), &rates);
    assert_eq!(low.employee_share, dec!(250));
    assert_eq!(low.employer_share, dec!(250));

    let mid = ContributionCalculator::philhealth(dec!(50000), &rates);
    assert_eq!(mid.employee_share, dec!(1250));
    assert_eq!(mid.employer_share, dec!(1250));
}

#[test]
fn test_pagibig_reference_values() {
    let rates = ContributionSchedule::default().pagibig;

    let low = ContributionCalculator::pagibig(dec!(1000), &rates);
    assert_eq!(low.employee_share, dec!(10));
    assert_eq!(low.employer_share, dec!(20));

    let capped = ContributionCalculator::pagibig(dec!(20000), &rates);
    assert_eq!(capped.employee_share, dec!(100));
    assert_eq!(capped.employer_share, dec!(100));
}

#[test]
fn test_alternate_regime_changes_only_rates() {
    let mut schedule = ContributionSchedule::default();
    schedule.pagibig.share_cap = dec!(200);

    let share = ContributionCalculator::pagibig(dec!(20000), &schedule.pagibig);
    assert_eq!(share.employee_share, dec!(200));
    assert_eq!(share.employer_share, dec!(200));
}
