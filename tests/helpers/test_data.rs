// Test Data Factory
//
// Roster fixtures and tolerance helpers.

use payroll::modules::payroll::models::{EmployeeRecord, Totals};
use rust_decimal::Decimal;
use serde_json::{json, Value};

/// Test data factory for payroll rosters
pub struct TestDataFactory;

impl TestDataFactory {
    /// Four-employee roster spanning the first four tax brackets
    pub fn sample_roster() -> Vec<EmployeeRecord> {
        vec![
            EmployeeRecord::new(1, "Juan Dela Cruz", Decimal::from(25_000)),
            EmployeeRecord::new(2, "Maria Clara", Decimal::from(45_000)),
            EmployeeRecord::new(3, "Andres Bonifacio", Decimal::from(70_000)),
            EmployeeRecord::new(4, "Jose Rizal", Decimal::from(120_000)),
        ]
    }

    /// Roster built from salaries in centavos, ids starting at 1
    pub fn roster_from_centavos(centavos: &[u64]) -> Vec<EmployeeRecord> {
        centavos
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                EmployeeRecord::new(
                    i as u64 + 1,
                    format!("Employee {}", i + 1),
                    Decimal::new(c as i64, 2),
                )
            })
            .collect()
    }

    /// JSON body for POST /payroll/run
    pub fn run_payload(round: bool) -> Value {
        json!({
            "employees": [
                { "id": 1, "name": "Juan Dela Cruz", "monthly_salary": 25000 },
                { "id": 2, "name": "Maria Clara", "monthly_salary": 45000 },
                { "id": 3, "name": "Andres Bonifacio", "monthly_salary": 70000 },
                { "id": 4, "name": "Jose Rizal", "monthly_salary": 120000 }
            ],
            "round": round
        })
    }
}

/// Maximum drift allowed when summing the same amounts in another order
pub fn summation_tolerance() -> Decimal {
    Decimal::new(1, 12)
}

/// Assert two totals match field by field within the summation tolerance
pub fn assert_totals_close(a: &Totals, b: &Totals) {
    let tol = summation_tolerance();
    let pairs = [
        ("gross_pay", a.gross_pay, b.gross_pay),
        ("net_pay", a.net_pay, b.net_pay),
        ("tax", a.tax, b.tax),
        ("sss.ee", a.sss.employee_share, b.sss.employee_share),
        ("sss.er", a.sss.employer_share, b.sss.employer_share),
        ("philhealth.ee", a.philhealth.employee_share, b.philhealth.employee_share),
        ("philhealth.er", a.philhealth.employer_share, b.philhealth.employer_share),
        ("pagibig.ee", a.pagibig.employee_share, b.pagibig.employee_share),
        ("pagibig.er", a.pagibig.employer_share, b.pagibig.employer_share),
    ];

    for (name, left, right) in pairs {
        assert!(
            (left - right).abs() <= tol,
            "{} differs: {} vs {}",
            name,
            left,
            right
        );
    }
    assert_eq!(a.employee_count, b.employee_count);
    assert_eq!(a.degraded_count, b.degraded_count);
}
