use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee / employer split of one program's contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContributionShare {
    #[serde(rename = "ee")]
    pub employee_share: Decimal,
    #[serde(rename = "er")]
    pub employer_share: Decimal,
}

impl ContributionShare {
    pub fn new(employee_share: Decimal, employer_share: Decimal) -> Self {
        Self {
            employee_share,
            employer_share,
        }
    }

    /// Combined remittance for the program (ee + er)
    pub fn total(&self) -> Decimal {
        self.employee_share + self.employer_share
    }
}

impl std::ops::Add for ContributionShare {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            employee_share: self.employee_share + rhs.employee_share,
            employer_share: self.employer_share + rhs.employer_share,
        }
    }
}

impl std::ops::AddAssign for ContributionShare {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// The three statutory contributions computed for one salary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBreakdown {
    pub sss: ContributionShare,
    pub philhealth: ContributionShare,
    pub pagibig: ContributionShare,
}

impl ContributionBreakdown {
    pub fn employee_total(&self) -> Decimal {
        self.sss.employee_share + self.philhealth.employee_share + self.pagibig.employee_share
    }

    pub fn employer_total(&self) -> Decimal {
        self.sss.employer_share + self.philhealth.employer_share + self.pagibig.employer_share
    }
}
