use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::contributions::ContributionSchedule;
use crate::modules::taxes::TaxBracketTable;

/// Complete rate regime: contribution schedule plus withholding brackets.
///
/// Loaded from YAML so a new legislated schedule is a file swap.
/// The bracket table is validated while deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    #[serde(default)]
    pub contributions: ContributionSchedule,
    #[serde(default)]
    pub tax_brackets: TaxBracketTable,
}

impl RateSchedule {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let schedule: RateSchedule = serde_yaml::from_str(yaml)?;
        schedule.contributions.validate()?;
        Ok(schedule)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::configuration(format!(
                "Failed to read rate schedule {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!(path = %path.display(), "Loading rate schedule");
        Self::from_yaml_str(&contents)
    }
}
