use crate::model::{DuplicateZonePolicy, RenumberError, ZoneColumns, DEFAULT_COUNTY_ZONE_WIDTH};
use serde::{Deserialize, Serialize};

/// defines behaviors for a household MAZ renumbering run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct RenumberConfiguration {
    /// MAZ and TAZ column names in the zone table
    pub zone_columns: ZoneColumns,
    /// MAZ and TAZ column names in the household table
    pub household_columns: ZoneColumns,
    /// number of MAZ ids reserved for each county
    pub county_zone_width: u64,
    pub duplicate_zone_policy: DuplicateZonePolicy,
}

impl Default for RenumberConfiguration {
    fn default() -> Self {
        Self {
            zone_columns: ZoneColumns::zone_table_default(),
            household_columns: ZoneColumns::household_table_default(),
            county_zone_width: DEFAULT_COUNTY_ZONE_WIDTH,
            duplicate_zone_policy: DuplicateZonePolicy::default(),
        }
    }
}

impl RenumberConfiguration {
    fn validate(self) -> Result<Self, RenumberError> {
        if self.county_zone_width == 0 {
            return Err(RenumberError::ConfigurationError(String::from(
                "county_zone_width must be greater than zero",
            )));
        }
        Ok(self)
    }
}

impl TryFrom<&String> for RenumberConfiguration {
    type Error = RenumberError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: RenumberConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                RenumberError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                RenumberError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                RenumberError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                RenumberError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(RenumberError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()
    }
}
