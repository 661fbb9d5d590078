use super::RenumberError;
use csv::StringRecord;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// names of the MAZ (coarse zone) and TAZ (fine zone) columns in a table.
/// matching is exact and case-sensitive.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneColumns {
    pub coarse_zone: String,
    pub fine_zone: String,
}

/// positions of the zone columns within a header record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneColumnIndices {
    pub coarse_zone: usize,
    pub fine_zone: usize,
}

impl ZoneColumns {
    pub fn new(coarse_zone: &str, fine_zone: &str) -> ZoneColumns {
        ZoneColumns {
            coarse_zone: coarse_zone.to_string(),
            fine_zone: fine_zone.to_string(),
        }
    }

    /// column names used by the zone (land use) table.
    pub fn zone_table_default() -> ZoneColumns {
        ZoneColumns::new("MAZ", "TAZ")
    }

    /// column names used by the synthetic household table.
    pub fn household_table_default() -> ZoneColumns {
        ZoneColumns::new("maz", "taz")
    }

    /// finds both zone columns in a header. the coarse zone column is
    /// checked first. when a name repeats, the first occurrence is used.
    pub fn find_indices(
        &self,
        headers: &StringRecord,
        table: &str,
    ) -> Result<ZoneColumnIndices, RenumberError> {
        let mut lookup: HashMap<&str, usize> = HashMap::new();
        for (i, name) in headers.iter().enumerate() {
            lookup.entry(name).or_insert(i);
        }
        let find = |column: &str| {
            lookup
                .get(column)
                .copied()
                .ok_or_else(|| RenumberError::MissingColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                    found: headers.iter().join(","),
                })
        };
        Ok(ZoneColumnIndices {
            coarse_zone: find(&self.coarse_zone)?,
            fine_zone: find(&self.fine_zone)?,
        })
    }
}
