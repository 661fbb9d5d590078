use super::{
    zone_id::{self, FieldSource},
    DuplicateZonePolicy, RenumberError, ZoneColumns,
};
use kdam::tqdm;
use std::{collections::HashMap, fs::File, io::Read, path::Path};

pub const ZONE_TABLE: &str = "zone";

/// lookup from TAZ to the MAZ a household in that TAZ collapses to.
/// built once from the zone table and never modified.
///
/// TAZs inside the selected county still get entries even though their MAZs
/// were never collapsed; those entries are never read because households in
/// the selected county pass through untouched.
#[derive(Clone, Debug)]
pub struct ZoneMap {
    lookup: HashMap<i64, i64>,
}

impl ZoneMap {
    /// reads a zone table from a file on disk. the file is closed before
    /// this returns.
    pub fn try_from_path(
        path: &Path,
        columns: &ZoneColumns,
        policy: DuplicateZonePolicy,
    ) -> Result<ZoneMap, RenumberError> {
        let file = File::open(path)?;
        ZoneMap::try_from_csv(file, columns, policy)
    }

    /// reads every row of a comma-delimited zone table with a header, mapping
    /// the fine zone column to the coarse zone column.
    pub fn try_from_csv<R: Read>(
        reader: R,
        columns: &ZoneColumns,
        policy: DuplicateZonePolicy,
    ) -> Result<ZoneMap, RenumberError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        let idx = columns.find_indices(&headers, ZONE_TABLE)?;
        log::debug!(
            "zone table columns: {}={}, {}={}",
            columns.coarse_zone,
            idx.coarse_zone,
            columns.fine_zone,
            idx.fine_zone
        );

        let mut lookup: HashMap<i64, i64> = HashMap::new();
        let row_iter = tqdm!(reader.records(), desc = "read zone table");
        for record in row_iter {
            let record = record?;
            let row = record.position().map(|p| p.line()).unwrap_or_default();
            let maz_src = FieldSource {
                table: ZONE_TABLE,
                column: &columns.coarse_zone,
                row,
            };
            let taz_src = FieldSource {
                table: ZONE_TABLE,
                column: &columns.fine_zone,
                row,
            };
            let maz = zone_id::parse_zone_id(field(&record, idx.coarse_zone), maz_src)?;
            let taz = zone_id::parse_zone_id(field(&record, idx.fine_zone), taz_src)?;

            if let Some(previous) = lookup.insert(taz, maz) {
                if previous != maz {
                    match policy {
                        DuplicateZonePolicy::Overwrite => log::warn!(
                            "zone table row {row}: {} {taz} remapped from {previous} to {maz}",
                            columns.fine_zone
                        ),
                        DuplicateZonePolicy::Fail => {
                            return Err(RenumberError::DuplicateZone {
                                row,
                                column: columns.fine_zone.clone(),
                                zone_id: taz,
                                previous,
                                current: maz,
                            })
                        }
                    }
                }
            }
        }
        eprintln!();

        Ok(ZoneMap { lookup })
    }

    pub fn get(&self, fine_zone: i64) -> Option<i64> {
        self.lookup.get(&fine_zone).copied()
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

/// csv::Reader enforces equal field counts, so indices found in the header
/// are always present in the record.
fn field(record: &csv::StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default()
}

#[cfg(test)]
impl FromIterator<(i64, i64)> for ZoneMap {
    fn from_iter<T: IntoIterator<Item = (i64, i64)>>(iter: T) -> Self {
        ZoneMap {
            lookup: iter.into_iter().collect(),
        }
    }
}
