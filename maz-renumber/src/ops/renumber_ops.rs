use crate::{
    config::RenumberConfiguration,
    model::{CountyBoundary, RenumberError, ZoneMap},
    ops::{replace_ops, transform_ops, RenumberSummary},
};
use std::{fs::File, path::Path};

/// collapses the MAZ of every household outside the selected county to the
/// MAZ of its TAZ, rewriting the household file in place.
///
/// the zone table is read in full before any household row. nothing is
/// written to `households_file` unless every row was renumbered.
///
/// # Arguments
///
/// * `households_file` - household table, replaced on success
/// * `zones_file` - zone table with MAZ and TAZ columns, read only
/// * `county_code` - selected county, numbered from 1
/// * `conf` - column names, county zone width and duplicate zone policy
pub fn run(
    households_file: &Path,
    zones_file: &Path,
    county_code: u32,
    conf: &RenumberConfiguration,
) -> Result<RenumberSummary, RenumberError> {
    let boundary = CountyBoundary::new(county_code, conf.county_zone_width)?;
    let (lower, upper) = boundary.bounds();
    log::info!("county {county_code} MAZ interval is ({lower}, {upper})");

    log::info!("reading zone table {}", zones_file.display());
    let zone_map = ZoneMap::try_from_path(
        zones_file,
        &conf.zone_columns,
        conf.duplicate_zone_policy,
    )?;
    if zone_map.is_empty() {
        log::warn!(
            "zone table {} has no rows, every household outside county {county_code} will fail",
            zones_file.display()
        );
    } else {
        log::info!("zone table maps {} TAZs", zone_map.len());
    }

    log::info!("renumbering households in {}", households_file.display());
    let households = File::open(households_file)?;
    let summary = replace_ops::replace_in_place(households_file, |writer| {
        transform_ops::renumber_households(
            households,
            writer,
            &zone_map,
            &boundary,
            &conf.household_columns,
        )
    })?;
    log::info!("{summary}");

    Ok(summary)
}
