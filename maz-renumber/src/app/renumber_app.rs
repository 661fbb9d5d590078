use crate::{
    config::RenumberConfiguration,
    model::{DuplicateZonePolicy, RenumberError},
    ops::{renumber_ops, RenumberSummary},
};
use clap::{value_parser, Parser};
use std::path::Path;

/// renumbers household MAZs outside the selected county to the MAZ of
/// the household's TAZ. the household file is rewritten in place.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct RenumberApp {
    /// household table (CSV with header), rewritten in place
    pub households_file: String,
    /// zone table (CSV with header) mapping each TAZ to its collapsed MAZ
    pub zones_file: String,
    /// selected county, whose households keep their MAZ
    #[arg(value_parser = value_parser!(u32).range(1..))]
    pub county_code: u32,
    #[arg(long, help = "path to .toml or .json file with renumbering parameters")]
    pub configuration_file: Option<String>,
    /// how to handle a TAZ listed more than once in the zone table.
    /// overrides the configuration file
    #[arg(long, value_enum)]
    pub duplicate_zone_policy: Option<DuplicateZonePolicy>,
    /// number of MAZ ids reserved per county. overrides the configuration file
    #[arg(long)]
    pub county_zone_width: Option<u64>,
}

impl RenumberApp {
    /// loads the configuration file, if any, and applies command line overrides.
    pub fn configuration(&self) -> Result<RenumberConfiguration, RenumberError> {
        let mut conf = match &self.configuration_file {
            None => RenumberConfiguration::default(),
            Some(f) => {
                log::info!("reading renumber configuration from {f}");
                RenumberConfiguration::try_from(f)?
            }
        };
        if let Some(policy) = self.duplicate_zone_policy {
            conf.duplicate_zone_policy = policy;
        }
        if let Some(width) = self.county_zone_width {
            conf.county_zone_width = width;
        }
        log::debug!("{conf:?}");
        Ok(conf)
    }

    pub fn run(&self) -> Result<RenumberSummary, RenumberError> {
        let conf = self.configuration()?;
        renumber_ops::run(
            Path::new(&self.households_file),
            Path::new(&self.zones_file),
            self.county_code,
            &conf,
        )
    }
}
