use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle a TAZ that appears
/// on more than one row of the zone table
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateZonePolicy {
    /// the last row read wins
    #[default]
    Overwrite,
    /// abort the run
    Fail,
}
