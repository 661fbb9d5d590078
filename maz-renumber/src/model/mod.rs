mod county_boundary;
mod duplicate_zone_policy;
mod renumber_error;
mod zone_columns;
pub mod zone_id;
mod zone_map;

pub use county_boundary::{CountyBoundary, DEFAULT_COUNTY_ZONE_WIDTH};
pub use duplicate_zone_policy::DuplicateZonePolicy;
pub use renumber_error::RenumberError;
pub use zone_columns::{ZoneColumnIndices, ZoneColumns};
pub use zone_map::ZoneMap;
