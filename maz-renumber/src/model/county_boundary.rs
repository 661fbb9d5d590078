use super::RenumberError;

/// MAZ ids are assigned in blocks of this many ids per county.
pub const DEFAULT_COUNTY_ZONE_WIDTH: u64 = 100_000;

/// the open interval of MAZ ids belonging to the selected county.
///
/// the test is exclusive on both ends, so an id that is an exact multiple of
/// the block width is treated as outside the county.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountyBoundary {
    pub county_code: u32,
    lower: f64,
    upper: f64,
}

impl CountyBoundary {
    pub fn new(county_code: u32, county_zone_width: u64) -> Result<CountyBoundary, RenumberError> {
        if county_code == 0 {
            return Err(RenumberError::ConfigurationError(String::from(
                "county code must be a positive integer",
            )));
        }
        if county_zone_width == 0 {
            return Err(RenumberError::ConfigurationError(String::from(
                "county_zone_width must be greater than zero",
            )));
        }
        let code = county_code as f64;
        let width = county_zone_width as f64;
        Ok(CountyBoundary {
            county_code,
            lower: (code - 1.0) * width,
            upper: code * width,
        })
    }

    /// true when the MAZ value lies strictly inside the county interval.
    pub fn contains(&self, maz: f64) -> bool {
        maz > self.lower && maz < self.upper
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}
