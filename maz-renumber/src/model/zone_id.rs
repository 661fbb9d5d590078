//! checked numeric parsing of zone identifier fields.
//!
//! zone table identifiers must be integers. household fields only need to be
//! numeric, since household files produced by upstream synthesizers may carry
//! zone ids with a trailing `.0`.
use super::RenumberError;

/// identifies where a field came from, used to build parse errors.
#[derive(Clone, Copy, Debug)]
pub struct FieldSource<'a> {
    pub table: &'a str,
    pub column: &'a str,
    pub row: u64,
}

impl FieldSource<'_> {
    fn parse_error(&self, value: &str) -> RenumberError {
        RenumberError::ParseError {
            table: self.table.to_string(),
            row: self.row,
            column: self.column.to_string(),
            value: value.to_string(),
        }
    }
}

/// parses a zone table field as an integer zone id.
pub fn parse_zone_id(value: &str, source: FieldSource) -> Result<i64, RenumberError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| source.parse_error(value))
}

/// parses a household field as a number. NaN and infinite values are rejected.
pub fn parse_zone_value(value: &str, source: FieldSource) -> Result<f64, RenumberError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(source.parse_error(value)),
    }
}

/// converts a parsed household value into a lookup key. values with a
/// fractional part have no integer key and return None.
pub fn as_zone_key(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
