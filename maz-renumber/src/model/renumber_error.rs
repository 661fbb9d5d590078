use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenumberError {
    #[error("{table} table is missing required column '{column}', found columns: {found}")]
    MissingColumn {
        table: String,
        column: String,
        found: String,
    },
    #[error("{table} table row {row}: column '{column}' has non-numeric value '{value}'")]
    ParseError {
        table: String,
        row: u64,
        column: String,
        value: String,
    },
    #[error("household row {row}: {column} '{value}' not found in zone table")]
    MissingZone {
        row: u64,
        column: String,
        value: String,
    },
    #[error("household row {row}: found {found} fields, header has {expected}")]
    FieldCount {
        row: u64,
        expected: usize,
        found: usize,
    },
    #[error("zone table row {row}: duplicate {column} {zone_id} (previously mapped to {previous}, now {current})")]
    DuplicateZone {
        row: u64,
        column: String,
        zone_id: i64,
        previous: i64,
        current: i64,
    },
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure replacing {path}: {source}")]
    PersistError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure reading or writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
