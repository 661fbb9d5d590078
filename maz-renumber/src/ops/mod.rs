mod raw_records;
pub mod renumber_ops;
pub mod replace_ops;
mod renumber_summary;
pub mod transform_ops;

pub use raw_records::{RawRecord, RawRecords};
pub use renumber_summary::RenumberSummary;
