//! splits a CSV stream into records while keeping each record's bytes exactly
//! as read, so rows that are not rewritten can be copied through unchanged.
use csv::StringRecord;
use std::io::{self, BufRead};

/// one CSV record as it appeared in the input, terminator included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub bytes: Vec<u8>,
    /// 1-based line number the record starts on
    pub line: u64,
}

impl RawRecord {
    /// record bytes without the trailing `\n` or `\r\n`.
    pub fn content(&self) -> &[u8] {
        let end = self.bytes.len() - self.terminator().len();
        &self.bytes[..end]
    }

    /// the record's own line terminator, empty on a final line with none.
    pub fn terminator(&self) -> &[u8] {
        if self.bytes.ends_with(b"\r\n") {
            &self.bytes[self.bytes.len() - 2..]
        } else if self.bytes.ends_with(b"\n") {
            &self.bytes[self.bytes.len() - 1..]
        } else {
            &[]
        }
    }

    /// parses the record into fields. a blank record has no fields.
    pub fn fields(&self) -> Result<StringRecord, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(self.content());
        let mut record = StringRecord::new();
        reader.read_record(&mut record)?;
        Ok(record)
    }
}

/// iterates over the records of a CSV stream. a newline inside a quoted
/// field does not end the record.
pub struct RawRecords<R> {
    input: R,
    line: u64,
}

impl<R: BufRead> RawRecords<R> {
    pub fn new(input: R) -> RawRecords<R> {
        RawRecords { input, line: 0 }
    }
}

impl<R: BufRead> Iterator for RawRecords<R> {
    type Item = io::Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut bytes: Vec<u8> = Vec::new();
        let line = self.line + 1;
        loop {
            match self.input.read_until(b'\n', &mut bytes) {
                Ok(0) => break,
                Ok(_) => self.line += 1,
                Err(e) => return Some(Err(e)),
            }
            // escaped quotes come in pairs, so an odd count means an open field
            let quotes = bytes.iter().filter(|b| **b == b'"').count();
            if quotes % 2 == 0 {
                break;
            }
        }
        if bytes.is_empty() {
            None
        } else {
            Some(Ok(RawRecord { bytes, line }))
        }
    }
}
