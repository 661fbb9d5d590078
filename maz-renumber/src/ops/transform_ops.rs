use crate::model::{
    zone_id::{self, FieldSource},
    CountyBoundary, RenumberError, ZoneColumns, ZoneMap,
};
use crate::ops::{RawRecords, RenumberSummary};
use csv::{QuoteStyle, StringRecord, Terminator};
use kdam::tqdm;
use std::io::{BufReader, Read, Write};

pub const HOUSEHOLD_TABLE: &str = "household";

/// rewrites the MAZ of every household outside the selected county with the
/// MAZ its TAZ collapses to, streaming from `reader` to `writer`.
///
/// the header line and every household inside the county are copied
/// byte-for-byte. collapsed rows are written with minimal quoting and keep
/// their own line terminator. row order and count are preserved, and the
/// first failing row aborts the pass.
///
/// # Arguments
///
/// * `reader` - comma-delimited household table with a header
/// * `writer` - destination for the renumbered table
/// * `zone_map` - TAZ to collapsed MAZ lookup
/// * `boundary` - MAZ interval of the selected county
/// * `columns` - MAZ and TAZ column names in the household table
pub fn renumber_households<R: Read, W: Write>(
    reader: R,
    writer: &mut W,
    zone_map: &ZoneMap,
    boundary: &CountyBoundary,
    columns: &ZoneColumns,
) -> Result<RenumberSummary, RenumberError> {
    let mut records = RawRecords::new(BufReader::new(reader));
    let headers = match records.next() {
        Some(header) => {
            let header = header?;
            writer.write_all(&header.bytes)?;
            header.fields()?
        }
        None => StringRecord::new(),
    };
    let idx = columns.find_indices(&headers, HOUSEHOLD_TABLE)?;
    log::debug!(
        "household table columns: {}={}, {}={}",
        columns.coarse_zone,
        idx.coarse_zone,
        columns.fine_zone,
        idx.fine_zone
    );

    let mut summary = RenumberSummary::default();
    let row_iter = tqdm!(records, desc = "renumber households");
    for raw in row_iter {
        let raw = raw?;
        let row = raw.line;
        let record = raw.fields()?;
        if record.len() != headers.len() {
            return Err(RenumberError::FieldCount {
                row,
                expected: headers.len(),
                found: record.len(),
            });
        }
        let maz_text = record.get(idx.coarse_zone).unwrap_or_default();
        let maz_src = FieldSource {
            table: HOUSEHOLD_TABLE,
            column: &columns.coarse_zone,
            row,
        };
        let maz = zone_id::parse_zone_value(maz_text, maz_src)?;

        if boundary.contains(maz) {
            writer.write_all(&raw.bytes)?;
            summary.passed_through += 1;
        } else {
            let taz_text = record.get(idx.fine_zone).unwrap_or_default();
            let taz_src = FieldSource {
                table: HOUSEHOLD_TABLE,
                column: &columns.fine_zone,
                row,
            };
            let taz = zone_id::parse_zone_value(taz_text, taz_src)?;
            let collapsed_maz = zone_id::as_zone_key(taz)
                .and_then(|key| zone_map.get(key))
                .ok_or_else(|| RenumberError::MissingZone {
                    row,
                    column: columns.fine_zone.clone(),
                    value: taz_text.to_string(),
                })?;
            let collapsed_text = collapsed_maz.to_string();
            let mut collapsed = StringRecord::with_capacity(record.as_slice().len(), record.len());
            for (i, value) in record.iter().enumerate() {
                if i == idx.coarse_zone {
                    collapsed.push_field(&collapsed_text);
                } else {
                    collapsed.push_field(value);
                }
            }
            writer.write_all(&serialize_fields(&collapsed)?)?;
            writer.write_all(raw.terminator())?;
            summary.collapsed += 1;
        }
        summary.rows += 1;
    }
    eprintln!();
    writer.flush()?;

    Ok(summary)
}

/// writes a record with minimal quoting and no line terminator.
fn serialize_fields(record: &StringRecord) -> Result<Vec<u8>, RenumberError> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    out.write_record(record)?;
    let mut bytes = out.into_inner().map_err(|e| e.into_error())?;
    bytes.pop();
    Ok(bytes)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::DEFAULT_COUNTY_ZONE_WIDTH;

    fn zone_map() -> ZoneMap {
        ZoneMap::from_iter([(501, 205), (502, 206)])
    }

    fn run(input: &str, county_code: u32) -> Result<(String, RenumberSummary), RenumberError> {
        let boundary = CountyBoundary::new(county_code, DEFAULT_COUNTY_ZONE_WIDTH)?;
        let mut out: Vec<u8> = Vec::new();
        let summary = renumber_households(
            input.as_bytes(),
            &mut out,
            &zone_map(),
            &boundary,
            &ZoneColumns::household_table_default(),
        )?;
        Ok((String::from_utf8(out).unwrap(), summary))
    }

    #[test]
    fn test_inside_county_unchanged() {
        let input = "hhid,maz,taz,persons\n1,850300,501,3\n";
        let (out, summary) = run(input, 9).unwrap();
        assert_eq!(out, input);
        assert_eq!(summary.passed_through, 1);
        assert_eq!(summary.collapsed, 0);
    }

    #[test]
    fn test_inside_county_keeps_raw_bytes() {
        let input = "hhid,maz,taz,name\n1,850300,501,\"Jones\"\n2,\"850301\", 501 ,x\r\n";
        let (out, _) = run(input, 9).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_missing_final_newline_not_added() {
        let (out, _) = run("hhid,maz,taz\n1,850300,501", 9).unwrap();
        assert_eq!(out, "hhid,maz,taz\n1,850300,501");
        let (out, _) = run("hhid,maz,taz\n1,120450,501", 9).unwrap();
        assert_eq!(out, "hhid,maz,taz\n1,205,501");
    }

    #[test]
    fn test_outside_county_collapsed() {
        let input = "hhid,maz,taz,persons\n2,120450,501,1\n";
        let (out, summary) = run(input, 9).unwrap();
        assert_eq!(out, "hhid,maz,taz,persons\n2,205,501,1\n");
        assert_eq!(summary.collapsed, 1);
    }

    #[test]
    fn test_boundary_value_is_collapsed() {
        let input = "hhid,maz,taz\n3,800000,502\n4,900000,501\n";
        let (out, summary) = run(input, 9).unwrap();
        assert_eq!(out, "hhid,maz,taz\n3,206,502\n4,205,501\n");
        assert_eq!(summary.collapsed, 2);
    }

    #[test]
    fn test_mixed_rows_keep_order_and_header() {
        let input = "HHID,maz,taz,name\n\
                     1,850300,501,\"Smith, J\"\n\
                     2,120450,501,\"Jones, K\"\n\
                     3,899999.0,502,Lee\n\
                     4,100001,502.0,Kim\n";
        let (out, summary) = run(input, 9).unwrap();
        let expected = "HHID,maz,taz,name\n\
                        1,850300,501,\"Smith, J\"\n\
                        2,205,501,\"Jones, K\"\n\
                        3,899999.0,502,Lee\n\
                        4,206,502.0,Kim\n";
        assert_eq!(out, expected);
        assert_eq!(
            summary,
            RenumberSummary {
                rows: 4,
                passed_through: 2,
                collapsed: 2
            }
        );
    }

    #[test]
    fn test_row_line_endings_preserved() {
        let input = "hhid,maz,taz\r\n1,850300,501\n2,120450,502\r\n3,120450,501\n";
        let (out, _) = run(input, 9).unwrap();
        assert_eq!(out, "hhid,maz,taz\r\n1,850300,501\n2,206,502\r\n3,205,501\n");
    }

    #[test]
    fn test_quoted_newline_in_field() {
        let input = "hhid,maz,taz,note\n1,850300,501,\"a\nb\"\n2,120450,502,\"c\nd\"\n";
        let (out, summary) = run(input, 9).unwrap();
        assert_eq!(
            out,
            "hhid,maz,taz,note\n1,850300,501,\"a\nb\"\n2,206,502,\"c\nd\"\n"
        );
        assert_eq!(summary.rows, 2);
    }

    #[test]
    fn test_header_only() {
        let (out, summary) = run("hhid,maz,taz\n", 9).unwrap();
        assert_eq!(out, "hhid,maz,taz\n");
        assert_eq!(summary.rows, 0);
    }

    #[test]
    fn test_empty_input_is_missing_column() {
        assert!(matches!(
            run("", 9),
            Err(RenumberError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_missing_zone() {
        match run("hhid,maz,taz\n1,850300,999\n2,120450,999\n", 9) {
            Err(RenumberError::MissingZone { row, value, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "999");
            }
            other => panic!("expected MissingZone, found {other:?}"),
        }
    }

    #[test]
    fn test_fractional_taz_is_missing_zone() {
        assert!(matches!(
            run("hhid,maz,taz\n1,120450,501.5\n", 9),
            Err(RenumberError::MissingZone { .. })
        ));
    }

    #[test]
    fn test_non_numeric_maz() {
        match run("hhid,maz,taz\n1,abc,501\n", 9) {
            Err(RenumberError::ParseError { table, column, .. }) => {
                assert_eq!(table, HOUSEHOLD_TABLE);
                assert_eq!(column, "maz");
            }
            other => panic!("expected ParseError, found {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_taz_only_checked_outside_county() {
        assert!(run("hhid,maz,taz\n1,850300,abc\n", 9).is_ok());
        match run("hhid,maz,taz\n1,120450,abc\n", 9) {
            Err(RenumberError::ParseError { column, .. }) => assert_eq!(column, "taz"),
            other => panic!("expected ParseError, found {other:?}"),
        }
    }

    #[test]
    fn test_missing_household_column() {
        match run("hhid,MAZ,taz\n1,850300,501\n", 9) {
            Err(RenumberError::MissingColumn { table, column, .. }) => {
                assert_eq!(table, HOUSEHOLD_TABLE);
                assert_eq!(column, "maz");
            }
            other => panic!("expected MissingColumn, found {other:?}"),
        }
    }

    #[test]
    fn test_padded_header_name_is_missing_column() {
        match run("hhid, maz ,taz\n1,850300,501\n", 9) {
            Err(RenumberError::MissingColumn { column, found, .. }) => {
                assert_eq!(column, "maz");
                assert_eq!(found, "hhid, maz ,taz");
            }
            other => panic!("expected MissingColumn, found {other:?}"),
        }
    }

    #[test]
    fn test_short_row_fails() {
        match run("hhid,maz,taz\n1,850300\n", 9) {
            Err(RenumberError::FieldCount {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected FieldCount, found {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_fails() {
        match run("hhid,maz,taz\n1,850300,501\n\n2,850301,501\n", 9) {
            Err(RenumberError::FieldCount { row, found, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(found, 0);
            }
            other => panic!("expected FieldCount, found {other:?}"),
        }
    }
}
