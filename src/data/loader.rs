use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use super::error::CatalogError;
use super::model::Catalog;
use super::schema::{COLUMNS, COLUMN_COUNT};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the photometric catalog from a whitespace-separated text file.
///
/// Each non-blank line holds exactly one record with the fields of
/// [`COLUMNS`] in order; there is no header row.  The whole file is read
/// before the table is returned.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    log::debug!("Opening catalog {}", path.display());
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io(e),
    })?;

    let catalog = parse_catalog(file, &path.display().to_string())?;
    log::info!(
        "Loaded {} records ({} columns) from {}",
        catalog.len(),
        catalog.column_names().len(),
        path.display()
    );
    Ok(catalog)
}

/// Parse catalog records from any reader.  `source_name` only labels errors.
pub fn parse_catalog<R: Read>(reader: R, source_name: &str) -> Result<Catalog, CatalogError> {
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); COLUMN_COUNT];

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_record(&line, line_no, source_name)?;
        for (column, value) in columns.iter_mut().zip(record) {
            column.push(value);
        }
    }

    let named = COLUMNS
        .iter()
        .zip(columns)
        .map(|(spec, values)| (spec.label.to_string(), values))
        .collect();
    Catalog::from_columns(named)
}

// -- Record helpers --

fn parse_record(line: &str, line_no: usize, source_name: &str) -> Result<Vec<f64>, CatalogError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != COLUMN_COUNT {
        return Err(CatalogError::FieldCount {
            source_name: source_name.to_string(),
            line: line_no,
            expected: COLUMN_COUNT,
            found: tokens.len(),
        });
    }

    tokens
        .iter()
        .zip(COLUMNS.iter())
        .map(|(tok, spec)| {
            // `f64::from_str` also accepts "NaN" and "inf"; the catalog never holds those.
            tok.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CatalogError::InvalidNumber {
                    source_name: source_name.to_string(),
                    line: line_no,
                    column: spec.label.to_string(),
                    token: tok.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use approx::assert_relative_eq;

    use super::*;
    use crate::data::schema::{BMAG, MISSING_MAGNITUDE, PMRA, SEQ};

    const ROW_1: &str = "     1 201.696550 -47.478830  123.456 4567.890   1.00  0.50   1.00  0.50 16.100  0.010 15.000  0.010 14.000  0.010 13.500  0.010 13.000  0.010 99.999 99.999  95  -1";
    const ROW_2: &str = "     2 201.700000 -47.480000  130.000 4570.000  -3.25  0.40   2.10  0.40 99.999 99.999 99.999 99.999 14.000  0.010 13.500  0.010 99.999 99.999 99.999 99.999   0  12";

    #[test]
    fn parses_records_in_schema_order() {
        let text = format!("{ROW_1}\n{ROW_2}\n");
        let cat = parse_catalog(text.as_bytes(), "mem").unwrap();

        assert_eq!(cat.len(), 2);
        assert_eq!(cat.column_names().len(), COLUMN_COUNT);
        assert_eq!(cat.column(SEQ).unwrap(), [1.0, 2.0]);
        assert_relative_eq!(cat.column(PMRA).unwrap()[1], -3.25);
        assert_eq!(cat.column(BMAG).unwrap()[1], MISSING_MAGNITUDE);
        assert_eq!(cat.column("Mm2").unwrap(), [-1.0, 12.0]);
    }

    #[test]
    fn skips_blank_lines() {
        let text = format!("\n{ROW_1}\n   \n{ROW_2}\n\n");
        let cat = parse_catalog(text.as_bytes(), "mem").unwrap();
        assert_eq!(cat.len(), 2);
    }

    #[test]
    fn empty_input_gives_empty_catalog() {
        let cat = parse_catalog("".as_bytes(), "mem").unwrap();
        assert!(cat.is_empty());
        assert_eq!(cat.column_names().len(), COLUMN_COUNT);
    }

    #[test]
    fn rejects_a_short_line() {
        let short: Vec<&str> = ROW_1.split_whitespace().take(COLUMN_COUNT - 1).collect();
        let text = format!("{ROW_1}\n{}\n", short.join(" "));
        let err = parse_catalog(text.as_bytes(), "mem").unwrap_err();

        assert!(err.is_format_error());
        match err {
            CatalogError::FieldCount {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, COLUMN_COUNT);
                assert_eq!(found, COLUMN_COUNT - 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_a_long_line() {
        let text = format!("{ROW_1} 7.0\n");
        let err = parse_catalog(text.as_bytes(), "mem").unwrap_err();
        assert!(matches!(err, CatalogError::FieldCount { found, .. } if found == COLUMN_COUNT + 1));
    }

    #[test]
    fn rejects_a_non_numeric_field() {
        let text = ROW_1.replacen("15.000", "15.0x0", 1);
        let err = parse_catalog(text.as_bytes(), "mem").unwrap_err();
        assert!(err.is_format_error());
        match err {
            CatalogError::InvalidNumber { column, token, .. } => {
                assert_eq!(column, BMAG);
                assert_eq!(token, "15.0x0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_finite_tokens() {
        let text = ROW_1.replacen("14.000", "NaN", 1);
        let err = parse_catalog(text.as_bytes(), "mem").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidNumber { ref column, .. } if column == "Vmag"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("absent.dat")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
        assert!(!err.is_format_error());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{ROW_1}").unwrap();
        writeln!(file, "{ROW_2}").unwrap();
        file.flush().unwrap();

        let cat = load_catalog(file.path()).unwrap();
        assert_eq!(cat.len(), 2);
        assert_relative_eq!(cat.column("RAdeg").unwrap()[0], 201.69655);
    }
}
