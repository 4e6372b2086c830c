// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading two-column numeric text files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use plotez_style::DataMismatchError;

use crate::{Error, Result};

/// Reads `x, y` rows from `reader`.
///
/// Blank lines and lines starting with `#` are skipped; with `skip_header` the first line is
/// skipped unconditionally. Fields are trimmed before parsing.
pub fn read_two_columns<R: BufRead>(
    reader: R,
    delimiter: char,
    skip_header: bool,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if skip_header && index == 0 {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split(delimiter).map(str::trim).collect();
        if fields.len() != 2 {
            return Err(DataMismatchError::ColumnCount {
                line: line_no,
                expected: 2,
                found: fields.len(),
            }
            .into());
        }
        x.push(parse_field(fields[0], line_no, 1)?);
        y.push(parse_field(fields[1], line_no, 2)?);
    }
    if x.is_empty() {
        return Err(DataMismatchError::NoRows.into());
    }
    log::debug!("read {} row(s)", x.len());
    Ok((x, y))
}

/// Reads `x, y` rows from the file at `path`. See [`read_two_columns`].
pub fn read_two_column_file(
    path: impl AsRef<Path>,
    delimiter: char,
    skip_header: bool,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let path = path.as_ref();
    log::info!("reading two-column data from {}", path.display());
    let file = File::open(path)?;
    read_two_columns(BufReader::new(file), delimiter, skip_header)
}

fn parse_field(token: &str, line: usize, column: usize) -> Result<f64> {
    token.parse().map_err(|_| Error::Parse {
        line,
        column,
        token: token.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str, skip_header: bool) -> Result<(Vec<f64>, Vec<f64>)> {
        read_two_columns(text.as_bytes(), ',', skip_header)
    }

    #[test]
    fn reads_trimmed_rows_and_skips_comments() {
        let (x, y) = read("# t, v\n0, 1.5\n\n 1 ,2.5 \n2,-3e1\n", false).expect("valid file");
        assert_eq!(x, [0.0, 1.0, 2.0], "x column");
        assert_eq!(y, [1.5, 2.5, -30.0], "y column");
    }

    #[test]
    fn header_line_is_skipped_on_request() {
        let (x, _) = read("time,value\n1,2\n", true).expect("header skipped");
        assert_eq!(x, [1.0], "one data row");
        let err = read("time,value\n1,2\n", false).expect_err("header parsed as data");
        assert!(
            matches!(err, Error::Parse { line: 1, column: 1, ref token } if token == "time"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn wrong_field_count_reports_the_line() {
        let err = read("1,2\n3,4,5\n", false).expect_err("three fields");
        assert_eq!(
            err.as_data_mismatch(),
            Some(&DataMismatchError::ColumnCount {
                line: 2,
                expected: 2,
                found: 3
            }),
            "column count error"
        );
    }

    #[test]
    fn other_delimiters_and_empty_input() {
        let (x, y) = read_two_columns("1\t2\n3\t4\n".as_bytes(), '\t', false).expect("tabs");
        assert_eq!((x, y), (vec![1.0, 3.0], vec![2.0, 4.0]), "tab separated");
        let err = read("# nothing\n\n", false).expect_err("no rows");
        assert_eq!(err.as_data_mismatch(), Some(&DataMismatchError::NoRows), "no rows");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("plotez-file-tests-does-not-exist.csv");
        let err = read_two_column_file(&path, ',', false).expect_err("missing file");
        assert!(matches!(err, Error::Io(_)), "unexpected error: {err}");
    }
}
