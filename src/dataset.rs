//! Loading observations from delimited text.
//!
//! The format is one observation per line, comma-separated: column 1 is the
//! independent variable, column 2 the dependent one. Extra columns are
//! ignored; blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{FitError, Result};
use crate::types::Observation;

/// Read observations from a file.
pub fn read_observations(path: &Path) -> Result<Vec<Observation>> {
    let file = File::open(path)?;
    parse_observations(BufReader::new(file))
}

/// Parse observations from any buffered reader.
pub fn parse_observations<R: BufRead>(reader: R) -> Result<Vec<Observation>> {
    let mut observations = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        let mut fields = record.split(',');
        let x = parse_field(fields.next(), idx)?;
        let y = parse_field(fields.next(), idx)?;
        observations.push(Observation::new(x, y));
    }

    Ok(observations)
}

fn parse_field(field: Option<&str>, idx: usize) -> Result<f64> {
    let raw = field.ok_or_else(|| FitError::Parse {
        line: idx + 1,
        reason: "expected two comma-separated columns".to_string(),
    })?;
    raw.trim().parse().map_err(|_| FitError::Parse {
        line: idx + 1,
        reason: format!("invalid number {raw:?}"),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::parse_observations;
    use crate::error::FitError;

    #[test]
    fn parses_two_columns_and_ignores_extras() {
        let input = "1.0,2.0\n3.5,-4.25,ignored,columns\n\n0,0\n";
        let observations = parse_observations(Cursor::new(input)).unwrap();

        assert_eq!(observations.len(), 3);
        assert_eq!(observations[1].x, 3.5);
        assert_eq!(observations[1].y, -4.25);
    }

    #[test]
    fn missing_column_is_an_error() {
        let result = parse_observations(Cursor::new("1.0\n"));
        assert!(matches!(result, Err(FitError::Parse { line: 1, .. })));
    }

    #[test]
    fn malformed_number_reports_line() {
        let result = parse_observations(Cursor::new("1.0,2.0\nfoo,3.0\n"));
        assert!(matches!(result, Err(FitError::Parse { line: 2, .. })));
    }
}
