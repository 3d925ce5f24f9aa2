//! Delimited numeric-array parsing: dataset sections, label lists, and
//! weight vectors.

use ndarray::Array2;

use crate::error::{ParseError, ParseResult};
use crate::{FIELD_SEPARATOR, ROW_SEPARATOR, SECTION_SEPARATOR};

/// The classifier's parsed input: training features, training labels, and
/// test features.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Training feature rows.
    pub train: Array2<f64>,
    /// One label per training row, each in {-1, 0, 1}.
    pub labels: Vec<i64>,
    /// Test feature rows, same width as `train`.
    pub test: Array2<f64>,
}

/// Parse the classifier input: `<train>XXX<labels>XXX<test>`, rows
/// separated by `S`, fields by `,`.
pub fn parse_dataset(input: &str) -> ParseResult<Dataset> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let sections: Vec<&str> = input.split(SECTION_SEPARATOR).collect();
    if sections.len() != 3 {
        return Err(ParseError::SectionCount {
            expected: 3,
            found: sections.len(),
        });
    }

    let train = parse_rows(sections[0], "training rows")?;
    let labels = parse_labels(sections[1])?;
    let test = parse_rows(sections[2], "test rows")?;

    if labels.len() != train.nrows() {
        return Err(ParseError::LabelCountMismatch {
            labels: labels.len(),
            rows: train.nrows(),
        });
    }
    if test.ncols() != train.ncols() {
        return Err(ParseError::RaggedRow {
            row: 0,
            expected: train.ncols(),
            got: test.ncols(),
        });
    }

    Ok(Dataset { train, labels, test })
}

/// Parse a comma-joined integer label list; each label must be -1, 0, or 1.
pub fn parse_labels(input: &str) -> ParseResult<Vec<i64>> {
    input
        .trim()
        .split(FIELD_SEPARATOR)
        .map(|token| {
            let token = token.trim();
            let label: i64 = token.parse().map_err(|_| ParseError::InvalidNumber {
                token: token.to_string(),
            })?;
            match label {
                -1 | 0 | 1 => Ok(label),
                other => Err(ParseError::InvalidLabel(other)),
            }
        })
        .collect()
}

/// Parse a comma-joined float list (the gradient tool's weight vector).
pub fn parse_weights(input: &str) -> ParseResult<Vec<f64>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    input.split(FIELD_SEPARATOR).map(parse_field).collect()
}

/// Parse an `S`-separated block of comma-joined float rows into a matrix.
///
/// All rows must have the width of the first row.
fn parse_rows(section: &str, name: &'static str) -> ParseResult<Array2<f64>> {
    let section = section.trim();
    if section.is_empty() {
        return Err(ParseError::EmptySection(name));
    }

    let mut width = 0usize;
    let mut values: Vec<f64> = vec![];
    let mut rows = 0usize;

    for (row, line) in section.split(ROW_SEPARATOR).enumerate() {
        let fields: Vec<f64> = line
            .split(FIELD_SEPARATOR)
            .map(parse_field)
            .collect::<ParseResult<_>>()?;
        if row == 0 {
            width = fields.len();
        } else if fields.len() != width {
            return Err(ParseError::RaggedRow {
                row,
                expected: width,
                got: fields.len(),
            });
        }
        values.extend(fields);
        rows += 1;
    }

    Ok(Array2::from_shape_vec((rows, width), values).expect("row-major shape"))
}

fn parse_field(token: &str) -> ParseResult<f64> {
    let token = token.trim();
    token.parse().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_sections() {
        let input = "1,0,0S0,1,0XXX-1,0XXX0.5,0.5,0.5";
        let ds = parse_dataset(input).unwrap();
        assert_eq!(ds.train.nrows(), 2);
        assert_eq!(ds.train.ncols(), 3);
        assert_eq!(ds.labels, vec![-1, 0]);
        assert_eq!(ds.test.nrows(), 1);
    }

    #[test]
    fn rejects_wrong_section_count() {
        let err = parse_dataset("1,2S3,4XXX-1,1").unwrap_err();
        assert!(matches!(
            err,
            ParseError::SectionCount {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_dataset("1,0,0S0,1XXX-1,0XXX1,1,1").unwrap_err();
        assert!(matches!(err, ParseError::RaggedRow { row: 1, .. }));
    }

    #[test]
    fn rejects_label_count_mismatch() {
        let err = parse_dataset("1,0,0S0,1,0XXX-1XXX1,1,1").unwrap_err();
        assert!(matches!(
            err,
            ParseError::LabelCountMismatch { labels: 1, rows: 2 }
        ));
    }

    #[test]
    fn rejects_out_of_set_label() {
        let err = parse_labels("-1,0,2").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLabel(2)));
    }

    #[test]
    fn rejects_bad_float() {
        let err = parse_weights("0.1,zap,0.3").unwrap_err();
        match err {
            ParseError::InvalidNumber { token } => assert_eq!(token, "zap"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parses_weights() {
        let w = parse_weights("0.1,0.2,0.3,0.4,0.5").unwrap();
        assert_eq!(w.len(), 5);
        assert!((w[4] - 0.5).abs() < 1e-15);
    }
}
