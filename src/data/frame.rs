use super::error::Error;
use crate::Scalar;
use crate::Value;

/// A headered numeric table, one survey record per row.
///
/// Rows are index-aligned with the headers. The frame is the unit of
/// exchange between the data source, the clustering oracle, and the
/// row encoder; it never mutates in place, each reshaping returns a
/// fresh frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    headers: Vec<String>,
    rows: Vec<Vec<Scalar>>,
}

impl Frame {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
    pub fn rows(&self) -> &[Vec<Scalar>] {
        &self.rows
    }
    /// number of records
    pub fn n(&self) -> usize {
        self.rows.len()
    }
    /// number of fields per record
    pub fn m(&self) -> usize {
        self.headers.len()
    }

    /// the same table without one named column
    pub fn drop(&self, name: &str) -> Result<Self, Error> {
        let dropped = self
            .headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| Error::Column {
                name: name.to_string(),
            })?;
        Ok(Self {
            headers: self
                .headers
                .iter()
                .enumerate()
                .filter(|(col, _)| *col != dropped)
                .map(|(_, header)| header.clone())
                .collect(),
            rows: self
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .filter(|(col, _)| *col != dropped)
                        .map(|(_, &cell)| cell)
                        .collect()
                })
                .collect(),
        })
    }

    /// Integral view of the table for bit encoding.
    ///
    /// Survey fields are small non-negative categories; anything negative
    /// or fractional means the caller pointed the encoder at the wrong
    /// column set, so we refuse rather than truncate.
    pub fn records(&self) -> Result<Vec<Vec<Value>>, Error> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, &value)| {
                        if value < 0. || value.fract() != 0. {
                            Err(Error::Integral { row, col, value })
                        } else {
                            Ok(value as Value)
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl From<(Vec<String>, Vec<Vec<Scalar>>)> for Frame {
    fn from((headers, rows): (Vec<String>, Vec<Vec<Scalar>>)) -> Self {
        Self { headers, rows }
    }
}
