use super::error::Error;
use super::rep::Rep;
use crate::Arbitrary;
use crate::Value;
use crate::Width;

/// Per-position bit allotment for one dataset row.
///
/// A schedule is a fixed configuration constant, never derived from data.
/// Its widths are always read in OUTPUT order: the reverse flag on
/// `Schedule::encode` flips the values, never the widths. A caller that
/// wants the legacy hardware layout therefore pairs `Schedule::reversed`
/// with `reverse = true`, which keeps both sequences index-aligned.
///
/// Construction is fallible so that every live `Schedule` upholds the
/// positive-width invariant; downstream code never re-checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule(Vec<Width>);

impl Schedule {
    /// the per-position allotments, in output order
    pub fn widths(&self) -> &[Width] {
        &self.0
    }
    /// number of fields in one record
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// total bits across one packed record
    pub fn bits(&self) -> usize {
        self.0.iter().sum()
    }
    /// the same allotments walked from the other end
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }
    /// the 17-field layout of the cleaned survey dataset
    pub fn survey() -> Self {
        Self(crate::SURVEY_SCHEDULE.to_vec())
    }

    /// Fixed-width binary expansion of one row.
    ///
    /// Pairs `values[i]` with `widths[i]` after optionally reversing the
    /// values, and fails on the first value that does not fit. The output
    /// preserves the (possibly reversed) order, one bit-string per field,
    /// each left-padded with '0' to exactly its allotted width.
    pub fn encode(&self, values: &[Value], reverse: bool) -> Result<Rep, Error> {
        if values.len() != self.len() {
            return Err(Error::ShapeMismatch {
                values: values.len(),
                widths: self.len(),
            });
        }
        let ordered = match reverse {
            true => values.iter().rev().copied().collect::<Vec<Value>>(),
            false => values.to_vec(),
        };
        ordered
            .into_iter()
            .zip(self.widths().iter().copied())
            .enumerate()
            .map(|(index, (value, width))| Self::expand(index, value, width))
            .collect::<Result<Vec<String>, Error>>()
            .map(Rep::from)
    }

    /// Read fixed-width bit-strings back into values.
    ///
    /// Inverse of `Schedule::encode` with `reverse = false`; the fields
    /// must match this schedule position by position.
    pub fn decode(&self, rep: &Rep) -> Result<Vec<Value>, Error> {
        if rep.len() != self.len() {
            return Err(Error::ShapeMismatch {
                values: rep.len(),
                widths: self.len(),
            });
        }
        rep.fields()
            .iter()
            .zip(self.widths().iter().copied())
            .enumerate()
            .map(|(index, (field, width))| Self::collapse(index, field, width))
            .collect()
    }

    /// unsigned expansion, zero-padded on the left
    fn expand(index: usize, value: Value, width: Width) -> Result<String, Error> {
        if (width as u32) < Value::BITS && value >> width != 0 {
            Err(Error::Overflow {
                index,
                value,
                width,
            })
        } else {
            Ok(format!("{:0width$b}", value, width = width))
        }
    }

    /// unsigned contraction of a single checked field
    fn collapse(index: usize, field: &str, width: Width) -> Result<Value, Error> {
        if field.len() != width {
            Err(Error::BadWidth {
                index,
                want: width,
                got: field.len(),
            })
        } else {
            Value::from_str_radix(field, 2).map_err(|_| Error::BadDigit { index })
        }
    }
}

impl TryFrom<Vec<Width>> for Schedule {
    type Error = Error;
    fn try_from(widths: Vec<Width>) -> Result<Self, Self::Error> {
        match widths.iter().position(|width| *width == 0) {
            Some(index) => Err(Error::ZeroWidth { index }),
            None => Ok(Self(widths)),
        }
    }
}

impl Arbitrary for Schedule {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self(
            (0..rng.random_range(4..24))
                .map(|_| rng.random_range(1..=8))
                .collect(),
        )
    }
}

impl Schedule {
    /// a row of values drawn uniformly within each allotment
    pub fn sample(&self) -> Vec<Value> {
        use rand::Rng;
        let ref mut rng = rand::rng();
        self.0
            .iter()
            .map(|width| rng.random_range(0..(1u64 << width)) as Value)
            .collect()
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|width| width.to_string())
                .collect::<Vec<String>>()
                .join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(widths: &[Width]) -> Schedule {
        Schedule::try_from(widths.to_vec()).expect("positive widths")
    }

    #[test]
    fn rejects_zero_width() {
        assert_eq!(
            Schedule::try_from(vec![2, 0, 3]),
            Err(Error::ZeroWidth { index: 1 })
        );
    }

    #[test]
    fn survey_layout_has_17_fields() {
        assert_eq!(Schedule::survey().len(), 17);
        assert_eq!(Schedule::survey().bits(), 40);
    }

    #[test]
    fn reversal_is_involutive() {
        let forward = Schedule::survey();
        assert_eq!(forward.reversed().reversed(), forward);
    }

    #[test]
    fn rejects_shape_mismatch() {
        assert_eq!(
            schedule(&[2, 2]).encode(&[1, 2, 3], false),
            Err(Error::ShapeMismatch {
                values: 3,
                widths: 2
            })
        );
    }

    #[test]
    fn expands_single_value() {
        let rep = schedule(&[3]).encode(&[5], false).unwrap();
        assert_eq!(rep.fields(), ["101"]);
    }

    #[test]
    fn expands_in_order() {
        let rep = schedule(&[2, 2, 2]).encode(&[0, 1, 2], false).unwrap();
        assert_eq!(rep.fields(), ["00", "01", "10"]);
    }

    #[test]
    fn reverses_values_not_widths() {
        let reversed = schedule(&[1, 2, 2]).encode(&[1, 2, 3], true).unwrap();
        let forward = schedule(&[1, 2, 2]).encode(&[3, 2, 1], false).unwrap();
        assert_eq!(reversed, forward);
        assert_eq!(reversed.fields(), ["1", "10", "01"]);
    }

    #[test]
    fn preserves_lengths() {
        let widths = [4, 3, 3, 3, 2, 1, 1, 1];
        let rep = schedule(&widths).encode(&[9, 4, 2, 7, 1, 0, 1, 0], false).unwrap();
        assert_eq!(rep.len(), widths.len());
        for (field, width) in rep.fields().iter().zip(widths.iter()) {
            assert_eq!(field.len(), *width);
        }
    }

    #[test]
    fn saturates_at_all_ones() {
        let rep = schedule(&[4]).encode(&[15], false).unwrap();
        assert_eq!(rep.fields(), ["1111"]);
    }

    #[test]
    fn overflows_one_past_saturation() {
        assert_eq!(
            schedule(&[4]).encode(&[16], false),
            Err(Error::Overflow {
                index: 0,
                value: 16,
                width: 4
            })
        );
    }

    #[test]
    fn reports_offending_index() {
        assert_eq!(
            schedule(&[4, 2, 2]).encode(&[3, 9, 1], false),
            Err(Error::Overflow {
                index: 1,
                value: 9,
                width: 2
            })
        );
    }

    #[test]
    fn encodes_empty_row() {
        let rep = schedule(&[]).encode(&[], false).unwrap();
        assert!(rep.is_empty());
    }

    #[test]
    fn full_width_values_never_overflow() {
        let widths = vec![Value::BITS as Width];
        let rep = schedule(&widths).encode(&[Value::MAX], false).unwrap();
        assert_eq!(rep.fields()[0].len(), Value::BITS as usize);
    }

    #[test]
    fn is_decode_inverse_encode() {
        for _ in 0..100 {
            let schedule = Schedule::random();
            let values = schedule.sample();
            let rep = schedule.encode(&values, false).unwrap();
            assert_eq!(schedule.decode(&rep).unwrap(), values);
        }
    }

    #[test]
    fn is_reverse_encode_encode_reverse() {
        for _ in 0..100 {
            let schedule = Schedule::random();
            let values = schedule.sample();
            let mirror = values.iter().rev().copied().collect::<Vec<Value>>();
            assert_eq!(
                schedule.encode(&values, true).unwrap(),
                schedule.encode(&mirror, false).unwrap()
            );
        }
    }

    #[test]
    fn survey_row_round_trips() {
        let schedule = Schedule::survey();
        let values = vec![5, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 3, 2, 1, 0, 1];
        let rep = schedule.encode(&values, false).unwrap();
        assert_eq!(rep.bits(), schedule.bits());
        assert_eq!(schedule.decode(&rep).unwrap(), values);
    }

    #[test]
    fn rejects_foreign_digits_on_decode() {
        let schedule = schedule(&[2]);
        let rep = Rep::from(vec!["0x".to_string()]);
        assert_eq!(schedule.decode(&rep), Err(Error::BadDigit { index: 0 }));
    }

    #[test]
    fn rejects_misfit_fields_on_decode() {
        let schedule = schedule(&[3]);
        let rep = Rep::from(vec!["01".to_string()]);
        assert_eq!(
            schedule.decode(&rep),
            Err(Error::BadWidth {
                index: 0,
                want: 3,
                got: 2
            })
        );
    }
}
