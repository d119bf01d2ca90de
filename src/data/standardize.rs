use super::error::Error;
use super::frame::Frame;
use crate::Scalar;

/// z-score standardization, column by column
impl Frame {
    /// Each column is recentered to mean zero and rescaled to unit
    /// population standard deviation. A constant column has nothing to
    /// rescale by and is refused.
    pub fn standardize(&self) -> Result<Self, Error> {
        if self.rows().is_empty() {
            return Err(Error::Empty);
        }
        let n = self.n() as Scalar;
        let means = (0..self.m())
            .map(|col| self.rows().iter().map(|row| row[col]).sum::<Scalar>() / n)
            .collect::<Vec<Scalar>>();
        let spreads = (0..self.m())
            .map(|col| {
                self.rows()
                    .iter()
                    .map(|row| (row[col] - means[col]).powi(2))
                    .sum::<Scalar>()
                    / n
            })
            .map(Scalar::sqrt)
            .collect::<Vec<Scalar>>();
        if let Some(col) = spreads.iter().position(|spread| *spread == 0.) {
            return Err(Error::Variance { col });
        }
        Ok(Self::from((
            self.headers().to_vec(),
            self.rows()
                .iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .map(|(col, &cell)| (cell - means[col]) / spreads[col])
                        .collect()
                })
                .collect(),
        )))
    }
}
