use super::centroid::Centroid;
use super::oracle::Error;
use super::oracle::Oracle;
use crate::data::Frame;
use crate::Scalar;

/// Centers computed elsewhere and substituted into the pipeline verbatim.
///
/// This is the hardware-acceleration path: the accelerator clusters the
/// bit-packed records on its own and hands back a centroid table, which
/// we treat as ground truth and only validate for shape.
pub struct Substitute(Vec<Centroid>);

impl Substitute {
    /// the 14-center table the accelerator produced for the survey dataset
    pub fn survey() -> Self {
        Self(SURVEY.iter().map(|row| Centroid::from(row.to_vec())).collect())
    }
}

impl From<Vec<Centroid>> for Substitute {
    fn from(centroids: Vec<Centroid>) -> Self {
        Self(centroids)
    }
}

impl Oracle for Substitute {
    fn k(&self) -> usize {
        self.0.len()
    }
    fn centroids(&self, frame: &Frame) -> Result<Vec<Centroid>, Error> {
        log::info!("{:<32}{:<32}", "substituting centroids", self.k());
        for (centroid, center) in self.0.iter().enumerate() {
            if center.len() != frame.m() {
                return Err(Error::Shape {
                    centroid,
                    want: frame.m(),
                    got: center.len(),
                });
            }
        }
        Ok(self.0.clone())
    }
}

/// accelerator output over the 16 non-label survey columns
const SURVEY: [[Scalar; 16]; 14] = [
    [6., 3., 4., 3., 1., 0., 0., 0., 1., 0., 4., 2., 1., 1., 1., 0.],
    [7., 3., 3., 4., 1., 0., 0., 0., 1., 0., 0., 3., 1., 5., 1., 1.],
    [6., 0., 4., 4., 2., 0., 0., 0., 1., 0., 2., 2., 3., 1., 0., 0.],
    [4., 2., 4., 4., 1., 0., 0., 0., 1., 0., 4., 2., 1., 5., 0., 0.],
    [11., 4., 3., 3., 1., 0., 0., 0., 1., 1., 4., 0., 2., 1., 1., 0.],
    [11., 0., 4., 3., 2., 0., 1., 0., 1., 0., 3., 0., 0., 5., 2., 1.],
    [9., 3., 4., 4., 1., 0., 0., 0., 1., 0., 4., 1., 1., 2., 1., 0.],
    [5., 2., 4., 3., 1., 0., 0., 0., 1., 0., 2., 3., 1., 1., 1., 0.],
    [7., 3., 3., 4., 1., 0., 0., 0., 1., 0., 0., 2., 2., 5., 1., 1.],
    [6., 3., 4., 4., 1., 0., 0., 0., 1., 0., 0., 1., 1., 5., 1., 1.],
    [6., 4., 4., 4., 1., 0., 0., 1., 0., 0., 6., 0., 3., 1., 1., 0.],
    [6., 3., 4., 3., 2., 0., 0., 1., 0., 1., 2., 2., 6., 0., 0., 0.],
    [8., 0., 0., 0., 0., 0., 0., 0., 0., 0., 4., 1., 0., 0., 0., 0.],
    [7., 3., 3., 4., 1., 0., 0., 0., 1., 0., 0., 0., 1., 1., 1., 0.],
];
