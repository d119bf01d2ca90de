use super::centroid::Centroid;
use crate::data::Frame;

/// External producer of cluster centers.
///
/// The pipeline never runs Lloyd iterations itself; centers arrive from
/// whatever computed them (a software library elsewhere, or the hardware
/// accelerator via `Substitute`). The seam only promises shape: k centers,
/// each with the frame's arity.
pub trait Oracle {
    /// how many centers this oracle produces
    fn k(&self) -> usize;
    /// centers for the given frame, index-aligned with its columns
    fn centroids(&self, frame: &Frame) -> Result<Vec<Centroid>, Error>;
}

/// Shape violations at the oracle seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// a center disagrees with the frame on arity
    Shape {
        centroid: usize,
        want: usize,
        got: usize,
    },
    /// the oracle produced the wrong number of centers
    Count { want: usize, got: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape {
                centroid,
                want,
                got,
            } => {
                write!(f, "centroid {} has {} coordinates, frame has {} columns", centroid, got, want)
            }
            Self::Count { want, got } => {
                write!(f, "oracle produced {} centroids, configured for {}", got, want)
            }
        }
    }
}

impl std::error::Error for Error {}
