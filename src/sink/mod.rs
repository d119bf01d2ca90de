pub mod console;
pub mod disk;

pub use console::Console;
pub use disk::Disk;

use crate::cluster::Centroid;
use crate::codec::Rep;

/// Where encoded rows and centroid tables end up.
///
/// The pipeline hands over the whole batch at once; a sink may log it,
/// persist it, or feed it onward to the hardware test bench.
pub trait Sink {
    fn rows(&mut self, reps: &[Rep]) -> Result<(), Error>;
    fn centers(&mut self, centroids: &[Centroid]) -> Result<(), Error>;
}

/// Failures on the way out of the pipeline.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// a record is too wide for the packed layout's length prefix
    Record { bits: usize },
    /// a packed file does not start with the expected magic
    Magic,
    /// a packed file ends mid-record
    Truncated,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "sink io: {}", e),
            Self::Record { bits } => write!(f, "record of {} bits exceeds the packed layout", bits),
            Self::Magic => write!(f, "not a packed record file"),
            Self::Truncated => write!(f, "packed record file ends mid-record"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
