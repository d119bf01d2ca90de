use crate::Scalar;

/// Everything that can go wrong loading or reshaping a tabular dataset.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// the file holds no header row
    Empty,
    /// a row disagrees with the header on arity
    Ragged { row: usize, want: usize, got: usize },
    /// a cell refuses numeric parsing
    Numeric {
        row: usize,
        col: usize,
        token: String,
    },
    /// a named column is absent
    Column { name: String },
    /// a cell is negative or fractional where a survey value is expected
    Integral {
        row: usize,
        col: usize,
        value: Scalar,
    },
    /// a column is constant and cannot be standardized
    Variance { col: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "dataset io: {}", e),
            Self::Empty => write!(f, "dataset has no header row"),
            Self::Ragged { row, want, got } => {
                write!(f, "row {} has {} cells, header has {}", row, got, want)
            }
            Self::Numeric { row, col, token } => {
                write!(f, "cell ({}, {}) is not numeric: '{}'", row, col, token)
            }
            Self::Column { name } => write!(f, "no column named '{}'", name),
            Self::Integral { row, col, value } => {
                write!(f, "cell ({}, {}) is not a survey value: {}", row, col, value)
            }
            Self::Variance { col } => write!(f, "column {} is constant", col),
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
