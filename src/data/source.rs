use super::error::Error;
use super::frame::Frame;
use crate::Scalar;
use std::path::PathBuf;

/// Where tabular records come from.
///
/// The pipeline is agnostic to the backing store; tests hand it frames
/// directly, production reads comma-separated files from disk.
pub trait Source {
    fn load(&self) -> Result<Frame, Error>;
}

/// A comma-separated file with a header row.
pub struct Csv(PathBuf);

impl From<PathBuf> for Csv {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl Source for Csv {
    fn load(&self) -> Result<Frame, Error> {
        log::info!("{:<32}{:<32}", "loading dataset", self.0.display());
        let text = std::fs::read_to_string(&self.0)?;
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let headers = lines
            .next()
            .ok_or(Error::Empty)?
            .split(',')
            .map(|header| header.trim().to_string())
            .collect::<Vec<String>>();
        let mut rows = Vec::new();
        for (row, line) in lines.enumerate() {
            let cells = line.split(',').map(str::trim).collect::<Vec<&str>>();
            if cells.len() != headers.len() {
                return Err(Error::Ragged {
                    row,
                    want: headers.len(),
                    got: cells.len(),
                });
            }
            rows.push(
                cells
                    .into_iter()
                    .enumerate()
                    .map(|(col, token)| {
                        token.parse::<Scalar>().map_err(|_| Error::Numeric {
                            row,
                            col,
                            token: token.to_string(),
                        })
                    })
                    .collect::<Result<Vec<Scalar>, Error>>()?,
            );
        }
        log::info!("{:<32}{:<32}", "loaded records", rows.len());
        Ok(Frame::from((headers, rows)))
    }
}

/// frames already in memory are their own source
impl Source for Frame {
    fn load(&self) -> Result<Frame, Error> {
        Ok(self.clone())
    }
}
