use crate::cluster;
use crate::codec;
use crate::data;
use crate::sink;

/// Anything that can abort a pipeline run.
///
/// Each stage fails fast: a bad row surfaces its index through the
/// wrapped error rather than silently skipping or truncating.
#[derive(Debug)]
pub enum Error {
    Codec(codec::Error),
    Data(data::Error),
    Cluster(cluster::Error),
    Sink(sink::Error),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Codec(e) => write!(f, "encode: {}", e),
            Self::Data(e) => write!(f, "data: {}", e),
            Self::Cluster(e) => write!(f, "cluster: {}", e),
            Self::Sink(e) => write!(f, "sink: {}", e),
            Self::Io(e) => write!(f, "io: {}", e),
            Self::Json(e) => write!(f, "config: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            Self::Data(e) => Some(e),
            Self::Cluster(e) => Some(e),
            Self::Sink(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<codec::Error> for Error {
    fn from(e: codec::Error) -> Self {
        Self::Codec(e)
    }
}
impl From<data::Error> for Error {
    fn from(e: data::Error) -> Self {
        Self::Data(e)
    }
}
impl From<cluster::Error> for Error {
    fn from(e: cluster::Error) -> Self {
        Self::Cluster(e)
    }
}
impl From<sink::Error> for Error {
    fn from(e: sink::Error) -> Self {
        Self::Sink(e)
    }
}
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
