pub mod centroid;
pub mod oracle;
pub mod substitute;

pub use centroid::nearest;
pub use centroid::Centroid;
pub use oracle::Error;
pub use oracle::Oracle;
pub use substitute::Substitute;
