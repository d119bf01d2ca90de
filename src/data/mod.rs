pub mod error;
pub mod frame;
pub mod source;
pub mod standardize;

pub use error::Error;
pub use frame::Frame;
pub use source::Csv;
pub use source::Source;
