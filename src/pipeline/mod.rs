pub mod config;
pub mod driver;
pub mod error;
pub mod report;

pub use config::Config;
pub use driver::Pipeline;
pub use error::Error;
pub use report::Report;
