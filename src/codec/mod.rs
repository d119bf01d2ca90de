pub mod error;
pub mod rep;
pub mod schedule;

pub use error::Error;
pub use rep::Rep;
pub use schedule::Schedule;
