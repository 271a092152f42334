mod error;
mod sentiment;

pub use error::*;
pub use sentiment::*;
