mod formatters;
mod results;

pub use formatters::*;
pub use results::*;
