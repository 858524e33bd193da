mod error;
mod registry;
mod store;
mod user;

pub use error::*;
pub use registry::*;
pub use user::*;
