pub mod errors;

pub use errors::{ConfigError, SitewatchError};

pub type Result<T> = std::result::Result<T, SitewatchError>;
