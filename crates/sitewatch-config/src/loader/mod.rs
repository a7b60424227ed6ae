//! Config source loading: discovery, parsing, overrides and validation.

mod discovery;
mod format;
mod source;
mod template;


pub use discovery::{create_default_config, default_config_path, discover, LOCAL_CONFIG_FILE};
pub use format::SourceFormat;
pub use source::{
    load, load_from_path, load_from_path_with_env, load_from_str, load_with_env,
};
