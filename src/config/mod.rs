//! Configuration
//!
//! Static settings for the diagnostics stack, loaded once from `dnis.toml`
//! and `DNIS__*` environment variables.

mod r#impl;
mod structs;

pub use r#impl::{get_config, init_config, set_config};
pub use structs::*;
