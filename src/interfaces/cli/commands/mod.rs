//! CLI command implementations

mod config_gen;
mod lookup;

pub use config_gen::config_generate;
pub use lookup::{lookup_once, run_lookup};
