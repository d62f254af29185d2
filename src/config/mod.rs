//! JSON runtime configuration for the command-line runner.

pub mod keepout;

pub use keepout::{load_config, parse_config, KeepoutOutputConfig, KeepoutToolConfig};
