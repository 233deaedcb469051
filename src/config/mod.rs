//! Codec configuration
//!
//! Two layers, applied in order:
//! 1. Built-in defaults
//! 2. Optional TOML file (`--config`)
//!
//! CLI flags are applied on top by the binary through [`CodecConfig::with_overrides`].

mod defaults;
mod effective;

pub use defaults::{CodecConfig, DEFAULT_ELEMENT_NAME};
pub use effective::ConfigError;
