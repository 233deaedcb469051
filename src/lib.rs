//! Mongo Regex - regular-expression values for document databases
//!
//! This crate implements the regular-expression value carried in documents and
//! queries: a pattern plus single-character flags, with value equality, a
//! stable hash, a display form and a fixed XML interchange shape.

pub mod codec;
pub mod config;
pub mod regex;

pub use codec::{decode_all, encode_to_string};
pub use config::{CodecConfig, ConfigError};
pub use regex::{RegexValue, OPTIONS_ATTRIBUTE};
