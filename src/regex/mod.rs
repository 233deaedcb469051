//! Regular-expression value types
//!
//! The value itself lives in [`value`]; its self-describing XML encoding in
//! [`xml`].

pub mod value;
pub mod xml;

pub use value::RegexValue;
pub use xml::OPTIONS_ATTRIBUTE;
