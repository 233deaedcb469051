//! The regular-expression value.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Multiplier mixing the pattern hash into the flags hash.
const HASH_MULTIPLIER: i32 = 397;

/// A regular expression as stored in a document: pattern text plus flags.
///
/// Both fields are nullable; `None` is distinct from an empty string. Flags are
/// conventionally drawn from `g`, `i` and `m`, but any characters are carried
/// through as-is. Nothing here compiles or validates the pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexValue {
    /// Expression body, without enclosing delimiters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Zero or more single-character options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

impl RegexValue {
    /// An unset value; both fields are `None`. Decoders start from this.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pattern with no flags. Flags are set to `""`, not `None`.
    pub fn from_pattern(pattern: impl Into<String>) -> Self {
        Self::with_flags(pattern, String::new())
    }

    /// A pattern with the given flags, taken verbatim.
    pub fn with_flags(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            flags: Some(flags.into()),
        }
    }

    /// Build from nullable parts, taken verbatim.
    pub fn from_parts(pattern: Option<String>, flags: Option<String>) -> Self {
        Self { pattern, flags }
    }

    /// Compare against a value of unknown type.
    ///
    /// `None` and values of any other type compare unequal.
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|o| o.downcast_ref::<RegexValue>())
            .map_or(false, |o| self == o)
    }

    /// Stable 32-bit hash: `hash(pattern) * 397 ^ hash(flags)`, with `None`
    /// hashing to 0.
    ///
    /// The result does not depend on the process or platform, unlike
    /// [`std::collections::hash_map::DefaultHasher`].
    pub fn hash_code(&self) -> i32 {
        field_hash(self.pattern.as_deref()).wrapping_mul(HASH_MULTIPLIER)
            ^ field_hash(self.flags.as_deref())
    }
}

fn field_hash(field: Option<&str>) -> i32 {
    match field {
        Some(s) => s
            .bytes()
            .fold(0i32, |h, b| h.wrapping_mul(31).wrapping_add(i32::from(b))),
        None => 0,
    }
}

// Hash must agree with the derived PartialEq.
impl Hash for RegexValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for RegexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.pattern.as_deref().unwrap_or_default(),
            self.flags.as_deref().unwrap_or_default()
        )
    }
}
