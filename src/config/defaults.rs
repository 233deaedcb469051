//! Built-in codec defaults (layer 1)

use serde::{Deserialize, Serialize};

/// Element name used when the enclosing context does not choose one.
pub const DEFAULT_ELEMENT_NAME: &str = "Regex";

/// Settings for encoding and decoding regex elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Name of the element holding each value (default: "Regex")
    pub element_name: String,

    /// Emit `<?xml ...?>` before the element (default: false)
    pub xml_declaration: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            element_name: DEFAULT_ELEMENT_NAME.to_string(),
            xml_declaration: false,
        }
    }
}
