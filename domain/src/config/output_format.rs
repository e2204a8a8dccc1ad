//! Output format value object

use serde::{Deserialize, Serialize};

/// How quiz replies are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured text, one reply per block (default)
    #[default]
    Text,
    /// One JSON object per reply
    Json,
}
