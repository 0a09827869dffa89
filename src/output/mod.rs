//! Result rendering.
//!
//! Plain text goes through [`terminal`], one JSON object per line through
//! [`json`].

pub mod json;
pub mod terminal;

use serde::{Deserialize, Serialize};

/// How result lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}
