//! Source span tracking for IR nodes
//!
//! A [`SourceSpan`] is a located range in the original template source: the
//! absolute byte offset, the zero-based line and character indices, the length
//! of the range, and the path of the file it came from.
//!
//! ## Rendering
//!
//! Spans render in the fixed dump form used by every serialized line:
//!
//! ```text
//! (offset:line,character [length] filename)
//! ```
//!
//! where `filename` is only the component after the last `/` of the file path,
//! so dumps stay stable when the same sources are compiled from different
//! checkout roots. A node with no span renders nothing at all for the span
//! segment, placeholder included.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A located range in original source text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Absolute byte offset from the start of the file
    pub absolute_offset: usize,
    /// Zero-based line index
    pub line_index: usize,
    /// Zero-based character index within the line
    pub character_index: usize,
    /// Length of the range in characters
    pub length: usize,
    /// Path of the originating file; may be empty for synthesized nodes
    pub file_path: String,
}

impl SourceSpan {
    pub fn new(
        absolute_offset: usize,
        line_index: usize,
        character_index: usize,
        length: usize,
    ) -> Self {
        Self {
            absolute_offset,
            line_index,
            character_index,
            length,
            file_path: String::new(),
        }
    }

    /// Attach the originating file path
    pub fn in_file(mut self, path: impl Into<String>) -> Self {
        self.file_path = path.into();
        self
    }

    /// The path component after the last `/`, empty when there is no path
    pub fn file_name(&self) -> &str {
        self.file_path.rsplit('/').next().unwrap_or("")
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}:{},{} [{}] {})",
            self.absolute_offset,
            self.line_index,
            self.character_index,
            self.length,
            self.file_name()
        )
    }
}
