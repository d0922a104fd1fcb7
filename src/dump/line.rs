//! Low-level line and field rendering primitives
//!
//! Everything that keeps the dump strictly line-oriented lives here: the
//! indentation unit, the field separator, node-name suffix stripping, and
//! content escaping.
//!
//! ## Escaping
//!
//! Content fields may contain anything the template author wrote, including
//! newlines and the separator string itself. Escaping is applied to every
//! content field before it is written, in this order:
//!
//! 1. strip all carriage returns
//! 2. replace each newline with the two characters `\n`
//! 3. replace each occurrence of the separator `" - "` with `" \-"`
//!
//! so `"a - b\nc"` renders as `a \-b\nc`. The result never contains a literal
//! newline or an unescaped separator, which keeps `" - "` unambiguous as the
//! field delimiter for line-diffing.

/// Field separator between node name, span, and each content field
pub const SEPARATOR: &str = " - ";

/// One level of nesting in the dump
pub const INDENT: &str = "    ";

/// Append `depth` levels of indentation
pub fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// A kind label with the trailing `IntermediateNode` suffix stripped
///
/// Labels without the suffix render unchanged.
pub fn display_name(label: &str) -> &str {
    label.strip_suffix("IntermediateNode").unwrap_or(label)
}

/// Escape one content field for line-oriented output
pub fn escape_content(content: &str) -> String {
    content
        .replace('\r', "")
        .replace('\n', "\\n")
        .replace(SEPARATOR, " \\-")
}
