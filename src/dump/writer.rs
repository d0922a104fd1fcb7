//! The tree writer - canonical dump serialization of an IR tree
//!
//! Walks a tree pre-order, depth-first, and renders exactly one line per
//! node into the caller's output string: indentation for depth, the node
//! name, the source span when present, the kind's ordered content fields,
//! and a fingerprinted diagnostics suffix when the node carries any.
//!
//! ## Format
//!
//! ```text
//! Document - (0:0,0 [64] index.tpl)
//!     Namespace - App.Pages
//!     Class - public - Index - TemplateBase - IDisposable
//!         Field - public static - int - Count
//! ```
//!
//! Two compilations producing equivalent IR serialize to byte-identical
//! text; any semantic change in the tree changes the dump. The format is
//! one-way, for diffing, not for reconstruction.
//!
//! Serialization is a single-threaded, synchronous walk; the only failure is
//! an unregistered, untrusted extension shape, which aborts immediately and
//! leaves the sink holding a truncated dump.

use super::line::{display_name, escape_content, push_indent, SEPARATOR};
use super::registry::{DumpError, OriginTrust, ShapeRegistry, TrustPolicy};
use crate::dump::fingerprint::fingerprint;
use crate::ir::node::{IrNode, NodeKind};
use crate::ir::Diagnostic;
use once_cell::sync::Lazy;

static DEFAULT_WRITER: Lazy<TreeWriter> = Lazy::new(TreeWriter::new);

/// Serialize a tree with the default writer (markup shapes, origin trust)
pub fn serialize(root: &IrNode) -> Result<String, DumpError> {
    DEFAULT_WRITER.serialize(root)
}

/// Canonical dump writer for IR trees
///
/// Holds the shape registry for extension-node dispatch and the trust policy
/// for unregistered shapes. A writer is reusable across trees, one tree at a
/// time.
pub struct TreeWriter {
    registry: ShapeRegistry,
    trust: Box<dyn TrustPolicy>,
}

impl TreeWriter {
    /// A writer with the default markup/component shapes registered
    pub fn new() -> Self {
        Self::with_registry(ShapeRegistry::with_defaults())
    }

    /// A writer with a caller-supplied shape registry
    pub fn with_registry(registry: ShapeRegistry) -> Self {
        Self {
            registry,
            trust: Box::new(OriginTrust),
        }
    }

    /// Replace the trust policy for unregistered extension shapes
    pub fn with_trust_policy(mut self, policy: impl TrustPolicy + 'static) -> Self {
        self.trust = Box::new(policy);
        self
    }

    /// Serialize a whole tree to a fresh string
    pub fn serialize(&self, root: &IrNode) -> Result<String, DumpError> {
        let mut out = String::new();
        self.write_tree(root, &mut out)?;
        Ok(out)
    }

    /// Serialize a whole tree into `out`
    ///
    /// On error the sink holds everything written up to the offending node
    /// and must not be treated as a complete dump.
    pub fn write_tree(&self, root: &IrNode, out: &mut String) -> Result<(), DumpError> {
        self.write_node(root, 0, out)
    }

    fn write_node(&self, node: &IrNode, depth: usize, out: &mut String) -> Result<(), DumpError> {
        let fields = self.content_fields(node)?;

        push_indent(out, depth);
        out.push_str(display_name(node.kind.label()));
        if let Some(span) = &node.span {
            out.push_str(SEPARATOR);
            out.push_str(&span.to_string());
        }
        for field in &fields {
            if let Some(value) = field {
                out.push_str(SEPARATOR);
                out.push_str(&escape_content(value));
            }
        }
        if !node.diagnostics.is_empty() {
            write_diagnostics(&node.diagnostics, out);
        }
        out.push('\n');

        for child in &node.children {
            self.write_node(child, depth + 1, out)?;
        }
        Ok(())
    }

    /// The ordered content fields a node renders after name and span
    ///
    /// `None` entries are skipped entirely; `Some` entries render between
    /// separators even when empty. The match is exhaustive over the closed
    /// kind set.
    fn content_fields(&self, node: &IrNode) -> Result<Vec<Option<String>>, DumpError> {
        let fields = match &node.kind {
            NodeKind::Document | NodeKind::CsharpExpression | NodeKind::CsharpCode => Vec::new(),
            NodeKind::Namespace { content }
            | NodeKind::Using { content }
            | NodeKind::Html { content } => vec![Some(content.clone())],
            NodeKind::Class {
                modifiers,
                name,
                base_type,
                interfaces,
            } => vec![
                Some(modifiers.join(" ")),
                Some(name.clone()),
                base_type.clone(),
                Some(interfaces.join(", ")),
            ],
            NodeKind::Field {
                modifiers,
                field_type,
                name,
            } => vec![
                Some(modifiers.join(" ")),
                Some(field_type.clone()),
                Some(name.clone()),
            ],
            NodeKind::Method {
                modifiers,
                return_type,
                name,
            } => vec![
                Some(modifiers.join(" ")),
                Some(return_type.clone()),
                Some(name.clone()),
            ],
            NodeKind::Directive { name } | NodeKind::MalformedDirective { name } => {
                vec![Some(name.clone())]
            }
            NodeKind::DirectiveToken { content } => vec![Some(content.clone())],
            NodeKind::Token { kind, content } => {
                vec![Some(kind.label().to_string()), Some(content.clone())]
            }
            NodeKind::HtmlAttribute { prefix, suffix } => vec![prefix.clone(), suffix.clone()],
            NodeKind::HtmlAttributeValue { prefix }
            | NodeKind::CsharpExpressionAttributeValue { prefix }
            | NodeKind::CsharpCodeAttributeValue { prefix } => vec![prefix.clone()],
            NodeKind::TagHelper { tag_name, tag_mode } => {
                vec![Some(tag_name.clone()), Some(tag_mode.label().to_string())]
            }
            NodeKind::TagHelperProperty {
                attribute_name,
                bound_attribute,
                structure,
            } => vec![
                Some(attribute_name.clone()),
                Some(bound_attribute.clone()),
                Some(structure.label().to_string()),
            ],
            NodeKind::TagHelperHtmlAttribute {
                attribute_name,
                structure,
            } => vec![
                Some(attribute_name.clone()),
                Some(structure.label().to_string()),
            ],
            NodeKind::Extension(ext) => match self.registry.fields_for(ext) {
                Some(fields) => fields,
                None if self.trust.is_trusted(ext) => Vec::new(),
                None => {
                    return Err(DumpError::UnknownNodeKind {
                        shape: ext.shape_name().to_string(),
                    })
                }
            },
        };
        Ok(fields)
    }
}

impl Default for TreeWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Append the fingerprinted diagnostics suffix to a node's line
///
/// Entries keep their original order: `" | "` marker, then one
/// `{span severity id digest}` group per diagnostic, joined with `", "`.
fn write_diagnostics(diagnostics: &[Diagnostic], out: &mut String) {
    out.push_str(" | ");
    for (i, diag) in diagnostics.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('{');
        if let Some(span) = &diag.span {
            out.push_str(&span.to_string());
            out.push(' ');
        }
        out.push_str(&format!(
            "{} {} {}",
            diag.severity,
            diag.id,
            fingerprint(&diag.message)
        ));
        out.push('}');
    }
}
