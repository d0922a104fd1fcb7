//! # irdump
//!
//! Canonical text serializer for the IR tree a template/markup compiler
//! front-end produces. Given a tree root, it emits a deterministic,
//! line-oriented dump meant for snapshot-based regression testing: one line
//! per node, indentation for depth, `" - "` between fields.
//!
//! Equivalent IR serializes to byte-identical text; any semantic change in
//! the tree changes the dump. The format is one-way - it exists to be
//! diffed, not parsed back.
//!
//! ## Layout
//!
//! - `ir` - the node data model: closed kind set, spans, diagnostics, and
//!   the extension-node escape hatch
//! - `dump` - the writer: traversal, kind dispatch, line primitives,
//!   diagnostic fingerprinting, and the shape registry for extension nodes
//! - `markup` - the markup/component extension package, plugged in through
//!   the registry like any external collaborator would be
//!
//! ## Example
//!
//! ```ignore
//! use irdump::{serialize, IrNode, NodeKind};
//!
//! let tree = IrNode::new(NodeKind::Document);
//! let dump = serialize(&tree)?;
//! assert_eq!(dump, "Document\n");
//! ```

pub mod dump;
pub mod ir;
pub mod markup;

pub use dump::{serialize, DumpError, OriginTrust, ShapeRegistry, TreeWriter, TrustPolicy};
pub use ir::{
    AttributeStructure, Diagnostic, ExtensionNode, ExtensionPayload, IrNode, NodeKind, NodeOrigin,
    Severity, SourceSpan, TagMode, TokenKind,
};
