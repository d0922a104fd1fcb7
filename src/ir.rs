//! IR node data model
//!
//! The tree structure the template compiler front-end produces between
//! parsing and code generation. This module only defines the data: the
//! closed set of well-known node kinds, source spans, diagnostics, and the
//! extension-node escape hatch for kinds defined by pluggable features.
//!
//! Serialization of the tree lives in the [`dump`](crate::dump) module.

pub mod diagnostic;
pub mod extension;
pub mod node;
pub mod span;

pub use diagnostic::{Diagnostic, Severity};
pub use extension::{ExtensionNode, ExtensionPayload, NodeOrigin};
pub use node::{AttributeStructure, IrNode, NodeKind, TagMode, TokenKind};
pub use span::SourceSpan;
