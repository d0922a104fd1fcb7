//! IR node model - the closed set of well-known node kinds
//!
//! An [`IrNode`] is one entity in the tree the front-end hands to the dump
//! writer: a kind with kind-specific payload, an optional source span, the
//! diagnostics recorded on the node, and its ordered children.
//!
//! [`NodeKind`] is a closed enum. The dump writer matches it exhaustively, so
//! adding a well-known kind without wiring its rendering is a compile error
//! rather than a runtime fallback. Kinds contributed by pluggable features go
//! through the single [`NodeKind::Extension`] variant instead (see the
//! extension module).
//!
//! ## Internal labels
//!
//! Each well-known kind has an internal label following the
//! `<Name>IntermediateNode` convention, e.g. `FieldIntermediateNode`. The
//! writer strips the suffix when rendering the node name, so that same field
//! declaration appears as `Field` in dumps.

use super::diagnostic::Diagnostic;
use super::extension::ExtensionNode;
use super::span::SourceSpan;
use std::fmt;

/// Sub-kind of a token node: which language the token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    CSharp,
    Html,
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::CSharp => "CSharp",
            TokenKind::Html => "Html",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a tag helper element was written in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagMode {
    StartTagAndEndTag,
    SelfClosing,
    StartTagOnly,
}

impl TagMode {
    pub fn label(&self) -> &'static str {
        match self {
            TagMode::StartTagAndEndTag => "StartTagAndEndTag",
            TagMode::SelfClosing => "SelfClosing",
            TagMode::StartTagOnly => "StartTagOnly",
        }
    }
}

impl fmt::Display for TagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How an attribute value was quoted in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeStructure {
    DoubleQuotes,
    SingleQuotes,
    NoQuotes,
    Minimized,
}

impl AttributeStructure {
    pub fn label(&self) -> &'static str {
        match self {
            AttributeStructure::DoubleQuotes => "DoubleQuotes",
            AttributeStructure::SingleQuotes => "SingleQuotes",
            AttributeStructure::NoQuotes => "NoQuotes",
            AttributeStructure::Minimized => "Minimized",
        }
    }
}

impl fmt::Display for AttributeStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The closed set of well-known node kinds, plus the extension escape hatch
///
/// Payload fields live inline on each variant so the dump writer can render
/// the exact ordered content-field list a kind defines, with nothing
/// variable-length or unordered.
#[derive(Debug)]
pub enum NodeKind {
    /// Root of a compiled template document
    Document,
    /// Namespace the generated class lives in; content is the full name
    Namespace { content: String },
    /// Generated class declaration
    Class {
        modifiers: Vec<String>,
        name: String,
        base_type: Option<String>,
        interfaces: Vec<String>,
    },
    /// Generated field declaration
    Field {
        modifiers: Vec<String>,
        field_type: String,
        name: String,
    },
    /// Generated method declaration
    Method {
        modifiers: Vec<String>,
        return_type: String,
        name: String,
    },
    /// Using directive; content is the imported namespace
    Using { content: String },
    /// A block of literal markup
    Html { content: String },
    /// An embedded expression block
    CsharpExpression,
    /// An embedded statement block
    CsharpCode,
    /// A well-formed template directive
    Directive { name: String },
    /// A directive the front-end could not fully parse; still renders its name
    MalformedDirective { name: String },
    /// One parsed argument token of a directive
    DirectiveToken { content: String },
    /// A leaf source token; carries its language sub-kind
    Token { kind: TokenKind, content: String },
    /// A markup attribute split into literal prefix and suffix around its value
    HtmlAttribute {
        prefix: Option<String>,
        suffix: Option<String>,
    },
    /// Literal part of an attribute value
    HtmlAttributeValue { prefix: Option<String> },
    /// Expression-valued part of an attribute value
    CsharpExpressionAttributeValue { prefix: Option<String> },
    /// Statement-valued part of an attribute value
    CsharpCodeAttributeValue { prefix: Option<String> },
    /// An element matched by a tag helper
    TagHelper { tag_name: String, tag_mode: TagMode },
    /// A tag helper attribute bound to a helper property
    TagHelperProperty {
        attribute_name: String,
        bound_attribute: String,
        structure: AttributeStructure,
    },
    /// A tag helper attribute left as plain markup
    TagHelperHtmlAttribute {
        attribute_name: String,
        structure: AttributeStructure,
    },
    /// A node kind defined outside the closed set
    Extension(ExtensionNode),
}

impl NodeKind {
    /// The kind's internal label, before suffix stripping
    pub fn label(&self) -> &str {
        match self {
            NodeKind::Document => "DocumentIntermediateNode",
            NodeKind::Namespace { .. } => "NamespaceIntermediateNode",
            NodeKind::Class { .. } => "ClassIntermediateNode",
            NodeKind::Field { .. } => "FieldIntermediateNode",
            NodeKind::Method { .. } => "MethodIntermediateNode",
            NodeKind::Using { .. } => "UsingIntermediateNode",
            NodeKind::Html { .. } => "HtmlIntermediateNode",
            NodeKind::CsharpExpression => "CSharpExpressionIntermediateNode",
            NodeKind::CsharpCode => "CSharpCodeIntermediateNode",
            NodeKind::Directive { .. } => "DirectiveIntermediateNode",
            NodeKind::MalformedDirective { .. } => "MalformedDirectiveIntermediateNode",
            NodeKind::DirectiveToken { .. } => "DirectiveTokenIntermediateNode",
            NodeKind::Token { .. } => "TokenIntermediateNode",
            NodeKind::HtmlAttribute { .. } => "HtmlAttributeIntermediateNode",
            NodeKind::HtmlAttributeValue { .. } => "HtmlAttributeValueIntermediateNode",
            NodeKind::CsharpExpressionAttributeValue { .. } => {
                "CSharpExpressionAttributeValueIntermediateNode"
            }
            NodeKind::CsharpCodeAttributeValue { .. } => {
                "CSharpCodeAttributeValueIntermediateNode"
            }
            NodeKind::TagHelper { .. } => "TagHelperIntermediateNode",
            NodeKind::TagHelperProperty { .. } => "TagHelperPropertyIntermediateNode",
            NodeKind::TagHelperHtmlAttribute { .. } => "TagHelperHtmlAttributeIntermediateNode",
            NodeKind::Extension(ext) => ext.shape_name(),
        }
    }
}

/// One entity in the IR tree
///
/// Built by the upstream IR-construction phase; the dump writer only ever
/// borrows it.
#[derive(Debug)]
pub struct IrNode {
    pub kind: NodeKind,
    pub span: Option<SourceSpan>,
    pub diagnostics: Vec<Diagnostic>,
    pub children: Vec<IrNode>,
}

impl IrNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            span: None,
            diagnostics: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Attach a source span
    pub fn at(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Append a child node
    pub fn with_child(mut self, child: IrNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append multiple children
    pub fn with_children(mut self, children: Vec<IrNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Record a diagnostic on this node
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }
}
