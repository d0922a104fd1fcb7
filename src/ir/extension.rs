//! Extension nodes - IR kinds defined outside the closed core set
//!
//! Pluggable front-end features (the markup/component package, for one)
//! contribute their own node shapes to the IR without the core node model
//! depending on them. An [`ExtensionNode`] wraps such a shape as an opaque
//! payload plus an origin tag.
//!
//! ## Origin and trust
//!
//! Every extension node records where its shape was defined. Shapes created
//! inside the compiler itself are tagged [`NodeOrigin::Internal`]; shapes from
//! external packages are [`NodeOrigin::External`]. The dump writer uses this
//! tag (through its trust policy) to decide whether an *unregistered* shape is
//! an internal implementation detail that may render generically, or a missing
//! renderer registration that must fail the serialization.

use std::any::Any;
use std::fmt;

/// Where an extension node's shape was defined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeOrigin {
    /// Defined inside the compiler's own trusted module
    Internal,
    /// Defined by an external package
    External,
}

/// Shape-specific payload of an extension node
///
/// Implementors are plain data structs. The `shape_name` is the internal label
/// used for the node name in dumps; by convention it carries the
/// `IntermediateNode` suffix that the writer strips, like the well-known
/// kinds do.
pub trait ExtensionPayload: fmt::Debug + Send + Sync + 'static {
    /// Internal label of this shape, e.g. "MarkupElementIntermediateNode"
    fn shape_name(&self) -> &'static str;

    /// Access to the concrete payload type for registered renderers
    fn as_any(&self) -> &dyn Any;
}

/// An IR node kind defined outside the closed core set
#[derive(Debug)]
pub struct ExtensionNode {
    payload: Box<dyn ExtensionPayload>,
    origin: NodeOrigin,
}

impl ExtensionNode {
    pub fn new(payload: impl ExtensionPayload, origin: NodeOrigin) -> Self {
        Self {
            payload: Box::new(payload),
            origin,
        }
    }

    /// An extension node defined inside the compiler's own module
    pub fn internal(payload: impl ExtensionPayload) -> Self {
        Self::new(payload, NodeOrigin::Internal)
    }

    /// An extension node defined by an external package
    pub fn external(payload: impl ExtensionPayload) -> Self {
        Self::new(payload, NodeOrigin::External)
    }

    pub fn shape_name(&self) -> &'static str {
        self.payload.shape_name()
    }

    pub fn origin(&self) -> NodeOrigin {
        self.origin
    }

    pub fn payload(&self) -> &dyn ExtensionPayload {
        self.payload.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Probe;

    impl ExtensionPayload for Probe {
        fn shape_name(&self) -> &'static str {
            "ProbeIntermediateNode"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_extension_node_origin() {
        assert_eq!(ExtensionNode::internal(Probe).origin(), NodeOrigin::Internal);
        assert_eq!(ExtensionNode::external(Probe).origin(), NodeOrigin::External);
    }

    #[test]
    fn test_extension_node_shape_name() {
        let node = ExtensionNode::internal(Probe);
        assert_eq!(node.shape_name(), "ProbeIntermediateNode");
    }

    #[test]
    fn test_payload_downcast() {
        let node = ExtensionNode::internal(Probe);
        assert!(node.payload().as_any().downcast_ref::<Probe>().is_some());
    }
}
