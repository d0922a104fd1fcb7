//! Shape registry for extension-node rendering
//!
//! Extension nodes are opaque to the closed kind dispatch; each shape a
//! collaborator defines must bring its own ordered content-field extractor.
//! This module provides the pluggable registry those extractors are wired
//! into, and the trust policy that decides what happens when a shape was
//! never wired at all.
//!
//! Registration is keyed by the payload's concrete type, so a renderer can
//! only ever see the payload type it was registered for.

use crate::ir::extension::{ExtensionNode, ExtensionPayload, NodeOrigin};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during serialization
#[derive(Debug, Clone, PartialEq)]
pub enum DumpError {
    /// An extension node whose shape has no registered renderer and whose
    /// origin is not trusted. Serialization stops immediately; the output
    /// written so far is not a complete dump.
    UnknownNodeKind { shape: String },
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpError::UnknownNodeKind { shape } => write!(
                f,
                "Unknown node kind '{shape}': no renderer is registered for this shape \
                 and it does not originate from a trusted module"
            ),
        }
    }
}

impl std::error::Error for DumpError {}

type FieldExtractor =
    Box<dyn Fn(&dyn ExtensionPayload) -> Option<Vec<Option<String>>> + Send + Sync>;

/// Registry of extension-shape renderers
///
/// Maps each registered payload type to the closure producing its ordered
/// content-field list. Collaborators register their shapes here instead of
/// the writer depending on them.
pub struct ShapeRegistry {
    extractors: HashMap<TypeId, FieldExtractor>,
}

impl ShapeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ShapeRegistry {
            extractors: HashMap::new(),
        }
    }

    /// Create a registry with the default markup/component shapes wired in
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        crate::markup::register_defaults(&mut registry);
        registry
    }

    /// Register the content-field extractor for payload type `T`
    ///
    /// A `None` entry in the returned list skips that field entirely;
    /// `Some(String::new())` renders an empty field between separators.
    /// Registering the same payload type again replaces the extractor.
    pub fn register<T, F>(&mut self, extract: F)
    where
        T: ExtensionPayload,
        F: Fn(&T) -> Vec<Option<String>> + Send + Sync + 'static,
    {
        self.extractors.insert(
            TypeId::of::<T>(),
            Box::new(move |payload: &dyn ExtensionPayload| {
                payload.as_any().downcast_ref::<T>().map(&extract)
            }),
        );
    }

    /// Whether payload type `T` has a registered extractor
    pub fn has<T: ExtensionPayload>(&self) -> bool {
        self.extractors.contains_key(&TypeId::of::<T>())
    }

    /// The ordered content fields for a node, or `None` if its shape is
    /// unregistered
    pub fn fields_for(&self, node: &ExtensionNode) -> Option<Vec<Option<String>>> {
        let extractor = self.extractors.get(&node.payload().as_any().type_id())?;
        extractor(node.payload())
    }

    /// Number of registered shapes
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Policy deciding whether an unregistered extension node may fall back to
/// the bare rendering (name and span only) instead of failing
///
/// The trust boundary is injectable: callers with a finer-grained notion of
/// "inside the compiler" than the origin tag can supply their own policy.
pub trait TrustPolicy: Send + Sync {
    fn is_trusted(&self, node: &ExtensionNode) -> bool;
}

/// Default policy: trust exactly the nodes tagged [`NodeOrigin::Internal`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OriginTrust;

impl TrustPolicy for OriginTrust {
    fn is_trusted(&self, node: &ExtensionNode) -> bool {
        node.origin() == NodeOrigin::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug)]
    struct Widget {
        name: String,
    }

    impl ExtensionPayload for Widget {
        fn shape_name(&self) -> &'static str {
            "WidgetIntermediateNode"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug)]
    struct Unwired;

    impl ExtensionPayload for Unwired {
        fn shape_name(&self) -> &'static str {
            "UnwiredIntermediateNode"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_register_and_extract() {
        let mut registry = ShapeRegistry::new();
        registry.register(|widget: &Widget| vec![Some(widget.name.clone())]);

        assert!(registry.has::<Widget>());
        let node = ExtensionNode::external(Widget {
            name: "spinner".to_string(),
        });
        assert_eq!(
            registry.fields_for(&node),
            Some(vec![Some("spinner".to_string())])
        );
    }

    #[test]
    fn test_unregistered_shape_yields_none() {
        let registry = ShapeRegistry::new();
        let node = ExtensionNode::external(Unwired);
        assert_eq!(registry.fields_for(&node), None);
        assert!(!registry.has::<Unwired>());
    }

    #[test]
    fn test_registration_replaces() {
        let mut registry = ShapeRegistry::new();
        registry.register(|_: &Widget| vec![Some("old".to_string())]);
        registry.register(|_: &Widget| vec![Some("new".to_string())]);

        assert_eq!(registry.len(), 1);
        let node = ExtensionNode::external(Widget {
            name: "ignored".to_string(),
        });
        assert_eq!(
            registry.fields_for(&node),
            Some(vec![Some("new".to_string())])
        );
    }

    #[test]
    fn test_origin_trust() {
        let policy = OriginTrust;
        assert!(policy.is_trusted(&ExtensionNode::internal(Unwired)));
        assert!(!policy.is_trusted(&ExtensionNode::external(Unwired)));
    }

    #[test]
    fn test_error_display_names_shape() {
        let err = DumpError::UnknownNodeKind {
            shape: "UnwiredIntermediateNode".to_string(),
        };
        assert!(format!("{}", err).contains("UnwiredIntermediateNode"));
    }
}
