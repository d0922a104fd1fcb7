//! Extension-node shapes contributed by the markup/component feature
//!
//! These are the payload types the markup and component front-end features
//! attach to extension nodes, together with their dump renderers. They plug
//! into the writer through the public [`ShapeRegistry`] mechanism; the dump
//! core never names them.
//!
//! ## Rendered fields
//!
//! - `MarkupElement` → tag name
//! - `MarkupBlock` → block content
//! - `Component` → tag name, resolved type name
//! - `ComponentAttribute` → attribute name, bound property name
//! - `RouteAttribute` → route template
//! - `RefCapture` → captured identifier, then the captured component's type
//!   name, or the literal `Element` when the capture target is a plain
//!   markup element

use crate::dump::ShapeRegistry;
use crate::ir::ExtensionPayload;
use std::any::Any;

/// A plain markup element
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupElement {
    pub tag_name: String,
}

impl ExtensionPayload for MarkupElement {
    fn shape_name(&self) -> &'static str {
        "MarkupElementIntermediateNode"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A run of raw markup kept as one block
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupBlock {
    pub content: String,
}

impl ExtensionPayload for MarkupBlock {
    fn shape_name(&self) -> &'static str {
        "MarkupBlockIntermediateNode"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An element resolved to a component
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub tag_name: String,
    /// Fully resolved type name of the component
    pub type_name: String,
}

impl ExtensionPayload for Component {
    fn shape_name(&self) -> &'static str {
        "ComponentIntermediateNode"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An attribute bound to a component property
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentAttribute {
    pub attribute_name: String,
    pub property_name: String,
}

impl ExtensionPayload for ComponentAttribute {
    fn shape_name(&self) -> &'static str {
        "ComponentAttributeIntermediateNode"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The route template a page directive attaches to the generated class
#[derive(Debug, Clone, PartialEq)]
pub struct RouteAttribute {
    pub template: String,
}

impl ExtensionPayload for RouteAttribute {
    fn shape_name(&self) -> &'static str {
        "RouteAttributeIntermediateNode"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A reference capture (`@ref`) on a component or plain element
#[derive(Debug, Clone, PartialEq)]
pub struct RefCapture {
    /// Content of the identifier receiving the capture
    pub identifier: String,
    /// Type name of the captured component; `None` when the capture target
    /// is a plain markup element
    pub component_type: Option<String>,
}

impl ExtensionPayload for RefCapture {
    fn shape_name(&self) -> &'static str {
        "RefCaptureIntermediateNode"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Register the renderers for all markup/component shapes
pub fn register_defaults(registry: &mut ShapeRegistry) {
    registry.register(|shape: &MarkupElement| vec![Some(shape.tag_name.clone())]);
    registry.register(|shape: &MarkupBlock| vec![Some(shape.content.clone())]);
    registry.register(|shape: &Component| {
        vec![Some(shape.tag_name.clone()), Some(shape.type_name.clone())]
    });
    registry.register(|shape: &ComponentAttribute| {
        vec![
            Some(shape.attribute_name.clone()),
            Some(shape.property_name.clone()),
        ]
    });
    registry.register(|shape: &RouteAttribute| vec![Some(shape.template.clone())]);
    registry.register(|shape: &RefCapture| {
        vec![
            Some(shape.identifier.clone()),
            Some(
                shape
                    .component_type
                    .clone()
                    .unwrap_or_else(|| "Element".to_string()),
            ),
        ]
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::ExtensionNode;

    #[test]
    fn test_defaults_cover_all_shapes() {
        let registry = ShapeRegistry::with_defaults();
        assert!(registry.has::<MarkupElement>());
        assert!(registry.has::<MarkupBlock>());
        assert!(registry.has::<Component>());
        assert!(registry.has::<ComponentAttribute>());
        assert!(registry.has::<RouteAttribute>());
        assert!(registry.has::<RefCapture>());
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_ref_capture_falls_back_to_element_label() {
        let registry = ShapeRegistry::with_defaults();
        let node = ExtensionNode::external(RefCapture {
            identifier: "myButton".to_string(),
            component_type: None,
        });
        assert_eq!(
            registry.fields_for(&node),
            Some(vec![
                Some("myButton".to_string()),
                Some("Element".to_string())
            ])
        );
    }

    #[test]
    fn test_ref_capture_uses_component_type() {
        let registry = ShapeRegistry::with_defaults();
        let node = ExtensionNode::external(RefCapture {
            identifier: "counter".to_string(),
            component_type: Some("App.Shared.Counter".to_string()),
        });
        assert_eq!(
            registry.fields_for(&node),
            Some(vec![
                Some("counter".to_string()),
                Some("App.Shared.Counter".to_string())
            ])
        );
    }
}
