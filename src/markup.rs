//! Markup/component extension package
//!
//! The bounded set of extension-node shapes the markup and component
//! features contribute, wired into the dump writer through the shape
//! registry rather than through the closed kind dispatch.

pub mod shapes;

pub use shapes::{
    register_defaults, Component, ComponentAttribute, MarkupBlock, MarkupElement, RefCapture,
    RouteAttribute,
};
