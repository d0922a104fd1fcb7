//! Canonical dump serialization of IR trees
//!
//! One deterministic, line-oriented text rendering of an IR tree, meant for
//! snapshot-based regression testing of the compiler's IR-generation phase.
//! One line per node, indentation for depth, `" - "` between fields,
//! diagnostics fingerprinted inline.
//!
//! Entry points: [`serialize`] for the default configuration, or build a
//! [`TreeWriter`] with your own [`ShapeRegistry`] and [`TrustPolicy`].

pub mod fingerprint;
pub mod line;
pub mod registry;
pub mod writer;

pub use fingerprint::fingerprint;
pub use registry::{DumpError, OriginTrust, ShapeRegistry, TrustPolicy};
pub use writer::{serialize, TreeWriter};
