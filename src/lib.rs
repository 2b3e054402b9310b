//! Launch-configuration resolver for the nuturtle one-robot visualization
//! pipeline.
//!
//! Turns a flat map of argument overrides into an ordered batch of
//! [`ProcessSpec`] records for an external process supervisor: an optional
//! joint-state source, the robot-state publisher (with the xacro-expanded
//! robot model), and an optional rviz viewer preloaded with the per-color
//! preset. Resolution is all-or-nothing: any configuration or derivation
//! error yields zero specs.

pub mod argument;
pub mod command;
pub mod condition;
pub mod context;
pub mod derived;
pub mod error;
pub mod package;
pub mod pipeline;
pub mod spec;

pub use error::{ConfigurationError, DerivedValueError, ResolveError, Result};
pub use pipeline::{resolve, JointStateSource, ResolveOptions, DESCRIPTION_PACKAGE};
pub use spec::ProcessSpec;

use std::collections::HashMap;

/// Resolve the pipeline with default options: `xacro` on the PATH and the
/// description package looked up among installed packages.
pub fn resolve_visualization_pipeline(
    overrides: &HashMap<String, String>,
) -> Result<Vec<ProcessSpec>> {
    pipeline::resolve(overrides, &ResolveOptions::default())
}
