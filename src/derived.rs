//! Derived values: pure functions of the resolved arguments, computed exactly
//! once after argument resolution and before any condition is evaluated.

use crate::context::ResolveContext;
use crate::error::Result;

type ComputeFn = Box<dyn Fn(&ResolveContext) -> Result<String>>;

/// A named value computed from the resolved context. The compute function is
/// pure except for the one templating invocation (see [`crate::command`]).
pub struct DerivedValue {
    name: String,
    compute: ComputeFn,
}

impl DerivedValue {
    pub fn new<F>(name: impl Into<String>, compute: F) -> Self
    where
        F: Fn(&ResolveContext) -> Result<String> + 'static,
    {
        Self {
            name: name.into(),
            compute: Box::new(compute),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compute(&self, context: &ResolveContext) -> Result<String> {
        (self.compute)(context)
    }
}

/// Compute every derived value in order and store it in the context. Any
/// failure aborts the pass before process specs are assembled.
pub fn compute_all(values: &[DerivedValue], context: &mut ResolveContext) -> Result<()> {
    for value in values {
        let resolved = value.compute(context)?;
        log::debug!("Derived {} ({} bytes)", value.name(), resolved.len());
        context.set_derived(value.name(), resolved)?;
    }
    Ok(())
}
