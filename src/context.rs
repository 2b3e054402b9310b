//! Resolution context: declared arguments, external overrides, resolved and
//! derived values.
//!
//! One context lives for exactly one resolution pass. Declarations come
//! first, overrides next, then a single forward resolution; nothing persists
//! across passes.

use crate::argument::Argument;
use crate::error::ConfigurationError;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ResolveContext {
    arguments: Vec<Argument>,
    overrides: HashMap<String, String>,
    resolved: HashMap<String, String>,
    derived: HashMap<String, String>,
}

impl ResolveContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an argument. Fails fast on a duplicate name or a default
    /// outside the restricted choices.
    pub fn declare(&mut self, argument: Argument) -> Result<(), ConfigurationError> {
        if self.arguments.iter().any(|a| a.name == argument.name) {
            return Err(ConfigurationError::DuplicateName(argument.name));
        }
        argument.validate_default()?;
        self.arguments.push(argument);
        Ok(())
    }

    /// Supply an external value for a declared argument, before resolution
    /// begins. Overrides for undeclared names are rejected when the pass
    /// resolves.
    pub fn set_override(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.overrides.insert(name.into(), value.into());
    }

    /// Fix every argument to its override or default, validating restricted
    /// choices. Must run before any derived value or condition uses the
    /// context.
    pub fn resolve_arguments(&mut self) -> Result<(), ConfigurationError> {
        for name in self.overrides.keys() {
            if !self.arguments.iter().any(|a| a.name == *name) {
                return Err(ConfigurationError::UnknownArgument(name.clone()));
            }
        }

        for argument in &self.arguments {
            let value = self
                .overrides
                .get(&argument.name)
                .cloned()
                .unwrap_or_else(|| argument.default.clone());
            argument.validate_value(&value)?;
            log::debug!("Resolved argument {} = '{}'", argument.name, value);
            self.resolved.insert(argument.name.clone(), value);
        }
        Ok(())
    }

    /// Store a computed derived value. Derived names share the argument
    /// namespace, so collisions are declaration-time errors.
    pub fn set_derived(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ConfigurationError> {
        let name = name.into();
        if self.arguments.iter().any(|a| a.name == name) || self.derived.contains_key(&name) {
            return Err(ConfigurationError::DuplicateName(name));
        }
        self.derived.insert(name, value.into());
        Ok(())
    }

    /// Look up a resolved argument or derived value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.resolved
            .get(name)
            .or_else(|| self.derived.get(name))
            .map(|s| s.as_str())
    }

    /// Like [`get`](Self::get), but a missing name is an unresolved-reference
    /// error.
    pub fn require(&self, name: &str) -> Result<&str, ConfigurationError> {
        self.get(name)
            .ok_or_else(|| ConfigurationError::UnresolvedReference(name.to_string()))
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_argument() -> Argument {
        Argument::with_choices("color", "purple", &["red", "purple"], "Body color")
    }

    #[test]
    fn test_declare_and_resolve_default() {
        let mut context = ResolveContext::new();
        context.declare(color_argument()).unwrap();
        context.resolve_arguments().unwrap();
        assert_eq!(context.get("color"), Some("purple"));
    }

    #[test]
    fn test_override_wins_over_default() {
        let mut context = ResolveContext::new();
        context.declare(color_argument()).unwrap();
        context.set_override("color", "red");
        context.resolve_arguments().unwrap();
        assert_eq!(context.get("color"), Some("red"));
    }

    #[test]
    fn test_duplicate_declaration_fails_fast() {
        let mut context = ResolveContext::new();
        context.declare(color_argument()).unwrap();
        let err = context.declare(color_argument()).unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateName(name) if name == "color"));
    }

    #[test]
    fn test_bad_default_fails_at_declaration() {
        let mut context = ResolveContext::new();
        let err = context
            .declare(Argument::with_choices("mode", "bad", &["a", "b"], ""))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::DefaultOutsideChoices { .. }
        ));
    }

    #[test]
    fn test_override_outside_choices() {
        let mut context = ResolveContext::new();
        context.declare(color_argument()).unwrap();
        context.set_override("color", "orange");
        let err = context.resolve_arguments().unwrap_err();
        assert!(matches!(err, ConfigurationError::ValueOutsideChoices { .. }));
    }

    #[test]
    fn test_override_for_undeclared_argument() {
        let mut context = ResolveContext::new();
        context.declare(color_argument()).unwrap();
        context.set_override("colour", "red");
        let err = context.resolve_arguments().unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownArgument(name) if name == "colour"));
    }

    #[test]
    fn test_derived_value_lookup() {
        let mut context = ResolveContext::new();
        context.declare(color_argument()).unwrap();
        context.resolve_arguments().unwrap();
        context.set_derived("rviz_color", "config/basic_purple.rviz").unwrap();
        assert_eq!(context.get("rviz_color"), Some("config/basic_purple.rviz"));
        assert_eq!(context.require("rviz_color").unwrap(), "config/basic_purple.rviz");
    }

    #[test]
    fn test_derived_name_collides_with_argument() {
        let mut context = ResolveContext::new();
        context.declare(color_argument()).unwrap();
        context.resolve_arguments().unwrap();
        let err = context.set_derived("color", "x").unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateName(name) if name == "color"));
    }

    #[test]
    fn test_require_missing_name() {
        let context = ResolveContext::new();
        let err = context.require("missing").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnresolvedReference(name) if name == "missing"));
    }
}
