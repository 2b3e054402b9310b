//! Inclusion conditions for candidate process specs

use crate::context::ResolveContext;
use crate::error::ConfigurationError;

/// Boolean predicate gating inclusion of a candidate in the final batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Unconditional candidates.
    Always,
    /// Equality test against a resolved argument or derived value.
    Equals { key: String, value: String },
}

impl Condition {
    pub fn equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::Equals {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Check that every referenced key exists in the context. A condition
    /// over an undeclared name is a configuration error, not an evaluation
    /// error, so this runs before any candidate is evaluated.
    pub fn validate(&self, context: &ResolveContext) -> Result<(), ConfigurationError> {
        match self {
            Condition::Always => Ok(()),
            Condition::Equals { key, .. } => context.require(key).map(|_| ()),
        }
    }

    /// Evaluate against the resolved context. Total once
    /// [`validate`](Self::validate) has passed.
    pub fn evaluate(&self, context: &ResolveContext) -> bool {
        match self {
            Condition::Always => true,
            Condition::Equals { key, value } => {
                context.get(key).is_some_and(|resolved| resolved == value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::Argument;

    fn context_with(name: &str, value: &str) -> ResolveContext {
        let mut context = ResolveContext::new();
        context.declare(Argument::new(name, value, "")).unwrap();
        context.resolve_arguments().unwrap();
        context
    }

    #[test]
    fn test_always_holds() {
        let context = ResolveContext::new();
        assert!(Condition::Always.validate(&context).is_ok());
        assert!(Condition::Always.evaluate(&context));
    }

    #[test]
    fn test_equals_matches() {
        let context = context_with("use_rviz", "true");
        let condition = Condition::equals("use_rviz", "true");
        assert!(condition.validate(&context).is_ok());
        assert!(condition.evaluate(&context));
    }

    #[test]
    fn test_equals_mismatch() {
        let context = context_with("use_rviz", "false");
        assert!(!Condition::equals("use_rviz", "true").evaluate(&context));
    }

    #[test]
    fn test_undeclared_key_is_configuration_error() {
        let context = ResolveContext::new();
        let err = Condition::equals("use_rviz", "true")
            .validate(&context)
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::UnresolvedReference(key) if key == "use_rviz"));
    }
}
