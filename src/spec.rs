//! Process-start specification records

use serde::{Deserialize, Serialize};

/// Immutable description of one child process, independent of actually
/// starting it. Consumed by the external process supervisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub package: String,
    pub executable: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parameters: Option<Vec<(String, String)>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub arguments: Option<Vec<String>>,
}

impl ProcessSpec {
    pub fn new(
        package: impl Into<String>,
        executable: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            executable: executable.into(),
            namespace: namespace.into(),
            parameters: None,
            arguments: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<(String, String)>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn with_arguments(mut self, arguments: Vec<String>) -> Self {
        self.arguments = Some(arguments);
        self
    }
}

/// Serialize a spec batch for handoff to the supervisor.
pub fn to_json(specs: &[ProcessSpec]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(specs)
}
