//! Data model for analysis results returned by the remote service.
//!
//! These structs mirror the service's wire format exactly. Every sequence
//! field tolerates absence on the wire and decodes to an empty vector, and
//! `superclass` is optional rather than an empty string, so an absent value
//! never conflates with an intentionally empty one.

use serde::{Deserialize, Serialize};

/// Structural summary of a Ruby source file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AnalysisResult {
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
    #[serde(default)]
    pub top_level: TopLevel,
}

impl AnalysisResult {
    /// True when the service found neither classes nor top-level methods.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.top_level.methods.is_empty()
    }
}

/// Methods defined outside any class body.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct TopLevel {
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

/// A single class definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassInfo {
    pub class_name: String,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

/// A single method definition, with the references the service extracted
/// from its body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MethodInfo {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default)]
    pub line_number: u32,
    #[serde(default)]
    pub instance_variables: Vec<NamedRef>,
    #[serde(default)]
    pub local_variables: Vec<NamedRef>,
    #[serde(default)]
    pub method_calls: Vec<NamedRef>,
    #[serde(default)]
    pub conditionals: Vec<ConditionalRef>,
}

/// A named reference (variable or call) at a source line.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NamedRef {
    pub name: String,
    #[serde(default)]
    pub line_number: u32,
}

/// A conditional expression at a source line.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConditionalRef {
    pub condition: String,
    #[serde(default)]
    pub line_number: u32,
}
