//! System prompt configuration.

use std::collections::HashMap;

use serde::Deserialize;

use crate::application::classifier::prompt::{PromptTemplate, TemplateValue};

/// `[prompt]` table: an optional template override and custom variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptConfig {
    /// Replaces the built-in template when set.
    #[serde(default)]
    pub template: Option<String>,

    /// Values for custom `{{NAME}}` placeholders.
    #[serde(default)]
    pub variables: HashMap<String, TemplateValue>,
}

impl PromptConfig {
    #[must_use]
    pub fn to_template(&self) -> PromptTemplate {
        let base = match &self.template {
            Some(template) => PromptTemplate::new(template.clone()),
            None => PromptTemplate::default(),
        };
        base.with_variables(self.variables.clone())
    }
}
