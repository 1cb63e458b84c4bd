//! Static JSON document templates, loaded once per run.

use crate::config::TemplateSpec;
use crate::error::SeedError;
use serde_json::Value;
use std::fs;

/// A named, immutable document template.
///
/// The template body is plain JSON with zero or more `{{NAME}}` tokens
/// embedded in its string values, including inside longer strings
/// (`"ref-{{REFERENCE_NUMBER}}"`).
#[derive(Debug, Clone)]
pub struct Template {
    stream: String,
    value: Value,
}

impl Template {
    /// Name of the output stream this template's documents feed.
    pub fn stream(&self) -> &str {
        &self.stream
    }

    /// The parsed template body.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// All templates for one run, in stream order. Immutable after [`load`](Self::load).
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    /// Load every template named by `specs`.
    ///
    /// # Errors
    /// Returns [`SeedError::TemplateLoad`] if any file is missing or is not
    /// valid JSON; nothing is loaded partially.
    pub fn load(specs: &[TemplateSpec]) -> Result<Self, SeedError> {
        let mut templates = Vec::with_capacity(specs.len());
        for spec in specs {
            let text = fs::read_to_string(&spec.path).map_err(|e| SeedError::TemplateLoad {
                path: spec.path.clone(),
                reason: format!("read failed: {e}"),
            })?;
            let value: Value = serde_json::from_str(&text).map_err(|e| SeedError::TemplateLoad {
                path: spec.path.clone(),
                reason: format!("not valid JSON: {e}"),
            })?;
            templates.push(Template {
                stream: spec.stream.clone(),
                value,
            });
        }
        Ok(Self { templates })
    }

    /// Loaded templates in stream order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Stream names in template order.
    pub fn stream_names(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.stream.clone()).collect()
    }

    /// Number of templates (one output stream each).
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the store holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
