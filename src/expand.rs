//! Placeholder expansion: serialize, literal multi-replace, reparse.
//!
//! Substitution happens on the serialized form of the template rather than
//! by walking the JSON tree. That is what makes partial-string placeholders
//! work (`"ref-{{REFERENCE_NUMBER}}"` becomes `"ref-<uuid>"`), and it is the
//! documented technique of this crate, not an implementation accident.
//!
//! # Escaping contract
//! Because replacement is textual, a context value containing characters
//! that are meaningful in JSON (quotes, backslashes, control characters)
//! will break the reparse unless the caller escapes it first; use
//! [`escape_json_fragment`] for values that are not known-clean. The seed
//! values this crate generates itself (UUIDs, RFC 3339 timestamps, variant
//! codes) never need escaping.

use crate::config::PlaceholderPolicy;
use crate::error::SeedError;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static RESIDUAL_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[A-Za-z0-9_]+\}\}").expect("placeholder pattern"));

/// Per-iteration mapping of placeholder names to replacement values.
///
/// Keys must not be prefixes of one another in a way that collides after the
/// `{{`/`}}` delimiters are added; this is a template-authoring constraint,
/// not a runtime check, and replacement order across distinct keys is
/// unspecified.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionContext {
    entries: BTreeMap<String, String>,
}

impl SubstitutionContext {
    /// An empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a placeholder value. The value is embedded
    /// verbatim; see the module-level escaping contract.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up a placeholder value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate `(key, value)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Escape a raw value for safe embedding inside a JSON string during
/// expansion.
///
/// Serializes the fragment as a JSON string and strips the surrounding
/// quotes, so `say "hi"` becomes `say \"hi\"`.
pub fn escape_json_fragment(raw: &str) -> String {
    let quoted = serde_json::to_string(raw).expect("strings always serialize");
    quoted[1..quoted.len() - 1].to_string()
}

/// Expand `template` with `ctx`, producing a new document.
///
/// The template is never mutated. Every `{{KEY}}` occurrence for a key
/// present in `ctx` is replaced globally; a token with no context value is
/// left verbatim under [`PlaceholderPolicy::PassThrough`] and rejected under
/// [`PlaceholderPolicy::Strict`].
///
/// # Errors
/// Returns [`SeedError::TemplateSubstitution`] if strict checking finds an
/// unmatched token, or if the post-substitution text fails to reparse as
/// JSON (an unescaped special character in a context value).
pub fn expand(
    template: &Value,
    ctx: &SubstitutionContext,
    policy: PlaceholderPolicy,
) -> Result<Value, SeedError> {
    let mut text = template.to_string();
    for (key, value) in ctx.entries() {
        let token = format!("{{{{{key}}}}}");
        if text.contains(&token) {
            text = text.replace(&token, value);
        }
    }

    if policy == PlaceholderPolicy::Strict
        && let Some(m) = RESIDUAL_PLACEHOLDER.find(&text)
    {
        return Err(SeedError::TemplateSubstitution(format!(
            "unmatched placeholder {} has no context value",
            m.as_str()
        )));
    }

    serde_json::from_str(&text).map_err(|e| {
        SeedError::TemplateSubstitution(format!(
            "substituted document is not valid JSON (unescaped value?): {e}"
        ))
    })
}
