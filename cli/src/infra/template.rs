//! Tera implementation of the `TemplateRenderer` port.

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::application::ports::TemplateRenderer;
use crate::domain::TemplateContext;

/// Jinja2-style rendering with autoescape off.
pub struct TeraRenderer;

/// Process environment, skipping entries that are not valid UTF-8.
fn environment() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

impl TeraRenderer {
    fn variables(context: &TemplateContext) -> BTreeMap<String, String> {
        match context {
            TemplateContext::Environment => environment(),
            TemplateContext::Explicit(vars) => vars.clone(),
            TemplateContext::Layered(vars) => {
                let mut merged = environment();
                merged.extend(vars.iter().map(|(k, v)| (k.clone(), v.clone())));
                merged
            }
        }
    }
}

impl TemplateRenderer for TeraRenderer {
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        let mut tera_context = tera::Context::new();
        for (key, value) in Self::variables(context) {
            tera_context.insert(key, &value);
        }
        tracing::debug!(?context, "rendering template");
        tera::Tera::one_off(template, &tera_context, false).context("cannot render template")
    }
}
