//! Reference-text renderer for the endpoint catalog.
//!
//! Renders the same declarative records the resolution engine consumes as a
//! Markdown reference: one section per endpoint with its URL template,
//! required parameters (flattened the same way the engine checks them), the
//! full parameter list, and any usage note. Purely descriptive; nothing here
//! validates anything.

use std::fmt::Write as _;

use crate::BASE_URL;
use crate::catalog::{self, EndpointDefinition};

/// Renders the reference for the whole catalog, endpoints in name order.
#[must_use]
pub fn render() -> String {
    let mut out = String::new();
    for name in catalog::names() {
        if let Some(definition) = catalog::endpoint(name) {
            out.push_str(&render_endpoint(name, definition));
        }
    }
    out
}

/// Renders the reference section for a single endpoint.
#[must_use]
pub fn render_endpoint(name: &str, definition: &EndpointDefinition) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "## Endpoint: `{name}`\n");
    let _ = writeln!(out, "### URL: `{BASE_URL}{}`\n", definition.url);

    let required = definition.required_display();
    if required.is_empty() {
        let _ = writeln!(out, "### Required Parameters\n* *None*\n");
    } else {
        let _ = writeln!(out, "### Required Parameters\n* {}\n", required.join("\n* "));
    }

    let all: Vec<&str> = definition
        .path_params
        .iter()
        .map(|(param, _)| *param)
        .chain(definition.query_params.iter().copied())
        .collect();
    let _ = writeln!(out, "### All Parameters\n* {}\n", all.join("\n* "));

    if let Some(note) = definition.note {
        let _ = writeln!(out, "### Note\n{note}\n");
    }
    let _ = writeln!(out, "-----\n");

    out
}
