//! Endpoint resolution engine.
//!
//! Turns a catalog entry plus a caller [`Params`] set into a concrete
//! request URL. The engine is stateless and purely functional: validation,
//! path substitution, and query assembly happen in one pass over borrowed
//! inputs, so a single [`Resolver`] can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use mlb_statsapi_sdk::{Params, Resolver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = Resolver::default();
//! let url = resolver.url_for("game", &Params::new().with("gamePk", "565997"))?;
//!
//! assert_eq!(url, "https://statsapi.mlb.com/api/v1.1/game/565997/feed/live");
//! # Ok(())
//! # }
//! ```

use url::Url;

use crate::catalog::{self, EndpointDefinition, PathParam, Requirement, Segment};
use crate::error::Error;
use crate::params::{Params, Value};
use crate::{BASE_URL, Result};

/// Resolves endpoint names and parameter sets into request URLs.
///
/// Holds nothing but the base URL; [`Resolver::default`] targets the
/// production API, [`Resolver::new`] accepts any base (useful for pointing
/// tests or tooling at a mirror).
#[derive(Clone, Debug)]
pub struct Resolver {
    base: Url,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::new(BASE_URL).expect("Resolver with default base should succeed")
    }
}

impl Resolver {
    /// Creates a resolver with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(base: &str) -> Result<Resolver> {
        Ok(Self {
            base: Url::parse(base)?,
        })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolves a named catalog endpoint.
    ///
    /// # Errors
    ///
    /// `UnknownEndpoint` when the name is not in the catalog, otherwise
    /// whatever [`Resolver::resolve`] returns.
    pub fn url_for(&self, endpoint: &str, params: &Params) -> Result<String> {
        let definition =
            catalog::endpoint(endpoint).ok_or_else(|| Error::unknown_endpoint(endpoint))?;
        self.resolve(definition, params)
    }

    /// Resolves a definition against a caller parameter set.
    ///
    /// Processing order: required-term validation, then placeholder
    /// substitution in template order, then query assembly from the declared
    /// query keys the caller actually supplied.
    ///
    /// # Errors
    ///
    /// `Validation` when a required term is unsatisfied; `Schema` if the
    /// definition itself is malformed (unreachable for a catalog that passed
    /// [`catalog::validate`]).
    pub fn resolve(&self, definition: &EndpointDefinition, params: &Params) -> Result<String> {
        check_required(definition, params)?;
        let path = substitute(definition, params)?;
        let query = query_string(definition, params)?;
        Ok(format!("{}{path}{query}", self.base))
    }
}

/// Checks every requirement term independently. A path parameter's default
/// satisfies a singleton term; query parameters have no defaults, so group
/// members must all be supplied by the caller.
fn check_required(definition: &EndpointDefinition, params: &Params) -> Result<()> {
    let supplied = |name: &str| params.get(name).is_some_and(Value::is_supplied);

    for term in definition.required_params {
        match *term {
            Requirement::Single(name) => {
                let has_default = definition
                    .path_param(name)
                    .is_some_and(PathParam::has_default);
                if !supplied(name) && !has_default {
                    return Err(Error::missing_parameter(name));
                }
            }
            Requirement::All(names) => {
                if !names.iter().all(|name| supplied(name)) {
                    return Err(Error::missing_parameter_group(names));
                }
            }
        }
    }
    Ok(())
}

/// Substitutes placeholders in template order. Values the caller supplies
/// for names that are not placeholders are ignored here; the query assembly
/// decides whether they travel or drop.
fn substitute(definition: &EndpointDefinition, params: &Params) -> Result<String> {
    let segments =
        catalog::segments(definition.url).map_err(|reason| Error::schema(definition.url, reason))?;

    let mut path = String::with_capacity(definition.url.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => path.push_str(text),
            Segment::Placeholder(name) => {
                let Some(spec) = definition.path_param(name) else {
                    return Err(Error::schema(
                        definition.url,
                        format!("placeholder `{{{name}}}` has no path parameter spec"),
                    ));
                };
                match spec {
                    PathParam::Text(spec) => {
                        let value = match params.get(name) {
                            Some(value) => value.as_text(),
                            None => match spec.default {
                                Some(default) => default.to_owned(),
                                // Reachable when the required name is not
                                // among the endpoint's requirement terms.
                                None if spec.required => {
                                    return Err(Error::missing_parameter(name));
                                }
                                None => String::new(),
                            },
                        };
                        if !value.is_empty() {
                            if spec.leading_slash {
                                path.push('/');
                            }
                            path.push_str(&value);
                            if spec.trailing_slash {
                                path.push('/');
                            }
                        }
                    }
                    PathParam::Flag(spec) => {
                        let on = params.get(name).map_or(spec.default, Value::as_flag);
                        path.push_str(if on { spec.on } else { spec.off });
                    }
                }
            }
        }
    }
    Ok(path)
}

/// Assembles the query string from caller parameters, in caller insertion
/// order, keeping only the keys the endpoint declares.
fn query_string(definition: &EndpointDefinition, params: &Params) -> Result<String> {
    let mut pairs: Vec<(&str, &Value)> = Vec::new();
    for (name, value) in params.iter() {
        if definition.accepts_query(name) {
            pairs.push((name, value));
        } else {
            // Unknown names are dropped, not rejected: the catalog may lag
            // behind the live API.
            #[cfg(feature = "tracing")]
            if definition.path_param(name).is_none() {
                tracing::warn!(
                    parameter = name,
                    "dropping parameter not recognized by this endpoint"
                );
            }
        }
    }

    if pairs.is_empty() {
        return Ok(String::new());
    }
    let encoded = serde_html_form::to_string(&pairs)?;
    Ok(format!("?{encoded}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FlagSpec, TextSpec};

    fn resolver() -> Resolver {
        Resolver::default()
    }

    // A definition combining shapes the shipped catalog never does:
    // trailing slashes next to a flag-driven segment.
    fn trailing_definition() -> EndpointDefinition {
        EndpointDefinition {
            url: "{ver}/archive/{folder}{compact}index.json",
            path_params: &[
                (
                    "ver",
                    PathParam::Text(TextSpec {
                        default: Some("v1"),
                        leading_slash: false,
                        trailing_slash: false,
                        required: true,
                    }),
                ),
                (
                    "folder",
                    PathParam::Text(TextSpec {
                        default: None,
                        leading_slash: false,
                        trailing_slash: true,
                        required: false,
                    }),
                ),
                (
                    "compact",
                    PathParam::Flag(FlagSpec {
                        default: false,
                        on: "compact/",
                        off: "",
                    }),
                ),
            ],
            query_params: &["limit"],
            required_params: &[],
            note: None,
        }
    }

    #[test]
    fn trailing_slash_should_only_follow_nonempty_value() {
        let definition = trailing_definition();

        let with_folder = resolver()
            .resolve(&definition, &Params::new().with("folder", "2021"))
            .expect("resolution should succeed");
        assert_eq!(
            with_folder,
            "https://statsapi.mlb.com/api/v1/archive/2021/index.json"
        );

        let without_folder = resolver()
            .resolve(&definition, &Params::new())
            .expect("resolution should succeed");
        assert_eq!(
            without_folder,
            "https://statsapi.mlb.com/api/v1/archive/index.json"
        );
    }

    #[test]
    fn flag_literal_should_carry_its_own_slashes() {
        let definition = trailing_definition();

        let url = resolver()
            .resolve(&definition, &Params::new().with("compact", true))
            .expect("resolution should succeed");
        assert_eq!(
            url,
            "https://statsapi.mlb.com/api/v1/archive/compact/index.json"
        );
    }

    #[test]
    fn required_without_default_should_fail_defensively() {
        let definition = EndpointDefinition {
            url: "{ver}/widget/{widgetId}",
            path_params: &[
                (
                    "ver",
                    PathParam::Text(TextSpec {
                        default: Some("v1"),
                        leading_slash: false,
                        trailing_slash: false,
                        required: true,
                    }),
                ),
                (
                    "widgetId",
                    PathParam::Text(TextSpec {
                        default: None,
                        leading_slash: false,
                        trailing_slash: false,
                        required: true,
                    }),
                ),
            ],
            query_params: &[],
            required_params: &[],
            note: None,
        };

        let err = resolver()
            .resolve(&definition, &Params::new())
            .expect_err("omitting a required parameter without default should fail");
        let missing = err
            .downcast_ref::<crate::error::MissingParameter>()
            .expect("error should carry the parameter name");
        assert_eq!(missing.name, "widgetId");
    }

    #[test]
    fn path_default_should_satisfy_a_required_term() {
        let definition = EndpointDefinition {
            url: "{ver}/archive",
            path_params: &[(
                "ver",
                PathParam::Text(TextSpec {
                    default: Some("v1"),
                    leading_slash: false,
                    trailing_slash: false,
                    required: true,
                }),
            )],
            query_params: &[],
            required_params: &[Requirement::Single("ver")],
            note: None,
        };

        let url = resolver()
            .resolve(&definition, &Params::new())
            .expect("the default stands in for the caller value");
        assert_eq!(url, "https://statsapi.mlb.com/api/v1/archive");
    }

    #[test]
    fn text_value_should_drive_flag_placeholder() {
        let definition = trailing_definition();

        let url = resolver()
            .resolve(&definition, &Params::new().with("compact", "TRUE"))
            .expect("resolution should succeed");
        assert!(url.contains("/compact/"), "coerced text should switch on");

        let url = resolver()
            .resolve(&definition, &Params::new().with("compact", "nope"))
            .expect("resolution should succeed");
        assert!(!url.contains("compact"), "other text should switch off");
    }

    #[test]
    fn query_values_should_be_form_encoded() {
        let definition = trailing_definition();

        let url = resolver()
            .resolve(&definition, &Params::new().with("limit", "a b&c"))
            .expect("resolution should succeed");
        assert!(url.ends_with("?limit=a+b%26c"), "got {url}");
    }

    #[test]
    fn custom_base_should_prefix_resolved_path() {
        let resolver = Resolver::new("http://localhost:9999/api/").expect("base parses");

        let url = resolver
            .url_for("sports", &Params::new())
            .expect("resolution should succeed");
        assert_eq!(url, "http://localhost:9999/api/v1/sports");
    }
}
