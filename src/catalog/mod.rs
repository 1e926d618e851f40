//! Declarative catalog of MLB Stats API endpoints.
//!
//! Every endpoint the API exposes is described by one [`EndpointDefinition`]:
//! a path template with `{name}` placeholders, the specs for those path
//! parameters, the query keys the endpoint accepts, and the parameters it
//! requires. The catalog is a process-wide read-only table; a single generic
//! engine ([`crate::Resolver`]) interprets it, so adding an endpoint is a
//! data change, not a code change.
//!
//! # Overview
//!
//! The table covers the public (unauthenticated) surface of the API:
//!
//! | Group | Endpoints |
//! |-------|-----------|
//! | Games | `game`, `game_boxscore`, `game_linescore`, `game_playByPlay`, `game_content`, `game_contextMetrics`, `game_winProbability`, live/color feeds and their diff/timestamp variants |
//! | Schedules | `schedule`, `schedule_postseason` (+ `series`, `tuneIn`), `schedule_tied` |
//! | People | `people`, `person`, `person_stats`, `people_changes`, `people_freeAgents` |
//! | Teams | `team`, `teams`, rosters, coaches, personnel, alumni, leaders, stats, history, affiliates |
//! | Stats | `stats`, `stats_leaders`, `stats_streaks`, `highLow`, `gamePace`, `standings`, `attendance` |
//! | Leagues & seasons | `league`, all-star ballots, `season`, `seasons`, `divisions`, `conferences`, `sports` |
//! | Misc | `awards`, `draft`, `homeRunDerby`, `transactions`, `venue`, `jobs` family, `meta` |
//!
//! # Example
//!
//! ```
//! use mlb_statsapi_sdk::catalog;
//!
//! let game = catalog::endpoint("game").expect("game endpoint is in the catalog");
//! assert_eq!(game.url, "{ver}/game/{gamePk}/feed/live");
//!
//! // The whole table satisfies the schema invariants.
//! catalog::validate().expect("shipped catalog is valid");
//! ```

mod endpoints;

pub use endpoints::ENDPOINTS;

use crate::Result;
use crate::error::Error;

/// The API version placeholder present in every template. It is excluded
/// from required-parameter listings since callers virtually never supply it.
pub const VERSION_PARAM: &str = "ver";

/// Declarative description of one remote API route.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct EndpointDefinition {
    /// Path template relative to the API base, e.g. `{ver}/game/{gamePk}/feed/live`.
    /// Placeholders correspond 1:1, in order, with `path_params`.
    pub url: &'static str,
    /// Path parameter specs, in template order.
    pub path_params: &'static [(&'static str, PathParam)],
    /// Query keys this endpoint accepts. Anything else the caller supplies
    /// is dropped, never sent.
    pub query_params: &'static [&'static str],
    /// Requirement terms; every term must be satisfied independently.
    pub required_params: &'static [Requirement],
    /// Usage caveat, surfaced in the rendered reference only.
    pub note: Option<&'static str>,
}

/// Spec for one `{name}` placeholder.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub enum PathParam {
    Text(TextSpec),
    Flag(FlagSpec),
}

/// A text-valued path segment.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct TextSpec {
    /// Substituted when the caller omits the parameter. `None` on a
    /// required parameter makes omission a resolution error.
    pub default: Option<&'static str>,
    /// Insert a `/` before the value when it resolves non-empty.
    pub leading_slash: bool,
    /// Insert a `/` after the value when it resolves non-empty.
    pub trailing_slash: bool,
    pub required: bool,
}

/// A boolean switch that splices a literal segment in or out of the path.
/// Both literals are always defined; the slash conventions are embedded in
/// the literals themselves.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    pub default: bool,
    /// Segment spliced in when the switch is on, e.g. `/recipients`.
    pub on: &'static str,
    /// Segment spliced in when the switch is off, typically empty.
    pub off: &'static str,
}

impl PathParam {
    #[must_use]
    pub fn is_required(&self) -> bool {
        match self {
            Self::Text(spec) => spec.required,
            Self::Flag(_) => false,
        }
    }

    /// Whether omission can always be resolved from the spec alone.
    #[must_use]
    pub fn has_default(&self) -> bool {
        match self {
            Self::Text(spec) => spec.default.is_some(),
            Self::Flag(_) => true,
        }
    }
}

/// One unit of an endpoint's required-parameter constraint.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub enum Requirement {
    /// The named parameter must be supplied (or carry a path default).
    Single(&'static str),
    /// All named parameters must be supplied together; a partial set is an
    /// error, not a fallback.
    All(&'static [&'static str]),
}

impl Requirement {
    /// The parameter names this term references.
    #[must_use]
    pub fn names(&self) -> &[&'static str] {
        match self {
            Self::Single(name) => std::slice::from_ref(name),
            Self::All(names) => names,
        }
    }

    /// The reference-text rendering of this term: the bare name for a
    /// singleton, `a + b` for a group.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Single(name) => (*name).to_owned(),
            Self::All(names) => names.join(" + "),
        }
    }
}

impl EndpointDefinition {
    /// Looks up the spec for one placeholder name.
    #[must_use]
    pub fn path_param(&self, name: &str) -> Option<&PathParam> {
        self.path_params
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, spec)| spec)
    }

    /// Whether `name` is a declared query key for this endpoint.
    #[must_use]
    pub fn accepts_query(&self, name: &str) -> bool {
        self.query_params.contains(&name)
    }

    /// Flattens the endpoint's requirements into the display strings the
    /// rendered reference uses: required path parameters (excluding
    /// [`VERSION_PARAM`]) followed by one string per requirement term.
    #[must_use]
    pub fn required_display(&self) -> Vec<String> {
        let mut items: Vec<String> = self
            .path_params
            .iter()
            .filter(|(name, spec)| spec.is_required() && *name != VERSION_PARAM)
            .map(|(name, _)| (*name).to_owned())
            .collect();
        items.extend(
            self.required_params
                .iter()
                .filter(|term| !term.names().is_empty())
                .map(Requirement::display),
        );
        items
    }

    /// Checks this entry against the schema invariants. Run once over the
    /// whole table at startup via [`validate`]; an entry that fails here
    /// cannot be resolved meaningfully.
    pub fn validate(&self, endpoint: &'static str) -> Result<()> {
        let placeholders: Vec<&str> = segments(self.url)
            .map_err(|reason| Error::schema(endpoint, reason))?
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name),
                Segment::Literal(_) => None,
            })
            .collect();

        if placeholders.len() != self.path_params.len() {
            return Err(Error::schema(
                endpoint,
                format!(
                    "template has {} placeholder(s) but {} path parameter spec(s)",
                    placeholders.len(),
                    self.path_params.len()
                ),
            ));
        }
        for (placeholder, (param, _)) in placeholders.iter().zip(self.path_params) {
            if placeholder != param {
                return Err(Error::schema(
                    endpoint,
                    format!("placeholder `{{{placeholder}}}` does not match path parameter `{param}` at the same position"),
                ));
            }
        }
        for (index, placeholder) in placeholders.iter().enumerate() {
            if placeholders[..index].contains(placeholder) {
                return Err(Error::schema(
                    endpoint,
                    format!("placeholder `{{{placeholder}}}` appears more than once"),
                ));
            }
        }

        for (param, _) in self.path_params {
            if self.accepts_query(param) {
                return Err(Error::schema(
                    endpoint,
                    format!("`{param}` is declared as both a path and a query parameter"),
                ));
            }
        }
        for (index, query) in self.query_params.iter().enumerate() {
            if self.query_params[..index].contains(query) {
                return Err(Error::schema(
                    endpoint,
                    format!("query parameter `{query}` is declared more than once"),
                ));
            }
        }

        for term in self.required_params {
            if let Requirement::All(names) = term
                && names.len() < 2
            {
                return Err(Error::schema(
                    endpoint,
                    "requirement group must name at least two parameters",
                ));
            }
            for name in term.names() {
                if self.path_param(name).is_none() && !self.accepts_query(name) {
                    return Err(Error::schema(
                        endpoint,
                        format!("required parameter `{name}` is neither a path nor a query parameter"),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// One piece of a parsed path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'tpl> {
    Literal(&'tpl str),
    Placeholder(&'tpl str),
}

/// Splits a template into literal and placeholder segments, in order.
pub(crate) fn segments(template: &str) -> std::result::Result<Vec<Segment<'_>>, String> {
    let mut parts = Vec::new();
    let mut rest = template;
    while !rest.is_empty() {
        let Some(open) = rest.find('{') else {
            if rest.contains('}') {
                return Err("unmatched `}` in template".to_owned());
            }
            parts.push(Segment::Literal(rest));
            break;
        };
        let (literal, tail) = rest.split_at(open);
        if literal.contains('}') {
            return Err("unmatched `}` in template".to_owned());
        }
        if !literal.is_empty() {
            parts.push(Segment::Literal(literal));
        }
        let tail = &tail[1..];
        let Some(close) = tail.find('}') else {
            return Err("unterminated placeholder in template".to_owned());
        };
        let name = &tail[..close];
        if name.is_empty() || name.contains('{') {
            return Err(format!("malformed placeholder `{{{name}`"));
        }
        parts.push(Segment::Placeholder(name));
        rest = &tail[close + 1..];
    }
    Ok(parts)
}

/// Looks up an endpoint definition by name.
#[must_use]
pub fn endpoint(name: &str) -> Option<&'static EndpointDefinition> {
    ENDPOINTS.get(name)
}

/// All endpoint names, sorted for deterministic iteration.
#[must_use]
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ENDPOINTS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Checks every catalog entry against the schema invariants. Intended to be
/// called once at startup; the shipped table is also pinned by tests.
pub fn validate() -> Result<()> {
    for (&name, definition) in ENDPOINTS.entries() {
        definition.validate(name)?;
    }
    Ok(())
}
