//! Caller-supplied parameter sets.
//!
//! Endpoints are resolved from a dynamic name→value mapping rather than
//! per-endpoint request structs: the catalog is declarative data and one
//! generic engine interprets it, so the parameter set has to be equally
//! generic. Insertion order is preserved because the emitted query string
//! follows the order in which the caller supplied its parameters.

use serde::Serialize;

/// A single caller-supplied parameter value.
///
/// Path parameters are either text segments or boolean switches that splice
/// a literal segment in or out of the path; query parameters are text (a
/// [`Value::Flag`] is emitted as `true`/`false`).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Flag(bool),
}

impl Value {
    /// The boolean state of this value when it drives a path switch.
    ///
    /// Text values use the loose coercion the API's clients have always
    /// applied: the literal `"true"` (any ASCII case) switches on, anything
    /// else switches off.
    #[must_use]
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => text.eq_ignore_ascii_case("true"),
        }
    }

    /// The text rendering of this value for path substitution.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Flag(flag) => flag.to_string(),
        }
    }

    /// Whether this value counts as supplied for required-parameter checks.
    /// An empty text value does not; a flag always does.
    #[must_use]
    pub fn is_supplied(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Flag(_) => true,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

/// An insertion-ordered set of caller parameters, keyed by name.
///
/// # Example
///
/// ```
/// use mlb_statsapi_sdk::Params;
///
/// let params = Params::new()
///     .with("gamePk", "565997")
///     .with("hydrate", "lineups");
///
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, Value)>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a parameter and returns `self`, for fluent construction.
    #[must_use]
    pub fn with<N: Into<String>, V: Into<Value>>(mut self, name: N, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a parameter. A repeated name keeps its original position but
    /// takes the new value.
    pub fn insert<N: Into<String>, V: Into<Value>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(existing, _)| existing.as_str() == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Converts a JSON object into a parameter set, for callers whose parameters
/// arrive as JSON (a CLI flag file, a config entry).
///
/// Strings and booleans map directly; numbers map to their text form; arrays
/// of scalars comma-join, matching the API's list convention
/// (`leagueIds=103,104`); nulls and nested objects are skipped.
impl From<&serde_json::Map<String, serde_json::Value>> for Params {
    fn from(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut params = Params::new();
        for (name, value) in object {
            match value {
                serde_json::Value::Bool(flag) => params.insert(name.as_str(), *flag),
                serde_json::Value::String(text) => params.insert(name.as_str(), text.as_str()),
                serde_json::Value::Number(number) => {
                    params.insert(name.as_str(), number.to_string());
                }
                serde_json::Value::Array(items) => {
                    let joined = items
                        .iter()
                        .filter_map(|item| match item {
                            serde_json::Value::String(text) => Some(text.clone()),
                            serde_json::Value::Number(number) => Some(number.to_string()),
                            serde_json::Value::Bool(flag) => Some(flag.to_string()),
                            _ => None,
                        })
                        .collect::<Vec<_>>()
                        .join(",");
                    params.insert(name.as_str(), joined);
                }
                _ => {}
            }
        }
        params
    }
}
