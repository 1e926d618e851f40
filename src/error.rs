use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Error related to an endpoint name absent from the catalog
    UnknownEndpoint,
    /// Error related to a caller parameter set failing an endpoint's declared constraints
    Validation,
    /// Error related to a catalog entry violating the schema invariants
    Schema,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn unknown_endpoint<S: Into<String>>(name: S) -> Self {
        UnknownEndpoint { name: name.into() }.into()
    }

    pub fn missing_parameter(name: &'static str) -> Self {
        MissingParameter { name }.into()
    }

    pub fn missing_parameter_group(names: &'static [&'static str]) -> Self {
        MissingParameterGroup { names }.into()
    }

    pub fn schema<S: Into<String>>(endpoint: &'static str, reason: S) -> Self {
        SchemaViolation {
            endpoint,
            reason: reason.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// The caller asked for an endpoint name that is not in the catalog.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct UnknownEndpoint {
    pub name: String,
}

impl fmt::Display for UnknownEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown endpoint `{}`", self.name)
    }
}

impl StdError for UnknownEndpoint {}

/// A parameter the endpoint declares as required was not supplied and has no default.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct MissingParameter {
    pub name: &'static str,
}

impl fmt::Display for MissingParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required parameter `{}`", self.name)
    }
}

impl StdError for MissingParameter {}

/// A group of parameters that must travel together was only partially supplied.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct MissingParameterGroup {
    pub names: &'static [&'static str],
}

impl fmt::Display for MissingParameterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "missing required parameter group `{}` (all must be supplied)",
            self.names.join(" + ")
        )
    }
}

impl StdError for MissingParameterGroup {}

/// A catalog entry violates the schema invariants. Detected at catalog
/// validation time; reaching this during resolution means the table shipped
/// without being validated.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SchemaViolation {
    pub endpoint: &'static str,
    pub reason: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid catalog entry `{}`: {}",
            self.endpoint, self.reason
        )
    }
}

impl StdError for SchemaViolation {}

impl From<UnknownEndpoint> for Error {
    fn from(err: UnknownEndpoint) -> Self {
        Error::with_source(Kind::UnknownEndpoint, err)
    }
}

impl From<MissingParameter> for Error {
    fn from(err: MissingParameter) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<MissingParameterGroup> for Error {
    fn from(err: MissingParameterGroup) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<SchemaViolation> for Error {
    fn from(err: SchemaViolation) -> Self {
        Error::with_source(Kind::Schema, err)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_html_form::ser::Error> for Error {
    fn from(e: serde_html_form::ser::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_display_should_name_parameter() {
        let err = MissingParameter { name: "season" };

        assert_eq!(err.to_string(), "missing required parameter `season`");
    }

    #[test]
    fn missing_group_display_should_join_names() {
        let err = MissingParameterGroup {
            names: &["startDate", "endDate"],
        };

        assert_eq!(
            err.to_string(),
            "missing required parameter group `startDate + endDate` (all must be supplied)"
        );
    }

    #[test]
    fn unknown_endpoint_into_error_should_carry_kind() {
        let error: Error = UnknownEndpoint {
            name: "nope".to_owned(),
        }
        .into();

        assert_eq!(error.kind(), Kind::UnknownEndpoint);
        assert!(error.to_string().contains("nope"));
    }

    #[test]
    fn downcast_should_recover_source() {
        let error: Error = MissingParameter { name: "gamePk" }.into();

        let source = error
            .downcast_ref::<MissingParameter>()
            .expect("source should downcast");
        assert_eq!(source.name, "gamePk");
    }
}
