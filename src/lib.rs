#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod catalog;
pub mod docs;
pub mod error;
pub mod params;
pub mod resolve;

pub use catalog::EndpointDefinition;
pub use params::{Params, Value};
pub use resolve::Resolver;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Base address of the MLB Stats API. Every catalog template is relative to
/// this; [`Resolver::new`] accepts an alternative base.
pub const BASE_URL: &str = "https://statsapi.mlb.com/api/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_should_parse_with_trailing_slash() {
        let base = url::Url::parse(BASE_URL).expect("base URL parses");
        assert!(base.path().ends_with('/'), "templates concatenate directly");
    }

    #[test]
    fn catalog_should_contain_game() {
        assert!(catalog::endpoint("game").is_some());
        assert!(catalog::endpoint("no_such_endpoint").is_none());
    }
}
