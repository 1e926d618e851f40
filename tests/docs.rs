//! Integration tests for the rendered endpoint reference.

use mlb_statsapi_sdk::{catalog, docs};

/// Pulls the bullet items out of one `###` section of rendered text.
fn section_items(text: &str, heading: &str) -> Vec<String> {
    let start = text
        .find(heading)
        .unwrap_or_else(|| panic!("missing section `{heading}`"));
    text[start + heading.len()..]
        .lines()
        .skip(1)
        .take_while(|line| line.starts_with("* "))
        .map(|line| line.trim_start_matches("* ").to_owned())
        .collect()
}

mod rendering {
    use super::*;

    #[test]
    fn render_should_cover_every_endpoint_once() {
        let text = docs::render();

        let sections = text.matches("## Endpoint: `").count();
        assert_eq!(sections, catalog::names().len());
        assert!(text.contains("## Endpoint: `game`"));
        assert!(text.contains("## Endpoint: `jobs_umpires`"));
    }

    #[test]
    fn render_should_be_deterministic() {
        assert_eq!(docs::render(), docs::render());
    }

    #[test]
    fn url_section_should_show_the_full_template() {
        let definition = catalog::endpoint("draft").expect("draft is in the catalog");
        let text = docs::render_endpoint("draft", definition);

        assert!(
            text.contains(
                "### URL: `https://statsapi.mlb.com/api/{ver}/draft{prospects}{year}{latest}`"
            ),
            "got: {text}"
        );
    }

    #[test]
    fn note_should_render_only_when_present() {
        let awards = catalog::endpoint("awards").expect("awards is in the catalog");
        assert!(docs::render_endpoint("awards", awards).contains("### Note"));

        let conferences = catalog::endpoint("conferences").expect("conferences is in the catalog");
        assert!(!docs::render_endpoint("conferences", conferences).contains("### Note"));
    }

    #[test]
    fn all_parameters_should_list_path_then_query_names() {
        let definition = catalog::endpoint("attendance").expect("attendance is in the catalog");
        let text = docs::render_endpoint("attendance", definition);

        let items = section_items(&text, "### All Parameters");
        assert_eq!(
            items,
            [
                "ver",
                "teamId",
                "leagueId",
                "season",
                "date",
                "leagueListId",
                "gameType",
                "fields"
            ]
        );
    }
}

mod round_trip {
    use super::*;

    /// The rendered required-parameter section and the engine's own
    /// requirement flattening must agree for every endpoint.
    #[test]
    fn required_section_should_match_engine_flattening() {
        for name in catalog::names() {
            let definition = catalog::endpoint(name).expect("listed name resolves");
            let text = docs::render_endpoint(name, definition);

            let rendered = section_items(&text, "### Required Parameters");
            let flattened = definition.required_display();
            if flattened.is_empty() {
                assert_eq!(rendered, ["*None*"], "`{name}` should render as empty");
            } else {
                assert_eq!(rendered, flattened, "`{name}` sections disagree");
            }
        }
    }

    #[test]
    fn grouped_requirement_should_render_joined() {
        let definition =
            catalog::endpoint("transactions").expect("transactions is in the catalog");
        let text = docs::render_endpoint("transactions", definition);

        let items = section_items(&text, "### Required Parameters");
        assert_eq!(items, ["teamId", "playerId", "date", "startDate + endDate"]);
    }

    #[test]
    fn version_placeholder_should_never_be_listed_as_required() {
        for name in catalog::names() {
            let definition = catalog::endpoint(name).expect("listed name resolves");
            assert!(
                !definition
                    .required_display()
                    .iter()
                    .any(|item| item == catalog::VERSION_PARAM),
                "`{name}` lists the version placeholder as required"
            );
        }
    }
}
