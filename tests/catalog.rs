//! Integration tests for the endpoint catalog.
//!
//! The table is static data, so these tests pin its schema invariants: the
//! shipped catalog must pass validation, every template must carry the
//! version placeholder, and the quirkier entries (conditional segments,
//! grouped requirements) must keep the shapes the resolution tests rely on.

use mlb_statsapi_sdk::catalog::{self, PathParam, Requirement};

mod schema {
    use super::*;

    #[test]
    fn shipped_catalog_should_validate() {
        catalog::validate().expect("every shipped entry satisfies the schema invariants");
    }

    #[test]
    fn names_should_be_sorted_and_unique() {
        let names = catalog::names();

        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), catalog::ENDPOINTS.len());
    }

    #[test]
    fn every_template_should_lead_with_version() {
        for name in catalog::names() {
            let definition = catalog::endpoint(name).expect("listed name resolves");
            assert!(
                definition.url.starts_with("{ver}"),
                "`{name}` template should start with the version placeholder"
            );
            let (first, _) = definition.path_params.first().expect("at least one path param");
            assert_eq!(*first, "ver", "`{name}` first path param should be ver");
        }
    }

    #[test]
    fn path_and_query_names_should_never_collide() {
        for name in catalog::names() {
            let definition = catalog::endpoint(name).expect("listed name resolves");
            for (param, _) in definition.path_params {
                assert!(
                    !definition.query_params.contains(param),
                    "`{name}` declares `{param}` as both path and query"
                );
            }
        }
    }

    #[test]
    fn required_terms_should_reference_declared_names() {
        for name in catalog::names() {
            let definition = catalog::endpoint(name).expect("listed name resolves");
            for term in definition.required_params {
                for required in term.names() {
                    assert!(
                        definition.path_param(required).is_some()
                            || definition.query_params.contains(required),
                        "`{name}` requires undeclared parameter `{required}`"
                    );
                }
            }
        }
    }
}

mod entries {
    use super::*;

    #[test]
    fn game_should_use_v1_1_feed() {
        let game = catalog::endpoint("game").expect("game is in the catalog");

        assert_eq!(game.url, "{ver}/game/{gamePk}/feed/live");
        let PathParam::Text(ver) = game.path_param("ver").expect("ver spec") else {
            panic!("ver should be a text parameter");
        };
        assert_eq!(ver.default, Some("v1.1"));
    }

    #[test]
    fn draft_should_declare_both_switch_states() {
        let draft = catalog::endpoint("draft").expect("draft is in the catalog");

        let PathParam::Flag(prospects) = draft.path_param("prospects").expect("prospects spec")
        else {
            panic!("prospects should be a flag parameter");
        };
        assert!(!prospects.default);
        assert_eq!(prospects.on, "/prospects");
        assert_eq!(prospects.off, "");

        let PathParam::Flag(latest) = draft.path_param("latest").expect("latest spec") else {
            panic!("latest should be a flag parameter");
        };
        assert_eq!(latest.on, "/latest");
    }

    #[test]
    fn awards_recipients_should_default_on() {
        let awards = catalog::endpoint("awards").expect("awards is in the catalog");

        let PathParam::Flag(recipients) = awards.path_param("recipients").expect("recipients spec")
        else {
            panic!("recipients should be a flag parameter");
        };
        assert!(recipients.default);
    }

    #[test]
    fn transactions_should_group_its_date_range() {
        let transactions = catalog::endpoint("transactions").expect("transactions is in the catalog");

        let group = transactions
            .required_params
            .iter()
            .find_map(|term| match term {
                Requirement::All(names) => Some(*names),
                _ => None,
            })
            .expect("transactions should carry a grouped requirement");
        assert_eq!(group, ["startDate", "endDate"]);
    }

    #[test]
    fn umpire_listing_should_be_present() {
        // Dropped from one upstream export by accident; pinned here so it
        // does not regress out of the table again.
        assert!(catalog::endpoint("jobs_umpires").is_some());
        assert!(catalog::endpoint("jobs_umpire_games").is_some());
    }

    #[test]
    fn free_agents_should_take_league_as_query() {
        let free_agents =
            catalog::endpoint("people_freeAgents").expect("people_freeAgents is in the catalog");

        assert!(free_agents.path_param("leagueId").is_none());
        assert!(free_agents.query_params.contains(&"leagueId"));
    }
}
