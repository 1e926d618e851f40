//! The endpoint table.
//!
//! One entry per named endpoint, transcribed from the API's public surface.
//! Templates are relative to [`crate::BASE_URL`]. Authenticated routes
//! (`v1/analytics`, game `guids` statcast feeds) are deliberately absent.

use phf::phf_map;

use super::{EndpointDefinition, FlagSpec, PathParam, Requirement, TextSpec};
use Requirement::{All, Single};

type Param = (&'static str, PathParam);

/// The `{ver}` segment every template starts with; only the default differs.
const fn ver(default: &'static str) -> Param {
    required_with("ver", default)
}

/// Required segment that falls back to `default` when the caller omits it.
const fn required_with(name: &'static str, default: &'static str) -> Param {
    (
        name,
        PathParam::Text(TextSpec {
            default: Some(default),
            leading_slash: false,
            trailing_slash: false,
            required: true,
        }),
    )
}

/// Required segment with no fallback; omission fails resolution.
const fn required(name: &'static str) -> Param {
    (
        name,
        PathParam::Text(TextSpec {
            default: None,
            leading_slash: false,
            trailing_slash: false,
            required: true,
        }),
    )
}

/// Optional segment preceded by a `/` when supplied.
const fn optional_slug(name: &'static str) -> Param {
    (
        name,
        PathParam::Text(TextSpec {
            default: None,
            leading_slash: true,
            trailing_slash: false,
            required: false,
        }),
    )
}

/// Boolean switch splicing `on` into the path, off by default.
const fn switch(name: &'static str, on: &'static str) -> Param {
    (
        name,
        PathParam::Flag(FlagSpec {
            default: false,
            on,
            off: "",
        }),
    )
}

/// Boolean switch that is on unless the caller turns it off.
const fn switch_on(name: &'static str, on: &'static str) -> Param {
    (
        name,
        PathParam::Flag(FlagSpec {
            default: true,
            on,
            off: "",
        }),
    )
}

pub static ENDPOINTS: phf::Map<&'static str, EndpointDefinition> = phf_map! {
    "attendance" => EndpointDefinition {
        url: "{ver}/attendance",
        path_params: &[ver("v1")],
        query_params: &[
            "teamId",
            "leagueId",
            "season",
            "date",
            "leagueListId",
            "gameType",
            "fields",
        ],
        required_params: &[Single("teamId"), Single("leagueId"), Single("leagueListId")],
        note: None,
    },
    "awards" => EndpointDefinition {
        url: "{ver}/awards{awardId}{recipients}",
        path_params: &[
            ver("v1"),
            optional_slug("awardId"),
            switch_on("recipients", "/recipients"),
        ],
        query_params: &["sportId", "leagueId", "season", "hydrate", "fields"],
        required_params: &[],
        note: Some("Call awards endpoint with no parameters to return a list of awardIds."),
    },
    "conferences" => EndpointDefinition {
        url: "{ver}/conferences",
        path_params: &[ver("v1")],
        query_params: &["conferenceId", "season", "fields"],
        required_params: &[],
        note: None,
    },
    "divisions" => EndpointDefinition {
        url: "{ver}/divisions",
        path_params: &[ver("v1")],
        query_params: &["divisionId", "leagueId", "sportId"],
        required_params: &[],
        note: Some("Call divisions endpoint with no parameters to return a list of divisions."),
    },
    "draft" => EndpointDefinition {
        url: "{ver}/draft{prospects}{year}{latest}",
        path_params: &[
            ver("v1"),
            switch("prospects", "/prospects"),
            // TODO: advance the fallback to the most recent draft year
            (
                "year",
                PathParam::Text(TextSpec {
                    default: Some("2019"),
                    leading_slash: true,
                    trailing_slash: false,
                    required: true,
                }),
            ),
            switch("latest", "/latest"),
        ],
        query_params: &[
            "limit",
            "fields",
            "round",
            "name",
            "school",
            "state",
            "country",
            "position",
            "teamId",
            "playerId",
            "bisPlayerId",
        ],
        required_params: &[],
        note: Some(
            "No query parameters are honored when \"latest\" endpoint is queried (year is still required). Prospects and Latest cannot be used together.",
        ),
    },
    "game" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/feed/live",
        path_params: &[ver("v1.1"), required_with("gamePk", "")],
        query_params: &["timecode", "hydrate", "fields"],
        required_params: &[],
        note: None,
    },
    "game_boxscore" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/boxscore",
        path_params: &[ver("v1"), required_with("gamePk", "")],
        query_params: &["timecode", "fields"],
        required_params: &[],
        note: None,
    },
    "game_changes" => EndpointDefinition {
        url: "{ver}/game/changes",
        path_params: &[ver("v1")],
        query_params: &["updatedSince", "sportId", "gameType", "season", "fields"],
        required_params: &[Single("updatedSince")],
        note: None,
    },
    "game_color" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/feed/color",
        path_params: &[ver("v1"), required_with("gamePk", "")],
        query_params: &["timecode", "fields"],
        required_params: &[],
        note: None,
    },
    "game_color_diff" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/feed/color/diffPatch",
        path_params: &[ver("v1"), required_with("gamePk", "")],
        query_params: &["startTimecode", "endTimecode"],
        required_params: &[All(&["startTimecode", "endTimecode"])],
        note: None,
    },
    "game_color_timestamps" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/feed/color/timestamps",
        path_params: &[ver("v1"), required_with("gamePk", "")],
        query_params: &[],
        required_params: &[],
        note: None,
    },
    "game_content" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/content",
        path_params: &[ver("v1"), required_with("gamePk", "")],
        query_params: &["highlightLimit"],
        required_params: &[],
        note: None,
    },
    "game_contextMetrics" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/contextMetrics",
        path_params: &[ver("v1"), required_with("gamePk", "")],
        query_params: &["timecode", "fields"],
        required_params: &[],
        note: None,
    },
    "game_diff" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/feed/live/diffPatch",
        path_params: &[ver("v1.1"), required_with("gamePk", "")],
        query_params: &["startTimecode", "endTimecode"],
        required_params: &[All(&["startTimecode", "endTimecode"])],
        note: None,
    },
    "game_timestamps" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/feed/live/timestamps",
        path_params: &[ver("v1.1"), required_with("gamePk", "")],
        query_params: &[],
        required_params: &[],
        note: None,
    },
    "game_winProbability" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/winProbability",
        path_params: &[ver("v1"), required_with("gamePk", "")],
        query_params: &["timecode", "fields"],
        required_params: &[],
        note: Some(
            "If you only want the current win probability for each team, try the game_contextMetrics endpoint instead.",
        ),
    },
    "game_linescore" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/linescore",
        path_params: &[ver("v1"), required_with("gamePk", "")],
        query_params: &["timecode", "fields"],
        required_params: &[],
        note: None,
    },
    "game_playByPlay" => EndpointDefinition {
        url: "{ver}/game/{gamePk}/playByPlay",
        path_params: &[ver("v1"), required_with("gamePk", "")],
        query_params: &["timecode", "fields"],
        required_params: &[],
        note: None,
    },
    "gamePace" => EndpointDefinition {
        url: "{ver}/gamePace",
        path_params: &[ver("v1")],
        query_params: &[
            "season",
            "teamIds",
            "leagueIds",
            "leagueListId",
            "sportId",
            "gameType",
            "startDate",
            "endDate",
            "venueIds",
            "orgType",
            "includeChildren",
            "fields",
        ],
        required_params: &[Single("season")],
        note: None,
    },
    "highLow" => EndpointDefinition {
        url: "{ver}/highLow/{orgType}",
        path_params: &[ver("v1"), required_with("orgType", "")],
        query_params: &[
            "statGroup",
            "sortStat",
            "season",
            "gameType",
            "teamId",
            "leagueId",
            "sportIds",
            "limit",
            "fields",
        ],
        required_params: &[Single("sortStat"), Single("season")],
        note: Some(
            "Valid values for orgType parameter: player, team, division, league, sport, types.",
        ),
    },
    "homeRunDerby" => EndpointDefinition {
        url: "{ver}/homeRunDerby/{gamePk}{bracket}{pool}",
        path_params: &[
            ver("v1"),
            required_with("gamePk", ""),
            switch("bracket", "/bracket"),
            switch("pool", "/pool"),
        ],
        query_params: &["fields"],
        required_params: &[],
        note: None,
    },
    "league" => EndpointDefinition {
        url: "{ver}/league",
        path_params: &[ver("v1")],
        query_params: &["sportId", "leagueIds", "seasons", "fields"],
        required_params: &[Single("sportId"), Single("leagueIds")],
        note: None,
    },
    "league_allStarBallot" => EndpointDefinition {
        url: "{ver}/league/{leagueId}/allStarBallot",
        path_params: &[ver("v1"), required_with("leagueId", "")],
        query_params: &["season", "fields"],
        required_params: &[Single("season")],
        note: None,
    },
    "league_allStarWriteIns" => EndpointDefinition {
        url: "{ver}/league/{leagueId}/allStarWriteIns",
        path_params: &[ver("v1"), required_with("leagueId", "")],
        query_params: &["season", "fields"],
        required_params: &[Single("season")],
        note: None,
    },
    "league_allStarFinalVote" => EndpointDefinition {
        url: "{ver}/league/{leagueId}/allStarFinalVote",
        path_params: &[ver("v1"), required_with("leagueId", "")],
        query_params: &["season", "fields"],
        required_params: &[Single("season")],
        note: None,
    },
    "people" => EndpointDefinition {
        url: "{ver}/people",
        path_params: &[ver("v1")],
        query_params: &["personIds", "hydrate", "fields"],
        required_params: &[Single("personIds")],
        note: None,
    },
    "people_changes" => EndpointDefinition {
        url: "{ver}/people/changes",
        path_params: &[ver("v1")],
        query_params: &["updatedSince", "fields"],
        required_params: &[],
        note: None,
    },
    "people_freeAgents" => EndpointDefinition {
        url: "{ver}/people/freeAgents",
        path_params: &[ver("v1")],
        query_params: &["leagueId", "order", "hydrate", "fields"],
        required_params: &[],
        note: None,
    },
    "person" => EndpointDefinition {
        url: "{ver}/people/{personId}",
        path_params: &[ver("v1"), required("personId")],
        query_params: &["hydrate", "fields"],
        required_params: &[],
        note: None,
    },
    "person_stats" => EndpointDefinition {
        url: "{ver}/people/{personId}/stats/game/{gamePk}",
        path_params: &[ver("v1"), required("personId"), required("gamePk")],
        query_params: &["fields"],
        required_params: &[],
        note: Some("Specify \"current\" instead of a gamePk for a player's current game stats."),
    },
    "jobs" => EndpointDefinition {
        url: "{ver}/jobs",
        path_params: &[ver("v1")],
        query_params: &["jobType", "sportId", "date", "fields"],
        required_params: &[Single("jobType")],
        note: None,
    },
    "jobs_umpires" => EndpointDefinition {
        url: "{ver}/jobs/umpires",
        path_params: &[ver("v1")],
        query_params: &["sportId", "date", "fields"],
        required_params: &[],
        note: None,
    },
    "jobs_umpire_games" => EndpointDefinition {
        url: "{ver}/jobs/umpires/games/{umpireId}",
        path_params: &[ver("v1"), required("umpireId")],
        query_params: &["season", "fields"],
        required_params: &[Single("season")],
        note: None,
    },
    "jobs_datacasters" => EndpointDefinition {
        url: "{ver}/jobs/datacasters",
        path_params: &[ver("v1")],
        query_params: &["sportId", "date", "fields"],
        required_params: &[],
        note: None,
    },
    "jobs_officialScorers" => EndpointDefinition {
        url: "{ver}/jobs/officialScorers",
        path_params: &[ver("v1")],
        query_params: &["timecode", "fields"],
        required_params: &[],
        note: None,
    },
    "schedule" => EndpointDefinition {
        url: "{ver}/schedule",
        path_params: &[ver("v1")],
        query_params: &[
            "scheduleType",
            "eventTypes",
            "hydrate",
            "teamId",
            "leagueId",
            "sportId",
            "gamePk",
            "gamePks",
            "venueIds",
            "gameTypes",
            "date",
            "startDate",
            "endDate",
            "opponentId",
            "fields",
        ],
        required_params: &[Single("sportId"), Single("gamePk"), Single("gamePks")],
        note: None,
    },
    "schedule_postseason" => EndpointDefinition {
        url: "{ver}/schedule/postseason",
        path_params: &[ver("v1")],
        query_params: &[
            "gameTypes",
            "seriesNumber",
            "teamId",
            "sportId",
            "season",
            "hydrate",
            "fields",
        ],
        required_params: &[],
        note: None,
    },
    "schedule_postseason_series" => EndpointDefinition {
        url: "{ver}/schedule/postseason/series",
        path_params: &[ver("v1")],
        query_params: &[
            "gameTypes",
            "seriesNumber",
            "teamId",
            "sportId",
            "season",
            "fields",
        ],
        required_params: &[],
        note: None,
    },
    "schedule_postseason_tuneIn" => EndpointDefinition {
        url: "{ver}/schedule/postseason/tuneIn",
        path_params: &[ver("v1")],
        query_params: &["teamId", "sportId", "season", "hydrate", "fields"],
        required_params: &[],
        note: Some("The schedule_postseason_tuneIn endpoint appears to return no data."),
    },
    "schedule_tied" => EndpointDefinition {
        url: "{ver}/schedule/games/tied",
        path_params: &[ver("v1")],
        query_params: &["gameTypes", "season", "hydrate", "fields"],
        required_params: &[Single("season")],
        note: None,
    },
    "seasons" => EndpointDefinition {
        url: "{ver}/seasons{all}",
        path_params: &[ver("v1"), switch("all", "/all")],
        query_params: &["season", "sportId", "divisionId", "leagueId", "fields"],
        required_params: &[Single("sportId"), Single("divisionId"), Single("leagueId")],
        note: Some(
            "Include \"all\" parameter with value of true to query all seasons. The divisionId and leagueId parameters are supported when \"all\" is used.",
        ),
    },
    "season" => EndpointDefinition {
        url: "{ver}/seasons/{seasonId}",
        path_params: &[ver("v1"), required("seasonId")],
        query_params: &["sportId", "fields"],
        required_params: &[Single("sportId")],
        note: None,
    },
    "sports" => EndpointDefinition {
        url: "{ver}/sports",
        path_params: &[ver("v1")],
        query_params: &["sportId", "fields"],
        required_params: &[],
        note: None,
    },
    "sports_players" => EndpointDefinition {
        url: "{ver}/sports/{sportId}/players",
        path_params: &[ver("v1"), required_with("sportId", "1")],
        query_params: &["season", "gameType", "fields"],
        required_params: &[Single("season")],
        note: None,
    },
    "standings" => EndpointDefinition {
        url: "{ver}/standings",
        path_params: &[ver("v1")],
        query_params: &[
            "leagueId",
            "season",
            "standingsTypes",
            "date",
            "hydrate",
            "fields",
        ],
        required_params: &[Single("leagueId")],
        note: None,
    },
    "stats" => EndpointDefinition {
        url: "{ver}/stats",
        path_params: &[ver("v1")],
        query_params: &[
            "stats",
            "playerPool",
            "position",
            "teamId",
            "leagueId",
            "limit",
            "offset",
            "group",
            "gameType",
            "season",
            "sportIds",
            "sortStat",
            "order",
            "hydrate",
            "fields",
            "personId",
            "metrics",
        ],
        required_params: &[Single("stats"), Single("group")],
        note: Some("If no limit is specified, the response will be limited to 50 records."),
    },
    "stats_leaders" => EndpointDefinition {
        url: "{ver}/stats/leaders",
        path_params: &[ver("v1")],
        query_params: &[
            "leaderCategories",
            "playerPool",
            "leaderGameTypes",
            "statGroup",
            "season",
            "leagueId",
            "sportId",
            "hydrate",
            "limit",
            "fields",
            "statType",
        ],
        required_params: &[Single("leaderCategories")],
        note: Some(
            "If excluding season parameter to get all time leaders, include statType=statsSingleSeason or you will likely not get any results.",
        ),
    },
    "stats_streaks" => EndpointDefinition {
        url: "{ver}/stats/streaks",
        path_params: &[ver("v1")],
        query_params: &[
            "streakType",
            "streakSpan",
            "gameType",
            "season",
            "sportId",
            "limit",
            "hydrate",
            "fields",
        ],
        required_params: &[
            Single("streakType"),
            Single("streakSpan"),
            Single("season"),
            Single("sportId"),
            Single("limit"),
        ],
        note: Some(
            "Valid streakType values: \"hittingStreakOverall\" \"hittingStreakHome\" \"hittingStreakAway\" \"onBaseOverall\" \"onBaseHome\" \"onBaseAway\". Valid streakSpan values: \"career\" \"season\" \"currentStreak\" \"currentStreakInSeason\" \"notable\" \"notableInSeason\".",
        ),
    },
    "team" => EndpointDefinition {
        url: "{ver}/teams/{teamId}",
        path_params: &[ver("v1"), required("teamId")],
        query_params: &["season", "sportId", "hydrate", "fields"],
        required_params: &[],
        note: None,
    },
    "team_alumni" => EndpointDefinition {
        url: "{ver}/teams/{teamId}/alumni",
        path_params: &[ver("v1"), required("teamId")],
        query_params: &["season", "group", "hydrate", "fields"],
        required_params: &[Single("season"), Single("group")],
        note: None,
    },
    "team_coaches" => EndpointDefinition {
        url: "{ver}/teams/{teamId}/coaches",
        path_params: &[ver("v1"), required("teamId")],
        query_params: &["season", "date", "fields"],
        required_params: &[],
        note: None,
    },
    "team_leaders" => EndpointDefinition {
        url: "{ver}/teams/{teamId}/leaders",
        path_params: &[ver("v1"), required("teamId")],
        query_params: &[
            "leaderCategories",
            "season",
            "leaderGameTypes",
            "hydrate",
            "limit",
            "fields",
        ],
        required_params: &[Single("leaderCategories"), Single("season")],
        note: None,
    },
    "team_personnel" => EndpointDefinition {
        url: "{ver}/teams/{teamId}/personnel",
        path_params: &[ver("v1"), required("teamId")],
        query_params: &["date", "fields"],
        required_params: &[],
        note: None,
    },
    "team_roster" => EndpointDefinition {
        url: "{ver}/teams/{teamId}/roster",
        path_params: &[ver("v1"), required("teamId")],
        query_params: &["rosterType", "season", "date", "hydrate", "fields"],
        required_params: &[],
        note: None,
    },
    "team_stats" => EndpointDefinition {
        url: "{ver}/teams/{teamId}/stats",
        path_params: &[ver("v1"), required("teamId")],
        query_params: &[
            "season",
            "group",
            "gameType",
            "stats",
            "sportIds",
            "sitCodes",
            "fields",
        ],
        required_params: &[Single("season"), Single("group")],
        note: Some(
            "Use meta('statGroups') to look up valid values for group, meta('statTypes') for valid values for stats, and meta('situationCodes') for valid values for sitCodes. Use sitCodes with stats=statSplits.",
        ),
    },
    "teams" => EndpointDefinition {
        url: "{ver}/teams",
        path_params: &[ver("v1")],
        query_params: &[
            "season",
            "activeStatus",
            "leagueIds",
            "sportId",
            "sportIds",
            "gameType",
            "hydrate",
            "fields",
        ],
        required_params: &[],
        note: None,
    },
    "teams_history" => EndpointDefinition {
        url: "{ver}/teams/history",
        path_params: &[ver("v1")],
        query_params: &["teamIds", "startSeason", "endSeason", "fields"],
        required_params: &[Single("teamIds")],
        note: None,
    },
    "teams_stats" => EndpointDefinition {
        url: "{ver}/teams/stats",
        path_params: &[ver("v1")],
        query_params: &[
            "season",
            "sportIds",
            "group",
            "gameType",
            "stats",
            "order",
            "sortStat",
            "fields",
            "startDate",
            "endDate",
        ],
        required_params: &[Single("season"), Single("group"), Single("stats")],
        note: Some(
            "Use meta('statGroups') to look up valid values for group, and meta('statTypes') for valid values for stats.",
        ),
    },
    "teams_affiliates" => EndpointDefinition {
        url: "{ver}/teams/affiliates",
        path_params: &[ver("v1")],
        query_params: &["teamIds", "sportId", "season", "hydrate", "fields"],
        required_params: &[Single("teamIds")],
        note: None,
    },
    "transactions" => EndpointDefinition {
        url: "{ver}/transactions",
        path_params: &[ver("v1")],
        query_params: &[
            "teamId",
            "playerId",
            "date",
            "startDate",
            "endDate",
            "sportId",
            "fields",
        ],
        required_params: &[
            Single("teamId"),
            Single("playerId"),
            Single("date"),
            All(&["startDate", "endDate"]),
        ],
        note: None,
    },
    "venue" => EndpointDefinition {
        url: "{ver}/venues",
        path_params: &[ver("v1")],
        query_params: &["venueIds", "season", "hydrate", "fields"],
        required_params: &[Single("venueIds")],
        note: None,
    },
    "meta" => EndpointDefinition {
        url: "{ver}/{type}",
        path_params: &[ver("v1"), required("type")],
        query_params: &[],
        required_params: &[],
        note: Some(
            "The meta endpoint is used to retrieve values to be used within other API calls. Available types: awards, baseballStats, eventTypes, gameStatus, gameTypes, hitTrajectories, jobTypes, languages, leagueLeaderTypes, logicalEvents, metrics, pitchCodes, pitchTypes, platforms, positions, reviewReasons, rosterTypes, scheduleEventTypes, situationCodes, sky, standingsTypes, statGroups, statTypes, windDirection.",
        ),
    },
};
