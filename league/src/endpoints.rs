//! JSON payloads for the `--dump` command. Shapes follow the league's public
//! feed: `{ "teams": [...] }`, `{ "team", "roster", "matches" }` and
//! `{ "matches": [...] }`.

use crate::{League, LeagueError, MatchStatus};
use serde_json::{Value, json};

pub fn teams_payload(league: &League) -> Value {
    json!({ "teams": league.teams })
}

/// Team profile with roster and every match the team is involved in.
pub fn team_payload(league: &League, id: &str) -> Result<Value, LeagueError> {
    let team = league
        .team_by_id(id)
        .ok_or_else(|| LeagueError::TeamNotFound(id.to_string()))?;
    let roster = league.players_by_team(&team.id);
    let matches: Vec<_> = league.matches.iter().filter(|m| m.involves(&team.id)).collect();
    Ok(json!({ "team": team, "roster": roster, "matches": matches }))
}

/// Matches, optionally filtered by status. Unrecognised statuses return everything.
pub fn matches_payload(league: &League, status: Option<&str>) -> Value {
    match status.and_then(MatchStatus::parse) {
        Some(status) => json!({ "matches": league.matches_by_status(status) }),
        None => json!({ "matches": league.matches }),
    }
}

pub fn error_payload(err: &LeagueError) -> Value {
    match err {
        LeagueError::TeamNotFound(_) => json!({ "error": "Team not found" }),
        other => json!({ "error": other.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teams_payload_lists_every_team() {
        let league = League::aebl();
        let payload = teams_payload(&league);
        assert_eq!(payload["teams"].as_array().unwrap().len(), 8);
        assert_eq!(payload["teams"][0]["primaryColor"], "#FF6B00");
    }

    #[test]
    fn team_payload_includes_roster_and_matches() {
        let league = League::aebl();
        let payload = team_payload(&league, "cairo-pharaohs").unwrap();
        assert_eq!(payload["team"]["name"], "Cairo Pharaohs");
        assert_eq!(payload["roster"].as_array().unwrap().len(), 2);
        assert_eq!(payload["matches"].as_array().unwrap().len(), 2);
        assert_eq!(payload["roster"][0]["teamId"], "cairo-pharaohs");
    }

    #[test]
    fn unknown_team_is_not_found() {
        let league = League::aebl();
        let err = team_payload(&league, "nope").unwrap_err();
        assert_eq!(err, LeagueError::TeamNotFound("nope".into()));
        assert_eq!(error_payload(&err)["error"], "Team not found");
    }

    #[test]
    fn matches_payload_filters_known_statuses_only() {
        let league = League::aebl();
        let finished = matches_payload(&league, Some("finished"));
        assert_eq!(finished["matches"].as_array().unwrap().len(), 4);
        let live = matches_payload(&league, Some("live"));
        assert!(live["matches"].as_array().unwrap().is_empty());
        let bogus = matches_payload(&league, Some("postponed"));
        assert_eq!(bogus["matches"].as_array().unwrap().len(), 8);
        assert_eq!(matches_payload(&league, None)["matches"].as_array().unwrap().len(), 8);
    }
}
