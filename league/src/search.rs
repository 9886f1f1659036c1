use crate::{League, Player, Team};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults<'a> {
    pub teams: Vec<&'a Team>,
    pub players: Vec<&'a Player>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.teams.len() + self.players.len()
    }
}

/// Case-insensitive substring search over teams and players.
///
/// Teams match on name, city or country. Players match on name, position
/// code or the name of the team they play for. A blank query matches nothing.
pub fn search<'a>(league: &'a League, query: &str) -> SearchResults<'a> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }
    let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let teams = league
        .teams
        .iter()
        .filter(|t| hit(&t.name) || hit(&t.city) || hit(&t.country))
        .collect();

    let players = league
        .players
        .iter()
        .filter(|p| {
            hit(&p.name)
                || hit(p.position.code())
                || league.team_by_id(&p.team_id).is_some_and(|t| hit(&t.name))
        })
        .collect();

    SearchResults { teams, players }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_matches_nothing() {
        let league = League::aebl();
        assert!(search(&league, "").is_empty());
        assert!(search(&league, "   ").is_empty());
    }

    #[test]
    fn team_matches_on_country_case_insensitively() {
        let league = League::aebl();
        let results = search(&league, "KENYA");
        assert_eq!(results.teams.len(), 1);
        assert_eq!(results.teams[0].id, "nairobi-warriors");
        assert!(results.players.is_empty());
    }

    #[test]
    fn players_match_through_their_team_name() {
        let league = League::aebl();
        let results = search(&league, "lions");
        assert_eq!(results.teams.len(), 1);
        let names: Vec<&str> = results.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Chukwudi Okonkwo", "Emeka Nwosu"]);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn players_match_on_position_code() {
        let league = League::aebl();
        let results = search(&league, "pg");
        assert!(results.players.iter().all(|p| p.position.code() == "PG"));
        assert_eq!(results.players.len(), 2);
    }
}
