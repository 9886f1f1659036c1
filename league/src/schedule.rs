use crate::{League, Match, MatchStatus};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScheduleFilter {
    #[default]
    All,
    Finished,
    Scheduled,
}

impl ScheduleFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleFilter::All => "All Matches",
            ScheduleFilter::Finished => "Results",
            ScheduleFilter::Scheduled => "Upcoming",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ScheduleFilter::All => ScheduleFilter::Finished,
            ScheduleFilter::Finished => ScheduleFilter::Scheduled,
            ScheduleFilter::Scheduled => ScheduleFilter::All,
        }
    }

    fn admits(&self, m: &Match) -> bool {
        match self {
            ScheduleFilter::All => true,
            ScheduleFilter::Finished => m.status == MatchStatus::Finished,
            ScheduleFilter::Scheduled => m.status == MatchStatus::Scheduled,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchDay<'a> {
    pub date: NaiveDate,
    pub matches: Vec<&'a Match>,
}

/// Filtered matches, newest date first, grouped by calendar day.
pub fn schedule(league: &League, filter: ScheduleFilter) -> Vec<MatchDay<'_>> {
    let mut matches: Vec<&Match> = league.matches.iter().filter(|m| filter.admits(m)).collect();
    matches.sort_by(|a, b| b.date.cmp(&a.date));

    let mut days: Vec<MatchDay<'_>> = Vec::new();
    for m in matches {
        match days.last_mut() {
            Some(day) if day.date == m.date => day.matches.push(m),
            _ => days.push(MatchDay { date: m.date, matches: vec![m] }),
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_grouped_newest_first() {
        let league = League::aebl();
        let days = schedule(&league, ScheduleFilter::All);
        let dates: Vec<String> = days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-10-06", "2025-10-05", "2025-10-02", "2025-10-01"]);
        assert!(days.iter().all(|d| d.matches.len() == 2));
    }

    #[test]
    fn finished_filter_drops_scheduled_days() {
        let league = League::aebl();
        let days = schedule(&league, ScheduleFilter::Finished);
        assert_eq!(days.len(), 2);
        assert!(
            days.iter()
                .flat_map(|d| d.matches.iter())
                .all(|m| m.status == MatchStatus::Finished)
        );
    }

    #[test]
    fn filter_cycles_through_all_variants() {
        let start = ScheduleFilter::default();
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn empty_league_has_empty_schedule() {
        assert!(schedule(&League::default(), ScheduleFilter::All).is_empty());
    }
}
