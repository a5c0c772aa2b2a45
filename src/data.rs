// src/data.rs
//
// The one record a run produces. Built once by `specs::extract_profile`,
// then only read (CSV row, console summary).

use std::fmt::Display;

use crate::config::consts::MISSING;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileRecord {
    // identity
    pub name: Option<String>,
    pub level: Option<u32>,
    pub location: Option<String>,
    pub status: Option<String>,

    // media
    pub avatar_url: Option<String>,
    pub background_url: Option<String>,

    // counters
    pub total_games: Option<u32>,
    pub total_badges: Option<u32>,
    pub total_friends: Option<u32>,

    /// Sum over recent games. `None` when there are no game entries at all.
    pub total_playtime_hours: Option<f64>,
    pub date_of_creation: Option<String>,
    pub recent_activity: Option<String>,
    pub profile_description: Option<String>,

    pub games: Vec<Game>,
    pub friends: Vec<Friend>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub name: String,
    pub hours_played: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Friend {
    pub name: String,
    pub profile_link: Option<String>,
    pub status: Option<String>,
    /// Only set when `status` is "In-Game".
    pub current_game: Option<String>,
}

/// Render an optional scalar, with the missing sentinel for `None`.
pub fn or_missing<T: Display>(v: &Option<T>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => s!(MISSING),
    }
}

impl ProfileRecord {
    /// `key: value` pairs for every scalar field, in column order.
    /// `games` and `friends` are left out.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", or_missing(&self.name)),
            ("level", or_missing(&self.level)),
            ("location", or_missing(&self.location)),
            ("status", or_missing(&self.status)),
            ("total_games", or_missing(&self.total_games)),
            ("total_badges", or_missing(&self.total_badges)),
            ("total_friends", or_missing(&self.total_friends)),
            ("avatar_url", or_missing(&self.avatar_url)),
            ("background_url", or_missing(&self.background_url)),
            ("total_playtime_hours_on_recent_games", or_missing(&self.total_playtime_hours)),
            ("date_of_creation", or_missing(&self.date_of_creation)),
            ("recent_activity", or_missing(&self.recent_activity)),
            ("profile_description", or_missing(&self.profile_description)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_skips_lists_and_marks_missing() {
        let rec = ProfileRecord {
            name: Some(s!("Gordon")),
            level: Some(12),
            games: vec![Game { name: s!("Half-Life"), hours_played: Some(1.5) }],
            ..Default::default()
        };
        let summary = rec.summary();
        assert_eq!(summary.len(), 13);
        assert_eq!(summary[0], ("name", s!("Gordon")));
        assert_eq!(summary[1], ("level", s!("12")));
        assert_eq!(summary[2], ("location", s!("N/A")));
        assert!(summary.iter().all(|(k, _)| *k != "games" && *k != "friends"));
    }

    #[test]
    fn empty_text_is_not_missing() {
        assert_eq!(or_missing(&Some(s!(""))), "");
        assert_eq!(or_missing::<String>(&None), "N/A");
    }
}
