// src/specs/games.rs
//! Recent games: name plus hours on record.

use scraper::Html;

use crate::config::consts::HOURS_SUFFIX;
use crate::core::html::{ all, first_in, text };
use crate::core::sanitize::before;
use crate::data::Game;
use crate::error::FieldIssue;
use crate::report::Report;
use super::{ settle, Extracted };

/// One `div.recent_game` before its playtime issue (if any) has been reported.
#[derive(Debug, PartialEq)]
pub struct GameEntry {
    pub name: String,
    pub hours: Extracted<f64>,
}

impl GameEntry {
    pub fn settle(self, report: &mut dyn Report) -> Game {
        Game {
            hours_played: settle(report, self.hours),
            name: self.name,
        }
    }
}

/// Entries without a `.game_name` are skipped; a bad playtime only unsets that entry's hours.
pub fn recent_games(doc: &Html) -> Vec<GameEntry> {
    all(doc, "div.recent_game")
        .into_iter()
        .filter_map(|game| {
            let name = first_in(game, "div.game_name").map(text)?;
            let hours = match first_in(game, "div.game_info_details") {
                None => Ok(None),
                Some(details) => parse_hours(&text(details)).map(Some).map_err(|raw| {
                    FieldIssue::new(
                        "games.hours_played",
                        format!("failed to parse playtime for {name}: {raw:?}"),
                    )
                }),
            };
            Some(GameEntry { name, hours })
        })
        .collect()
}

/// "13.1 hrs on record" → 13.1. On failure returns the text that was tried.
pub fn parse_hours(details: &str) -> Result<f64, String> {
    let raw = before(details, HOURS_SUFFIX);
    raw.parse().map_err(|_| raw.to_string())
}

/// `None` when there are no games at all; never a synthetic 0.
pub fn total_playtime(games: &[Game]) -> Option<f64> {
    if games.is_empty() {
        return None;
    }
    Some(games.iter().filter_map(|g| g.hours_played).sum())
}
