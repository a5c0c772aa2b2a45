// src/csv.rs
//
// Record → row shaping. Column order is fixed; `file` does the actual writing.

use std::fmt::Debug;

use crate::config::consts::MISSING;
use crate::data::{ or_missing, ProfileRecord };

pub const HEADERS: [&str; 17] = [
    "Name",
    "Level",
    "Location",
    "Status",
    "Total Games",
    "Total Badges",
    "Total Friends",
    "Avatar URL",
    "Background URL",
    "Total Playtime Hours on Recent Games",
    "Date of Creation",
    "Recent Activity",
    "Profile Description",
    "Top Friends Names",
    "Top Friends Profile Links",
    "Top Friends Online Status",
    "Top Friends Current Game Playing (if any)",
];

/// One data row, same length and order as `HEADERS`.
pub fn record_row(r: &ProfileRecord) -> Vec<String> {
    let names = list(r.friends.iter().map(|f| Some(f.name.as_str())));
    let links = list(r.friends.iter().map(|f| f.profile_link.as_deref()));
    let statuses = list(r.friends.iter().map(|f| f.status.as_deref()));
    let games = list(r.friends.iter().map(|f| f.current_game.as_deref()));

    vec![
        or_missing(&r.name),
        or_missing(&r.level),
        or_missing(&r.location),
        or_missing(&r.status),
        or_missing(&r.total_games),
        or_missing(&r.total_badges),
        or_missing(&r.total_friends),
        or_missing(&r.avatar_url),
        or_missing(&r.background_url),
        or_missing(&r.total_playtime_hours),
        or_missing(&r.date_of_creation),
        or_missing(&r.recent_activity),
        or_missing(&r.profile_description),
        names,
        links,
        statuses,
        games,
    ]
}

/// List columns use the collection's debug form: `["a", "N/A"]`.
fn list<'a>(items: impl Iterator<Item = Option<&'a str>>) -> String {
    debug_repr(&items.map(|v| v.unwrap_or(MISSING)).collect::<Vec<_>>())
}

fn debug_repr<T: Debug>(v: &T) -> String {
    format!("{v:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Friend;

    #[test]
    fn row_matches_header_width() {
        assert_eq!(record_row(&ProfileRecord::default()).len(), HEADERS.len());
    }

    #[test]
    fn empty_record_is_all_missing_with_empty_lists() {
        let row = record_row(&ProfileRecord::default());
        assert!(row[..13].iter().all(|c| c == "N/A"));
        assert!(row[13..].iter().all(|c| c == "[]"));
    }

    #[test]
    fn friend_columns_line_up() {
        let rec = ProfileRecord {
            friends: vec![
                Friend {
                    name: s!("Alyx"),
                    profile_link: Some(s!("https://steamcommunity.com/id/alyx")),
                    status: Some(s!("Online")),
                    current_game: None,
                },
                Friend {
                    name: s!("Barney"),
                    profile_link: None,
                    status: Some(s!("In-Game")),
                    current_game: Some(s!("Half-Life 3")),
                },
            ],
            ..Default::default()
        };
        let row = record_row(&rec);
        assert_eq!(row[13], r#"["Alyx", "Barney"]"#);
        assert_eq!(row[14], r#"["https://steamcommunity.com/id/alyx", "N/A"]"#);
        assert_eq!(row[15], r#"["Online", "In-Game"]"#);
        assert_eq!(row[16], r#"["N/A", "Half-Life 3"]"#);
    }

    #[test]
    fn numbers_render_plainly() {
        let rec = ProfileRecord {
            level: Some(7),
            total_playtime_hours: Some(13.5),
            ..Default::default()
        };
        let row = record_row(&rec);
        assert_eq!(row[1], "7");
        assert_eq!(row[9], "13.5");
    }
}
