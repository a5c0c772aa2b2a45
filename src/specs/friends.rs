// src/specs/friends.rs
//! Top friends block.
//!
//! Layout inside each `div.friendBlockContent`:
//!
//! ```text
//! Name<br>
//! <span class="friendSmallText">In-Game<br>Half-Life 3</span>
//! ```
//!
//! Lines are read by position. If Steam reorders them the fields come out wrong
//! rather than failing.

use scraper::{ ElementRef, Html };

use crate::config::consts::IN_GAME;
use crate::core::html::{ all, attr, first_in, text_lines, text_ws };
use crate::core::sanitize::after;
use crate::data::Friend;

pub fn friends(doc: &Html) -> Vec<Friend> {
    all(doc, "div.friendBlock").into_iter().filter_map(friend).collect()
}

fn friend(block: ElementRef<'_>) -> Option<Friend> {
    let content = first_in(block, "div.friendBlockContent")?;

    // Name is the first bare text line of the content, before any child element.
    let name = content
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|t| t.trim())
        .find(|t| !t.is_empty())?
        .to_string();

    let status_line = match first_in(content, ".friendSmallText") {
        Some(small) => Some(text_ws(small)),
        None => {
            let rest = text_lines(content).into_iter().skip(1).collect::<Vec<_>>();
            if rest.is_empty() { None } else { Some(rest.join(" ")) }
        }
    };
    let (status, current_game) = match status_line {
        Some(line) => classify_status(&line),
        None => (None, None),
    };

    Some(Friend {
        name,
        profile_link: first_in(block, "a.friendBlockLinkOverlay").and_then(|a| attr(a, "href")),
        status,
        current_game,
    })
}

/// `"In-Game Half-Life 3"` → `(In-Game, Half-Life 3)`; anything else is the status as-is.
pub fn classify_status(line: &str) -> (Option<String>, Option<String>) {
    match after(line, IN_GAME) {
        Some(rest) => {
            let game = rest.trim();
            let game = if game.is_empty() { None } else { Some(game.to_string()) };
            (Some(s!(IN_GAME)), game)
        }
        None => (Some(line.trim().to_string()), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(link: &str, inner: &str) -> String {
        format!(r#"<div class="friendBlock persona" data-miniprofile="1">
            <a class="friendBlockLinkOverlay" href="{link}"></a>
            <div class="playerAvatar"><img src="a.jpg"></div>
            <div class="friendBlockContent">
                {inner}
            </div>
        </div>"#)
    }

    #[test]
    fn in_game_splits_status_and_game() {
        assert_eq!(
            classify_status("In-Game Half-Life 3"),
            (Some(s!("In-Game")), Some(s!("Half-Life 3")))
        );
        assert_eq!(classify_status("In-Game"), (Some(s!("In-Game")), None));
        assert_eq!(classify_status(" Online "), (Some(s!("Online")), None));
    }

    #[test]
    fn reads_online_friend() {
        let html = block(
            "https://steamcommunity.com/id/alyx",
            r#"Alyx<br><span class="friendSmallText">Online</span>"#,
        );
        let d = Html::parse_document(&html);
        assert_eq!(friends(&d), vec![Friend {
            name: s!("Alyx"),
            profile_link: Some(s!("https://steamcommunity.com/id/alyx")),
            status: Some(s!("Online")),
            current_game: None,
        }]);
    }

    #[test]
    fn reads_in_game_friend() {
        let html = block(
            "https://steamcommunity.com/profiles/7656",
            "Barney<br>\n<span class=\"friendSmallText\">\n  In-Game<br>\n  Half-Life 3\n</span>",
        );
        let d = Html::parse_document(&html);
        let got = friends(&d);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, "Barney");
        assert_eq!(got[0].status.as_deref(), Some("In-Game"));
        assert_eq!(got[0].current_game.as_deref(), Some("Half-Life 3"));
    }

    #[test]
    fn status_falls_back_to_trailing_lines() {
        let html = block("x", "Kleiner<br>\nLast Online 3 days ago");
        let d = Html::parse_document(&html);
        let got = friends(&d);
        assert_eq!(got[0].status.as_deref(), Some("Last Online 3 days ago"));
        assert_eq!(got[0].current_game, None);
    }

    #[test]
    fn nameless_block_is_skipped() {
        let html = block("x", "");
        assert!(friends(&Html::parse_document(&html)).is_empty());
    }
}
