// src/specs/counters.rs
//! Games / badges / friends totals.
//!
//! Each counter has two independent sources. The second is only consulted when
//! the first yields nothing, and the first candidate that parses wins.

use scraper::Html;

use crate::core::html::{ all, first_in, text };
use crate::core::sanitize::parse_count;
use super::Extracted;

type Strategy = fn(&Html) -> Option<u32>;

const GAMES: [Strategy; 2] = [games_count_link, games_page_link];
const BADGES: [Strategy; 2] = [badges_block, badges_count_link];
const FRIENDS: [Strategy; 2] = [friends_block, friends_count_link];

pub fn total_games(doc: &Html) -> Extracted<u32> {
    Ok(first_success(doc, &GAMES))
}

pub fn total_badges(doc: &Html) -> Extracted<u32> {
    Ok(first_success(doc, &BADGES))
}

pub fn total_friends(doc: &Html) -> Extracted<u32> {
    Ok(first_success(doc, &FRIENDS))
}

fn first_success(doc: &Html, strategies: &[Strategy]) -> Option<u32> {
    strategies.iter().find_map(|strategy| strategy(doc))
}

/* ---------------- sources ---------------- */

/// `<div class="profile_count_link"><span class="count_link_label">Games</span>
///  <span class="profile_count_link_total">312</span></div>`
fn labelled_count_link(doc: &Html, links: &str, label: &str) -> Option<u32> {
    all(doc, links).into_iter().find_map(|link| {
        let this_label = first_in(link, ".count_link_label").map(text)?;
        if !this_label.eq_ignore_ascii_case(label) {
            return None;
        }
        first_in(link, ".profile_count_link_total").and_then(|t| parse_count(&text(t)))
    })
}

/// First count total inside `container`.
fn total_in(doc: &Html, container: &str) -> Option<u32> {
    all(doc, container).into_iter().find_map(|block| {
        first_in(block, ".profile_count_link_total").and_then(|t| parse_count(&text(t)))
    })
}

fn games_count_link(doc: &Html) -> Option<u32> {
    labelled_count_link(doc, ".profile_item_links .profile_count_link", "Games")
}

fn games_page_link(doc: &Html) -> Option<u32> {
    total_in(doc, r#"a[href*="/games/"]"#)
}

fn badges_block(doc: &Html) -> Option<u32> {
    total_in(doc, ".profile_badges")
}

fn badges_count_link(doc: &Html) -> Option<u32> {
    labelled_count_link(doc, ".profile_count_link", "Badges")
}

fn friends_block(doc: &Html) -> Option<u32> {
    total_in(doc, ".profile_friend_links")
}

fn friends_count_link(doc: &Html) -> Option<u32> {
    labelled_count_link(doc, ".profile_count_link", "Friends")
}
