// src/specs/mod.rs
//! # Profile page scraping specs
//!
//! This module encodes *where each field lives in a Steam profile page* and
//! *how to read it*. Every field is an **extraction rule**: a plain function
//! from the parsed document to [`Extracted<T>`].
//!
//! - `Ok(Some(v))` – found and read.
//! - `Ok(None)` – the node is not on the page. Not a problem, just absent.
//! - `Err(issue)` – the node is there but its content could not be read.
//!
//! [`extract_profile`] runs every rule, hands each `Err` to the caller's
//! [`Report`] and leaves that field unset. No rule can stop the others.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and locator checks (`scrape`).
//! - **Output formatting** (`csv`, `file`).
//!
//! ## Conventions
//! - Selectors are class/attribute matches on the live markup; text is trimmed.
//! - Counters try two sources; the first that yields a number wins, values are
//!   never combined (`counters`).
//! - Friend parsing assumes name / status / game appear in that order inside
//!   the friend block. Reordered markup yields wrong fields rather than errors.
//!
//! ## Testing notes
//! Rules are testable offline against small fragments or a saved page.

pub mod counters;
pub mod friends;
pub mod games;
pub mod identity;

use scraper::Html;

use crate::data::{ Game, ProfileRecord };
use crate::error::FieldIssue;
use crate::report::Report;

pub type Extracted<T> = Result<Option<T>, FieldIssue>;

/// Run every rule over `doc`. Always produces a record.
pub fn extract_profile(doc: &Html, report: &mut dyn Report) -> ProfileRecord {
    let games: Vec<Game> = games::recent_games(doc)
        .into_iter()
        .map(|entry| entry.settle(report))
        .collect();
    let total_playtime_hours = games::total_playtime(&games);

    ProfileRecord {
        name: settle(report, identity::name(doc)),
        level: settle(report, identity::level(doc)),
        location: settle(report, identity::location(doc)),
        status: settle(report, identity::status(doc)),
        avatar_url: settle(report, identity::avatar_url(doc)),
        background_url: settle(report, identity::background_url(doc)),
        total_games: settle(report, counters::total_games(doc)),
        total_badges: settle(report, counters::total_badges(doc)),
        total_friends: settle(report, counters::total_friends(doc)),
        total_playtime_hours,
        date_of_creation: settle(report, identity::date_of_creation(doc)),
        recent_activity: settle(report, identity::recent_activity(doc)),
        profile_description: settle(report, identity::profile_description(doc)),
        games,
        friends: friends::friends(doc),
    }
}

/// Collapse a rule result into the record's `Option`, reporting any issue.
pub(crate) fn settle<T>(report: &mut dyn Report, extracted: Extracted<T>) -> Option<T> {
    match extracted {
        Ok(v) => v,
        Err(issue) => {
            report.warn(&issue);
            None
        }
    }
}
