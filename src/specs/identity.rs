// src/specs/identity.rs
//! Single-node fields: who the profile is, what it looks like, when it was made.

use scraper::Html;

use crate::config::consts::{ MEMBER_SINCE, YEARS_OF_SERVICE };
use crate::core::html::{ first, first_in, attr, text, text_lines, text_ws, sel };
use crate::core::sanitize::{ after, css_url };
use crate::error::FieldIssue;
use super::Extracted;

pub fn name(doc: &Html) -> Extracted<String> {
    Ok(first(doc, "span.actual_persona_name").map(text))
}

pub fn level(doc: &Html) -> Extracted<u32> {
    let Some(badge) = first(doc, "span.friendPlayerLevelNum") else {
        return Ok(None);
    };
    let raw = text(badge);
    raw.parse()
        .map(Some)
        .map_err(|_| FieldIssue::new("level", format!("not a number: {raw:?}")))
}

/// Country/region is the bare text right after the flag image.
pub fn location(doc: &Html) -> Extracted<String> {
    Ok(first(doc, "img.profile_flag")
        .and_then(|flag| flag.next_sibling())
        .and_then(|node| node.value().as_text().map(|t| t.trim().to_string())))
}

pub fn status(doc: &Html) -> Extracted<String> {
    Ok(first(doc, "div.profile_in_game_header").map(text))
}

pub fn avatar_url(doc: &Html) -> Extracted<String> {
    Ok(first(doc, "div.playerAvatarAutoSizeInner")
        .and_then(|inner| first_in(inner, "img"))
        .and_then(|img| attr(img, "src")))
}

/// Animated background video first; static CSS background otherwise.
pub fn background_url(doc: &Html) -> Extracted<String> {
    let animated = first(doc, "div.profile_animated_background")
        .and_then(|bg| first_in(bg, "video source"))
        .and_then(|source| attr(source, "src"));
    let still = || {
        first(doc, "div.has_profile_background")
            .and_then(|bg| attr(bg, "style"))
            .and_then(|style| css_url(&style))
    };
    Ok(animated.or_else(still))
}

/// e.g. "13.1 hours past 2 weeks"
pub fn recent_activity(doc: &Html) -> Extracted<String> {
    Ok(first(doc, ".recentgame_recentplaytime").map(text_ws))
}

/// Line breaks are kept, markup indentation is not.
pub fn profile_description(doc: &Html) -> Extracted<String> {
    Ok(first(doc, ".profile_summary").map(|summary| text_lines(summary).join("\n")))
}

/// From the "Years of Service" badge tooltip:
/// `Years of Service<br>Member since 12 September, 2010.` → `12 September, 2010`
pub fn date_of_creation(doc: &Html) -> Extracted<String> {
    let tooltip = doc
        .select(&sel("[data-tooltip-html]"))
        .filter_map(|el| el.value().attr("data-tooltip-html"))
        .find(|t| t.contains(YEARS_OF_SERVICE));
    let Some(tooltip) = tooltip else {
        return Ok(None);
    };
    let Some(rest) = after(tooltip, MEMBER_SINCE) else {
        return Err(FieldIssue::new(
            "date_of_creation",
            format!("badge tooltip has no {MEMBER_SINCE:?}: {tooltip:?}"),
        ));
    };
    let date = rest.split('.').next().unwrap_or(rest).trim();
    Ok(Some(date.to_string()))
}
