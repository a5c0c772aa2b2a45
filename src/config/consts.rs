// src/config/consts.rs

// Net config
pub const HOST: &str = "steamcommunity.com";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Page markers
pub const HOURS_SUFFIX: &str = " hrs";
pub const YEARS_OF_SERVICE: &str = "Years of Service";
pub const MEMBER_SINCE: &str = "Member since ";
pub const IN_GAME: &str = "In-Game";

// Export
pub const DEFAULT_FILE: &str = "steam_profiles";
pub const MISSING: &str = "N/A";

// Local config
pub const DEFAULT_CONFIG_FILE: &str = "steam_scrape.toml";
