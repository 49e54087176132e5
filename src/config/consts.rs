// src/config/consts.rs

// Net config
pub const ARTSY_HOST: &str = "https://www.artsy.net";
pub const SOTHEBYS_HOST: &str = "https://www.sothebys.com";
pub const RATES_PREFIX: &str =
    "https://cdn.jsdelivr.net/gh/fawazahmed0/currency-api@1/latest/currencies/usd/";
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// Some sites serve a stripped page to obvious bots
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows Phone 10.0; Android 6.0.1; Microsoft; RM-1152) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/52.0.2743.116 Mobile Safari/537.36 Edge/15.15254";

// Local cache
pub const STORE_DIR: &str = ".store";

// Downloaded images: img/<ISO date>/<title>.jpg, one folder per day
pub const IMG_DIR: &str = "img";

// Collection pacing
pub const PACE_EVERY: usize = 5; // pause after every Nth publish
pub const PACE_PAUSE_MS: u64 = 5_000; // be polite

// Scrape
pub const ARTSY_PAGE_MAX: u32 = 100;
pub const PAGE_TRIES: usize = 25; // give up on a filter after this many page fetches

// Display geometry
pub const WINDOW_W: f32 = 1080.0;
pub const WINDOW_H: f32 = 720.0;
pub const CHROME_ALLOWANCE: u32 = 200; // vertical space reserved for widgets on the guess screen
pub const REVIEW_WIDTH: u32 = 500;

// Game limits
pub const MIN_WORKS: usize = 1;
pub const MAX_WORKS: usize = 10;
