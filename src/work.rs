// src/work.rs
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// A piece of artwork scraped off the internet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub title: String,
    pub image_url: String,
    /// Listed estimate, low ≤ high. Both equal when the listing has one price.
    pub prices: (u64, u64),
}

/// One downloaded artwork in flight between Collector and Assembler.
pub type Staged = (Artwork, PathBuf);

/// Shared results list: the Assembler appends, the UI reads.
pub type WorkList = Arc<Mutex<Vec<Guesswork>>>;

/// An [`Artwork`] plus everything the game derives from it.
#[derive(Clone, Debug)]
pub struct Guesswork {
    pub art: Artwork,
    pub path: PathBuf,

    // guess-screen and review-screen image dimensions
    pub disp_width: u32,
    pub disp_height: u32,
    pub review_width: u32,
    pub review_height: u32,

    /// Inclusive range a guess is accepted in.
    pub lower_bound: u64,
    pub upper_bound: u64,

    /// Keep the image file on disk after the session?
    pub keep: bool,
    pub guess: Option<u64>,
}

impl Guesswork {
    pub fn guessed_right(&self) -> bool {
        matches!(self.guess, Some(g) if g >= self.lower_bound && g <= self.upper_bound)
    }
}

/// Widen `prices` into the acceptance band for the given difficulty factor.
pub fn acceptance_band(prices: (u64, u64), factor: f64) -> (u64, u64) {
    let lower = (prices.0 as f64 * (1.0 - factor)).floor() as u64;
    let upper = (prices.1 as f64 * (1.0 + factor)).floor() as u64;
    (lower, upper)
}

/// Delete session images not flagged keep. Clears the list.
pub fn remove_works(works: &mut Vec<Guesswork>) {
    for w in works.drain(..) {
        if !w.keep && w.path.is_file() {
            if let Err(e) = fs::remove_file(&w.path) {
                loge!("Cleanup: {} ({e})", w.path.display());
            }
        }
    }
}
