// src/config/options.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Artsy,
    Sothebys,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Artsy => "Artsy",
            SourceKind::Sothebys => "Sotheby's",
        }
    }

    /// What the filter combo box is called for this source.
    pub fn filter_label(&self) -> &'static str {
        match self {
            SourceKind::Artsy => "Medium:",
            SourceKind::Sothebys => "Category:",
        }
    }
}

/// Guess tolerance. Level 0 is the tightest band, 2 the widest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Hard,
    Medium,
    Easy,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn level(&self) -> u32 {
        match self {
            Difficulty::Hard => 0,
            Difficulty::Medium => 1,
            Difficulty::Easy => 2,
        }
    }

    /// Proportional widening applied to the raw price range.
    pub fn factor(&self) -> f64 {
        0.05 + 0.10 * self.level() as f64
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Hard => "Hard",
            Difficulty::Medium => "Medium",
            Difficulty::Easy => "Easy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Hard => {
                "Hard - the price you guess has to be within +/- 5% of the actual price"
            }
            Difficulty::Medium => {
                "Medium - the price you guess has to be within +/- 15% of the actual price"
            }
            Difficulty::Easy => {
                "Easy - the price you guess has to be within +/- 25% of the actual price"
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOptions {
    pub source: SourceKind,
    /// Index into the active source's filter list.
    pub filter_index: usize,
    pub limit: usize,
    pub difficulty: Difficulty,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            source: SourceKind::Artsy,
            filter_index: 0,
            limit: 1,
            difficulty: Difficulty::Easy,
        }
    }
}
