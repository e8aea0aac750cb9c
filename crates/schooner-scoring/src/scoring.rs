use schooner_core::{Category, RollTally, ScoringConfig};

/// Distinct faces needed for a small straight.
pub const SMALL_STRAIGHT_MIN_FACES: usize = 4;
/// Distinct faces needed for AllDifferent and LargeStraight.
pub const ALL_DIFFERENT_FACES: usize = 5;
/// Same-face dice needed before a face category scores.
pub const FACE_MIN_COUNT: u32 = 2;

/// Score of every category for one roll, in [`Category::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    entries: [(Category, u64); Category::COUNT],
}

impl ScoreCard {
    /// Score for a single category.
    pub fn get(&self, category: Category) -> u64 {
        self.entries[category.index()].1
    }

    /// Highest score on the card.
    pub fn best(&self) -> u64 {
        self.entries.iter().map(|&(_, s)| s).max().unwrap_or(0)
    }

    /// Every category scoring [`best`](Self::best), in card order.
    pub fn top(&self) -> Vec<Category> {
        let best = self.best();
        self.entries
            .iter()
            .filter(|&&(_, s)| s == best)
            .map(|&(c, _)| c)
            .collect()
    }

    /// `(category, score)` pairs in card order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        self.entries.iter().copied()
    }
}

/// Scores rolls against a fixed set of category point values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    /// Scorer with custom point values.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Scorer with point values from [`ScoringConfig::load`]: the file named by
    /// `SCHOONER_SCORING_CONFIG`, else `config/scoring.toml`, else defaults.
    pub fn load() -> Self {
        Self::new(ScoringConfig::load())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score `roll` in `category`. Never fails; rolls that do not qualify score 0.
    pub fn score(&self, category: Category, roll: &[u32]) -> u64 {
        self.score_tally(category, &RollTally::from_roll(roll))
    }

    fn score_tally(&self, category: Category, tally: &RollTally) -> u64 {
        let cfg = &self.config;
        match category {
            Category::Ones
            | Category::Twos
            | Category::Threes
            | Category::Fours
            | Category::Fives
            | Category::Sixes
            | Category::Sevens
            | Category::Eights => category.kind().map_or(0, |face| face_score(tally, face)),
            Category::ThreeOfAKind | Category::FourOfAKind => category
                .kind()
                .map_or(0, |multiple| multiple_of_kind_score(tally, multiple)),
            Category::FullHouse => award(tally.distinct() == 2, cfg.full_house),
            Category::SmallStraight => award(is_small_straight(tally), cfg.small_straight),
            Category::AllDifferent => {
                award(tally.distinct() == ALL_DIFFERENT_FACES, cfg.all_different)
            },
            Category::LargeStraight => award(is_large_straight(tally), cfg.large_straight),
            Category::Schooner => award(tally.distinct() == 1, cfg.schooner),
            Category::Chance => tally.sum(),
        }
    }

    /// Score `roll` in the category named by a stable identifier.
    ///
    /// Unknown identifiers score 0 rather than erroring.
    pub fn score_named(&self, name: &str, roll: &[u32]) -> u64 {
        match name.parse::<Category>() {
            Ok(category) => self.score(category, roll),
            Err(e) => {
                tracing::debug!(error = %e, "Scoring unknown category as 0");
                0
            },
        }
    }

    /// Score every category for `roll`, tallying the roll once.
    pub fn score_card(&self, roll: &[u32]) -> ScoreCard {
        let tally = RollTally::from_roll(roll);
        ScoreCard {
            entries: Category::ALL.map(|c| (c, self.score_tally(c, &tally))),
        }
    }

    /// Every category tied for the highest score, in card order.
    ///
    /// When nothing scores (e.g. an empty roll) all categories tie at 0.
    pub fn top_categories(&self, roll: &[u32]) -> Vec<Category> {
        let card = self.score_card(roll);
        let top = card.top();
        tracing::trace!(?roll, best = card.best(), ?top, "Top categories");
        top
    }
}

fn award(qualifies: bool, points: u32) -> u64 {
    if qualifies { u64::from(points) } else { 0 }
}

/// A single die of the face scores nothing; a pair or better scores count × face.
fn face_score(tally: &RollTally, face: u32) -> u64 {
    let count = tally.count(face);
    if count >= FACE_MIN_COUNT {
        u64::from(count) * u64::from(face)
    } else {
        0
    }
}

/// Sum of all dice once any face appears at least `multiple` times.
fn multiple_of_kind_score(tally: &RollTally, multiple: u32) -> u64 {
    if tally.max_count() >= multiple {
        tally.sum()
    } else {
        0
    }
}

/// At least four distinct faces forming a run that tolerates one gap of any width.
fn is_small_straight(tally: &RollTally) -> bool {
    tally.distinct() >= SMALL_STRAIGHT_MIN_FACES && tally.gaps() <= 1
}

fn is_large_straight(tally: &RollTally) -> bool {
    tally.distinct() == ALL_DIFFERENT_FACES && tally.gaps() == 0
}

/// Score `roll` in `category` with the standard point values.
pub fn score(category: Category, roll: &[u32]) -> u64 {
    Scorer::default().score(category, roll)
}

/// Score `roll` in the category named `name`; unknown names score 0.
pub fn score_named(name: &str, roll: &[u32]) -> u64 {
    Scorer::default().score_named(name, roll)
}

/// Every category's standard score for `roll`.
pub fn score_card(roll: &[u32]) -> ScoreCard {
    Scorer::default().score_card(roll)
}

/// Categories tied for the highest standard score, in card order.
pub fn top_categories(roll: &[u32]) -> Vec<Category> {
    Scorer::default().top_categories(roll)
}
